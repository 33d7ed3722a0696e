//! JSON persistence of raw form values.

use crate::input::FormValues;

pub fn read_form_json(path: &str) -> std::io::Result<FormValues> {
    let contents = crate::io::read_to_string(path)?;
    let values: FormValues = serde_json::from_str(&contents)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
    Ok(values)
}

pub fn write_form_json(path: &str, values: &FormValues) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(values).map_err(std::io::Error::other)?;
    crate::io::write_string(path, &json)
}
