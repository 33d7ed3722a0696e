//! Named input fields with declared numeric ranges and their validation.

use thiserror::Error;

use crate::geometry::Point3;
use crate::orientation::Orientation;

/// The eight inputs of a thickness calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Strike,
    Dip,
    X1,
    Y1,
    Z1,
    X2,
    Y2,
    Z2,
}

/// Declaration of an input field and the range it accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    /// Inclusive `(min, max)` bounds. `None` accepts any finite value.
    pub range: Option<(f64, f64)>,
}

impl FieldSpec {
    /// Returns `true` if `value` lies within the declared range.
    pub fn accepts(&self, value: f64) -> bool {
        match self.range {
            Some((min, max)) => (min..=max).contains(&value),
            None => true,
        }
    }
}

const STRIKE_SPEC: FieldSpec = FieldSpec {
    name: "strike",
    label: "Strike",
    range: Some((0.0, 360.0)),
};
const DIP_SPEC: FieldSpec = FieldSpec {
    name: "dip",
    label: "Dip",
    range: Some((0.0, 90.0)),
};

impl Field {
    /// Every field in form order.
    pub const ALL: [Field; 8] = [
        Field::Strike,
        Field::Dip,
        Field::X1,
        Field::Y1,
        Field::Z1,
        Field::X2,
        Field::Y2,
        Field::Z2,
    ];

    pub fn spec(self) -> FieldSpec {
        let coordinate = |name, label| FieldSpec {
            name,
            label,
            range: None,
        };
        match self {
            Field::Strike => STRIKE_SPEC,
            Field::Dip => DIP_SPEC,
            Field::X1 => coordinate("x1", "X1"),
            Field::Y1 => coordinate("y1", "Y1"),
            Field::Z1 => coordinate("z1", "Z1"),
            Field::X2 => coordinate("x2", "X2"),
            Field::Y2 => coordinate("y2", "Y2"),
            Field::Z2 => coordinate("z2", "Z2"),
        }
    }

    pub fn name(self) -> &'static str {
        self.spec().name
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.spec().label)
    }
}

impl std::str::FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown field {}", s))
    }
}

/// Reasons a set of inputs cannot be turned into a calculation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// At least one field is empty.
    #[error("Enter all values...")]
    Incomplete,
    /// A field is not a finite real number.
    #[error("Invalid number format")]
    InvalidNumber { field: Field },
    /// A field lies outside its declared range.
    #[error("{field} must be {min}-{max}\u{00B0}")]
    OutOfRange { field: Field, min: f64, max: f64 },
}

/// Raw, unparsed text of every field.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FormValues {
    #[serde(default)]
    pub strike: String,
    #[serde(default)]
    pub dip: String,
    #[serde(default)]
    pub x1: String,
    #[serde(default)]
    pub y1: String,
    #[serde(default)]
    pub z1: String,
    #[serde(default)]
    pub x2: String,
    #[serde(default)]
    pub y2: String,
    #[serde(default)]
    pub z2: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Strike => &self.strike,
            Field::Dip => &self.dip,
            Field::X1 => &self.x1,
            Field::Y1 => &self.y1,
            Field::Z1 => &self.z1,
            Field::X2 => &self.x2,
            Field::Y2 => &self.y2,
            Field::Z2 => &self.z2,
        }
    }

    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        let slot = match field {
            Field::Strike => &mut self.strike,
            Field::Dip => &mut self.dip,
            Field::X1 => &mut self.x1,
            Field::Y1 => &mut self.y1,
            Field::Z1 => &mut self.z1,
            Field::X2 => &mut self.x2,
            Field::Y2 => &mut self.y2,
            Field::Z2 => &mut self.z2,
        };
        *slot = text.into();
    }

    /// Returns `true` when every field holds some text.
    pub fn is_complete(&self) -> bool {
        Field::ALL.iter().all(|f| !self.get(*f).is_empty())
    }

    /// Parses and range checks every field.
    pub fn validate(&self) -> Result<TstInput, InputError> {
        if !self.is_complete() {
            return Err(InputError::Incomplete);
        }
        let mut values = [0.0; 8];
        for field in Field::ALL {
            values[field.index()] = parse_number(field, self.get(field))?;
        }
        TstInput::from_array(values)
    }
}

fn parse_number(field: Field, text: &str) -> Result<f64, InputError> {
    match text.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::InvalidNumber { field }),
    }
}

fn check_range(field: Field, value: f64) -> Result<(), InputError> {
    let spec = field.spec();
    match spec.range {
        Some((min, max)) if !spec.accepts(value) => {
            Err(InputError::OutOfRange { field, min, max })
        }
        _ => Ok(()),
    }
}

/// Validated inputs ready for the calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TstInput {
    pub orientation: Orientation,
    pub point1: Point3,
    pub point2: Point3,
}

impl TstInput {
    /// Validates already numeric inputs against the declared field ranges.
    #[allow(clippy::too_many_arguments)]
    pub fn from_values(
        strike: f64,
        dip: f64,
        x1: f64,
        y1: f64,
        z1: f64,
        x2: f64,
        y2: f64,
        z2: f64,
    ) -> Result<Self, InputError> {
        Self::from_array([strike, dip, x1, y1, z1, x2, y2, z2])
    }

    fn from_array(values: [f64; 8]) -> Result<Self, InputError> {
        for field in Field::ALL {
            let value = values[field.index()];
            if !value.is_finite() {
                return Err(InputError::InvalidNumber { field });
            }
            check_range(field, value)?;
        }
        let [strike, dip, x1, y1, z1, x2, y2, z2] = values;
        Ok(Self {
            orientation: Orientation::new(strike, dip),
            point1: Point3::new(x1, y1, z1),
            point2: Point3::new(x2, y2, z2),
        })
    }

    /// Runs the thickness calculation on these inputs.
    pub fn thickness(&self) -> f64 {
        crate::thickness::compute_tst(self.orientation, self.point1, self.point2)
    }
}
