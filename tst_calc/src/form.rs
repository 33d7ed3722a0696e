//! Toolkit independent model of the thickness input form.
//!
//! A front end forwards every text change to [`TstForm::set`] and displays
//! [`TstForm::message`]. The form recomputes on each change.

use log::trace;

use crate::config::ReportConfig;
use crate::input::{Field, FormValues, InputError};

/// Prompt shown on a fresh or cleared form.
pub const EMPTY_PROMPT: &str = "Enter values to calculate TST";

/// Current result state of a form.
#[derive(Debug, Clone, PartialEq)]
pub enum FormStatus {
    /// Nothing entered yet, or the form was cleared.
    Empty,
    Invalid(InputError),
    Computed(f64),
}

/// Input form holding the raw text of every field.
#[derive(Debug, Clone)]
pub struct TstForm {
    values: FormValues,
    status: FormStatus,
    config: ReportConfig,
}

impl Default for TstForm {
    fn default() -> Self {
        Self::new(ReportConfig::default())
    }
}

impl TstForm {
    pub fn new(config: ReportConfig) -> Self {
        Self {
            values: FormValues::default(),
            status: FormStatus::Empty,
            config,
        }
    }

    /// Creates a form pre-filled with `values` and computes its status.
    pub fn from_values(values: FormValues, config: ReportConfig) -> Self {
        let mut form = Self::new(config);
        form.values = values;
        form.update();
        form
    }

    /// Replaces the text of `field` and recomputes.
    pub fn set(&mut self, field: Field, text: impl Into<String>) {
        self.values.set(field, text);
        self.update();
    }

    /// Recomputes the status from the current values.
    pub fn update(&mut self) {
        self.status = match self.values.validate() {
            Ok(input) => FormStatus::Computed(input.thickness()),
            Err(e) => FormStatus::Invalid(e),
        };
        trace!("form status {:?}", self.status);
    }

    /// Empties every field and restores the initial prompt.
    pub fn clear(&mut self) {
        self.values = FormValues::default();
        self.status = FormStatus::Empty;
    }

    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Computed thickness, if the inputs are valid.
    pub fn thickness(&self) -> Option<f64> {
        match self.status {
            FormStatus::Computed(t) => Some(t),
            _ => None,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    /// Text to display in the result area.
    pub fn message(&self) -> String {
        match &self.status {
            FormStatus::Empty => EMPTY_PROMPT.to_string(),
            FormStatus::Invalid(e) => e.to_string(),
            FormStatus::Computed(t) => self.config.format_thickness(*t),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill(form: &mut TstForm, values: [&str; 8]) {
        for (field, text) in Field::ALL.into_iter().zip(values) {
            form.set(field, text);
        }
    }

    #[test]
    fn fresh_form_prompts() {
        let form = TstForm::default();
        assert_eq!(form.status(), &FormStatus::Empty);
        assert_eq!(form.message(), "Enter values to calculate TST");
    }

    #[test]
    fn partial_input_asks_for_all_values() {
        let mut form = TstForm::default();
        form.set(Field::Strike, "10");
        assert_eq!(form.message(), "Enter all values...");
        assert_eq!(form.thickness(), None);
    }

    #[test]
    fn live_update_after_each_change() {
        let mut form = TstForm::default();
        fill(&mut form, ["0", "30", "0", "0", "0", "0", "0", "100"]);
        assert_eq!(form.message(), "True Stratigraphic Thickness: 86.6 meters");
        form.set(Field::Dip, "95");
        assert_eq!(form.message(), "Dip must be 0-90\u{00B0}");
        form.set(Field::Dip, "0");
        assert_eq!(form.message(), "True Stratigraphic Thickness: 100.0 meters");
    }

    #[test]
    fn malformed_text() {
        let mut form = TstForm::default();
        fill(&mut form, ["0", "30", "0", "0", "0", "0", "0", "abc"]);
        assert_eq!(form.message(), "Invalid number format");
    }

    #[test]
    fn clear_resets() {
        let mut form = TstForm::default();
        fill(&mut form, ["90", "45", "0", "0", "0", "10", "0", "0"]);
        assert!(form.thickness().is_some());
        form.clear();
        assert_eq!(form.values(), &FormValues::default());
        assert_eq!(form.message(), EMPTY_PROMPT);
    }

    #[test]
    fn from_values_computes() {
        let mut values = FormValues::default();
        for (field, text) in Field::ALL.into_iter().zip(["90", "45", "0", "0", "0", "10", "0", "0"]) {
            values.set(field, text);
        }
        let form = TstForm::from_values(values, ReportConfig::new("m", 2));
        assert_eq!(form.message(), "True Stratigraphic Thickness: 7.07 m");
    }
}
