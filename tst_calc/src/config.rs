//! Presentation settings for thickness results.

use serde::{Deserialize, Serialize};

/// Controls how a computed thickness is rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Unit label appended to the value, matching the input coordinates.
    pub unit_label: String,
    /// Number of decimal places shown.
    pub decimals: u8,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            unit_label: "meters".to_string(),
            decimals: 1,
        }
    }
}

impl ReportConfig {
    pub fn new(unit_label: &str, decimals: u8) -> Self {
        Self {
            unit_label: unit_label.to_string(),
            decimals,
        }
    }

    /// Renders the result label for `thickness`.
    pub fn format_thickness(&self, thickness: f64) -> String {
        format!(
            "True Stratigraphic Thickness: {:.*} {}",
            usize::from(self.decimals),
            thickness,
            self.unit_label
        )
    }

    /// Saves this configuration to a JSON file.
    pub fn save(&self, path: &str) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Loads a configuration from a JSON file. Missing keys take their
    /// default values.
    pub fn load(path: &str) -> std::io::Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config: ReportConfig = serde_json::from_str(&data)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }
}
