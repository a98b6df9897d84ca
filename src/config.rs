//! Theme controller configuration.
//!
//! DESIGN
//! ======
//! The storage key, root attribute, button id, media query, and labels live in
//! one owned struct handed to the controller at init, instead of being spread
//! across module constants. Embedders may override any subset from JSON.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::theme::Theme;

/// `localStorage` key holding the chosen theme.
pub const DEFAULT_STORAGE_KEY: &str = "app-theme";
/// Attribute written on the root element.
pub const DEFAULT_ATTRIBUTE: &str = "data-theme";
/// Element id of the toggle button.
pub const DEFAULT_BUTTON_ID: &str = "themeToggle";
/// Media query reporting a platform preference for light interfaces.
pub const DEFAULT_LIGHT_QUERY: &str = "(prefers-color-scheme: light)";

/// Names and labels the controller reads and writes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub attribute: String,
    pub button_id: String,
    pub light_query: String,
    pub light_label: String,
    pub dark_label: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            attribute: DEFAULT_ATTRIBUTE.to_owned(),
            button_id: DEFAULT_BUTTON_ID.to_owned(),
            light_query: DEFAULT_LIGHT_QUERY.to_owned(),
            light_label: "☀️ Тема".to_owned(),
            dark_label: "🌙 Тема".to_owned(),
        }
    }
}

impl ThemeConfig {
    /// Parse a JSON override. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Config`] when `raw` is not a JSON object of
    /// string fields.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Button label shown while `theme` is applied.
    pub fn label_for(&self, theme: Theme) -> &str {
        match theme {
            Theme::Light => &self.light_label,
            Theme::Dark => &self.dark_label,
        }
    }
}
