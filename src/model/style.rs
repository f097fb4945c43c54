//! Style parameters supplied by the caller.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// Visual parameters threaded through inline formatting and rendering.
///
/// Every field is required. The formatter neither validates nor defaults
/// them: whatever is stored here is interpolated into the generated
/// `style` attributes as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleConfig {
    /// Body text color (any CSS color)
    pub text_color: String,

    /// Accent color for rules, bold text, callouts and checkboxes
    pub accent_color: String,

    /// Base font size in px
    pub font_size: f64,

    /// Unitless line height
    pub line_height: f64,

    /// Letter spacing in px
    pub letter_spacing: f64,

    /// Bottom margin of paragraphs in px
    pub paragraph_margin: f64,
}

impl StyleConfig {
    /// Create a style configuration from all of its parts.
    pub fn new(
        text_color: impl Into<String>,
        accent_color: impl Into<String>,
        font_size: f64,
        line_height: f64,
        letter_spacing: f64,
        paragraph_margin: f64,
    ) -> Self {
        Self {
            text_color: text_color.into(),
            accent_color: accent_color.into(),
            font_size,
            line_height,
            letter_spacing,
            paragraph_margin,
        }
    }

    /// Parse a style configuration from JSON with camelCase field names.
    ///
    /// # Example
    ///
    /// ```
    /// use mdinline::StyleConfig;
    ///
    /// let style = StyleConfig::from_json_str(r##"{
    ///     "textColor": "#333", "accentColor": "#07c160",
    ///     "fontSize": 15, "lineHeight": 1.75,
    ///     "letterSpacing": 0.5, "paragraphMargin": 16
    /// }"##).unwrap();
    /// assert_eq!(style.accent_color, "#07c160");
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a style configuration from a JSON file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Overlay a partial JSON object onto this configuration.
    ///
    /// Only the keys present in `json` are replaced; unknown keys are
    /// ignored. Colors must be strings and sizes must be numbers.
    pub fn merge_json_str(mut self, json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(fields) = value else {
            return Err(Error::Style(
                "style must be a JSON object".to_string(),
            ));
        };

        for (key, value) in &fields {
            match key.as_str() {
                "textColor" => self.text_color = expect_string(key, value)?,
                "accentColor" => self.accent_color = expect_string(key, value)?,
                "fontSize" => self.font_size = expect_number(key, value)?,
                "lineHeight" => self.line_height = expect_number(key, value)?,
                "letterSpacing" => self.letter_spacing = expect_number(key, value)?,
                "paragraphMargin" => self.paragraph_margin = expect_number(key, value)?,
                other => log::debug!("Ignoring unknown style key: {}", other),
            }
        }

        Ok(self)
    }

    /// Overlay a partial JSON style file onto this configuration.
    pub fn merge_path<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        self.merge_json_str(&json)
    }

    /// Set the text color.
    pub fn with_text_color(mut self, color: impl Into<String>) -> Self {
        self.text_color = color.into();
        self
    }

    /// Set the accent color.
    pub fn with_accent_color(mut self, color: impl Into<String>) -> Self {
        self.accent_color = color.into();
        self
    }
}

fn expect_string(key: &str, value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| Error::Style(format!("{} must be a string", key)))
}

fn expect_number(key: &str, value: &Value) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| Error::Style(format!("{} must be a number", key)))
}
