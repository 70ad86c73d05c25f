//! Configuration - Theme selection and color overrides.
//!
//! Loaded from TOML or from the environment:
//!
//! ```toml
//! theme = "nord"
//! error_color = "#ff0000"   # optional
//! text_color = "ansi:7"     # optional
//! ```
//!
//! | Variable                      | Field         |
//! |-------------------------------|---------------|
//! | `SPARK_CARD_FORM_THEME`       | `theme`       |
//! | `SPARK_CARD_FORM_ERROR_COLOR` | `error_color` |
//! | `SPARK_CARD_FORM_TEXT_COLOR`  | `text_color`  |

use serde::Deserialize;

use crate::error::FormError;
use crate::theme::{get_preset, preset_names, FormTheme};
use crate::types::Rgba;

pub const ENV_THEME: &str = "SPARK_CARD_FORM_THEME";
pub const ENV_ERROR_COLOR: &str = "SPARK_CARD_FORM_ERROR_COLOR";
pub const ENV_TEXT_COLOR: &str = "SPARK_CARD_FORM_TEXT_COLOR";

fn default_theme() -> String {
    "terminal".to_string()
}

/// Form configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FormConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default)]
    pub error_color: Option<String>,
    #[serde(default)]
    pub text_color: Option<String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            error_color: None,
            text_color: None,
        }
    }
}

impl FormConfig {
    /// Parse a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self, FormError> {
        Ok(toml::from_str(source)?)
    }

    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment-shaped).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            theme: non_empty(ENV_THEME).unwrap_or_else(default_theme),
            error_color: non_empty(ENV_ERROR_COLOR),
            text_color: non_empty(ENV_TEXT_COLOR),
        }
    }

    /// Resolve the preset and apply color overrides.
    pub fn resolve_theme(&self) -> Result<FormTheme, FormError> {
        let mut theme = get_preset(&self.theme).ok_or_else(|| FormError::UnknownTheme {
            name: self.theme.clone(),
            available: preset_names().join(", "),
        })?;

        if let Some(value) = &self.error_color {
            theme.error = parse_color("error_color", value)?;
        }
        if let Some(value) = &self.text_color {
            theme.text = parse_color("text_color", value)?;
        }

        tracing::debug!(theme = %theme.name, "resolved form theme");
        Ok(theme)
    }
}

fn parse_color(setting: &'static str, value: &str) -> Result<Rgba, FormError> {
    Rgba::parse(value).ok_or_else(|| FormError::InvalidColor {
        setting,
        value: value.to_string(),
    })
}
