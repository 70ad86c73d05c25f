//! Error type for the fallible edges of the form: configuration, host input
//! and submission. Validation itself never fails.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormError {
    #[error("unknown field '{0}'")]
    UnknownField(String),

    #[error("unknown theme preset '{name}' (available: {available})")]
    UnknownTheme { name: String, available: String },

    #[error("invalid color for {setting}: '{value}'")]
    InvalidColor { setting: &'static str, value: String },

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("form cannot be submitted:\n{summary}")]
    SubmitDisabled { summary: String },
}
