//! Theme - Text colors for normal and erroneous fields.
//!
//! A field flagged by the touched-error policy is drawn in the theme's
//! `error` color, every other field in its `text` color.
//!
//! # Example
//!
//! ```
//! use spark_card_form::theme::get_preset;
//!
//! let nord = get_preset("nord").unwrap();
//! assert_ne!(nord.field_color(true), nord.field_color(false));
//! ```

use crate::types::Rgba;

/// Named color pair.
#[derive(Debug, Clone, PartialEq)]
pub struct FormTheme {
    pub name: String,
    pub error: Rgba,
    pub text: Rgba,
}

impl FormTheme {
    /// Color for a field given its show-error state.
    pub fn field_color(&self, show_as_error: bool) -> Rgba {
        if show_as_error { self.error } else { self.text }
    }
}

impl Default for FormTheme {
    fn default() -> Self {
        terminal()
    }
}

// =============================================================================
// Presets
// =============================================================================

/// ANSI red on the terminal's default foreground.
pub fn terminal() -> FormTheme {
    FormTheme {
        name: "terminal".to_string(),
        error: Rgba::ansi(1),
        text: Rgba::TERMINAL_DEFAULT,
    }
}

pub fn dracula() -> FormTheme {
    FormTheme {
        name: "dracula".to_string(),
        error: Rgba::from_rgb_int(0xff5555),
        text: Rgba::from_rgb_int(0xf8f8f2),
    }
}

pub fn nord() -> FormTheme {
    FormTheme {
        name: "nord".to_string(),
        error: Rgba::from_rgb_int(0xbf616a),
        text: Rgba::from_rgb_int(0xd8dee9),
    }
}

pub fn monokai() -> FormTheme {
    FormTheme {
        name: "monokai".to_string(),
        error: Rgba::from_rgb_int(0xf92672),
        text: Rgba::from_rgb_int(0xf8f8f2),
    }
}

/// Names accepted by [`get_preset`].
pub fn preset_names() -> &'static [&'static str] {
    &["terminal", "dracula", "nord", "monokai"]
}

/// Look up a preset by name (case-insensitive).
pub fn get_preset(name: &str) -> Option<FormTheme> {
    match name.trim().to_ascii_lowercase().as_str() {
        "terminal" => Some(terminal()),
        "dracula" => Some(dracula()),
        "nord" => Some(nord()),
        "monokai" => Some(monokai()),
        _ => None,
    }
}
