//! Core types for spark-card-form.
//!
//! Field identities and the color value handed to the presentation sink.

use std::fmt;
use std::str::FromStr;

use crate::error::FormError;

// =============================================================================
// FieldId
// =============================================================================

/// One of the three validatable input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldId {
    CardNumber,
    Cvc,
    ExpirationDate,
}

impl FieldId {
    /// All fields, in tab order.
    pub const ALL: [FieldId; 3] = [FieldId::CardNumber, FieldId::Cvc, FieldId::ExpirationDate];

    /// Position in [`FieldId::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::CardNumber => 0,
            Self::Cvc => 1,
            Self::ExpirationDate => 2,
        }
    }

    /// Stable identifier (used in config and logs).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CardNumber => "card_number",
            Self::Cvc => "cvc",
            Self::ExpirationDate => "expiration_date",
        }
    }

    /// Human-readable label for rendering.
    pub const fn label(self) -> &'static str {
        match self {
            Self::CardNumber => "Card number",
            Self::Cvc => "CVC",
            Self::ExpirationDate => "Expiration (MM/YY)",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "card_number" | "number" => Ok(Self::CardNumber),
            "cvc" => Ok(Self::Cvc),
            "expiration_date" | "expiration" => Ok(Self::ExpirationDate),
            other => Err(FormError::UnknownField(other.to_string())),
        }
    }
}

// =============================================================================
// Color
// =============================================================================

/// RGBA color with 8-bit channels (0-255).
///
/// Special values: r=-1 means "terminal default", r=-2 marks an ANSI palette
/// index stored in `g`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
    pub r: i16,
    pub g: i16,
    pub b: i16,
    pub a: i16,
}

impl Rgba {
    /// Create a new RGBA color.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: r as i16,
            g: g as i16,
            b: b as i16,
            a: a as i16,
        }
    }

    /// Create an opaque RGB color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Terminal default color (let terminal decide).
    pub const TERMINAL_DEFAULT: Self = Self {
        r: -1,
        g: -1,
        b: -1,
        a: -1,
    };

    pub const RED: Self = Self::rgb(255, 0, 0);

    /// ANSI palette color (0-255).
    pub const fn ansi(index: u8) -> Self {
        Self {
            r: -2,
            g: index as i16,
            b: 0,
            a: 255,
        }
    }

    /// Create from a packed `0xRRGGBB` integer.
    pub const fn from_rgb_int(rgb: u32) -> Self {
        Self::rgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    #[inline]
    pub const fn is_terminal_default(&self) -> bool {
        self.r == -1
    }

    #[inline]
    pub const fn is_ansi(&self) -> bool {
        self.r == -2
    }

    /// ANSI palette index (only meaningful when `is_ansi()`).
    #[inline]
    pub const fn ansi_index(&self) -> u8 {
        self.g as u8
    }

    /// Parse hex color string (#RGB, #RRGGBB, #RRGGBBAA). `#` is optional.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n * 17);

        match hex.len() {
            3 => Some(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self::new(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
            _ => None,
        }
    }

    /// Parse a color from configuration.
    ///
    /// Accepts hex (see [`Rgba::from_hex`]), `ansi:N` and `default`.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        let lower = input.to_ascii_lowercase();

        if lower == "default" {
            return Some(Self::TERMINAL_DEFAULT);
        }
        if let Some(index) = lower.strip_prefix("ansi:") {
            return index.trim().parse::<u8>().ok().map(Self::ansi);
        }
        Self::from_hex(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_ids_roundtrip_through_names() {
        for field in FieldId::ALL {
            assert_eq!(field.as_str().parse::<FieldId>().unwrap(), field);
        }
        assert_eq!("number".parse::<FieldId>().unwrap(), FieldId::CardNumber);
    }

    #[test]
    fn test_unknown_field_name() {
        let err = "pin".parse::<FieldId>().unwrap_err();
        assert!(matches!(err, FormError::UnknownField(ref name) if name == "pin"));
    }

    #[test]
    fn test_field_index_matches_tab_order() {
        for (i, field) in FieldId::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_from_hex() {
        assert_eq!(Rgba::from_hex("#ff0000"), Some(Rgba::RED));
        assert_eq!(Rgba::from_hex("fff"), Some(Rgba::rgb(255, 255, 255)));
        assert_eq!(Rgba::from_hex("#ff000080"), Some(Rgba::new(255, 0, 0, 128)));
        assert_eq!(Rgba::from_hex("#gg0000"), None);
        assert_eq!(Rgba::from_hex("#ff00"), None);
        assert_eq!(Rgba::from_hex("#ééé"), None);
    }

    #[test]
    fn test_parse_keywords_and_ansi() {
        assert!(Rgba::parse("default").unwrap().is_terminal_default());
        let red = Rgba::parse("ansi:1").unwrap();
        assert!(red.is_ansi());
        assert_eq!(red.ansi_index(), 1);
        assert_eq!(Rgba::parse("ansi:300"), None);
        assert_eq!(Rgba::parse("crimson"), None);
    }

    #[test]
    fn test_from_rgb_int() {
        assert_eq!(Rgba::from_rgb_int(0x282a36), Rgba::rgb(40, 42, 54));
    }
}
