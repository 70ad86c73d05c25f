//! Expiration date shape check (`MM/YY`).
//!
//! Only the shape is checked. "99/25" passes: there is no month range or
//! past-date validation.

use std::sync::LazyLock;

use regex::Regex;

// ASCII digits only; `\d` would also accept other Unicode digits.
static EXPIRATION_DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}/[0-9]{2}$").expect("expiration pattern compiles"));

/// Check that the text is exactly two digits, `/`, two digits.
pub fn is_valid_expiration_date(text: &str) -> bool {
    EXPIRATION_DATE.is_match(text)
}
