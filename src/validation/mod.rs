//! Validation - Pure validators feeding the reactive pipeline.
//!
//! Every function here accepts arbitrary, partial or malformed text and
//! returns a definite answer. "Invalid" or "unknown" is the error
//! representation; nothing panics or returns `Err`.
//!
//! - [`classify`] - card number → [`CardType`]
//! - [`check_checksum`] - Luhn mod-10
//! - [`is_valid_cvc`] - CVC length rule per card type
//! - [`is_valid_expiration_date`] - `MM/YY` shape
//! - [`ErrorSummary`] - failing checks in reporting order

mod card_type;
mod checksum;
mod cvc;
mod expiration;
mod summary;

pub use card_type::{classify, CardType};
pub use checksum::check_checksum;
pub use cvc::is_valid_cvc;
pub use expiration::is_valid_expiration_date;
pub use summary::{ErrorSummary, ValidityCheck};
