//! CVC validation against the card type's length rule.

use super::card_type::CardType;

/// Check a CVC for the given card type.
///
/// Valid iff all ASCII digits and exactly [`CardType::cvc_length`] long.
/// An unknown card type has no length rule, so nothing is valid for it.
pub fn is_valid_cvc(card_type: CardType, cvc: &str) -> bool {
    let Some(required) = card_type.cvc_length() else {
        return false;
    };
    cvc.len() == required && cvc.bytes().all(|b| b.is_ascii_digit())
}
