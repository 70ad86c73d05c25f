//! Card Type Classifier - Card network detection by prefix and length.
//!
//! Classification walks a fixed, ordered rule table. The first rule whose
//! prefix and length both match wins, so order matters where prefixes overlap.
//!
//! # Example
//!
//! ```
//! use spark_card_form::validation::{classify, CardType};
//!
//! assert_eq!(classify("4532015112830366"), CardType::Visa);
//! assert_eq!(classify("378282246310005"), CardType::Amex);
//! assert_eq!(classify("1234"), CardType::Unknown);
//! ```

use std::fmt;

// =============================================================================
// CARD TYPE
// =============================================================================

/// Payment network of a card number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CardType {
    Visa,
    Mastercard,
    Amex,
    DinersClub,
    Discover,
    Jcb,
    /// No rule matched (also used for empty and malformed input).
    #[default]
    Unknown,
}

impl CardType {
    /// Every recognized network, in rule order.
    pub const KNOWN: [CardType; 6] = [
        CardType::Visa,
        CardType::Mastercard,
        CardType::Amex,
        CardType::DinersClub,
        CardType::Discover,
        CardType::Jcb,
    ];

    /// Label shown next to the card number field.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Visa => "VISA",
            Self::Mastercard => "MASTERCARD",
            Self::Amex => "AMEX",
            Self::DinersClub => "DINERS_CLUB",
            Self::Discover => "DISCOVER",
            Self::Jcb => "JCB",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Required CVC length, or `None` when it cannot be determined.
    pub const fn cvc_length(self) -> Option<usize> {
        match self {
            Self::Amex => Some(4),
            Self::Unknown => None,
            _ => Some(3),
        }
    }

    /// Check if this is a recognized network.
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// RULE TABLE
// =============================================================================

/// One prefix and the number lengths it is valid for.
struct CardRule {
    card_type: CardType,
    prefix: &'static str,
    lengths: &'static [usize],
}

const fn rule(card_type: CardType, prefix: &'static str, lengths: &'static [usize]) -> CardRule {
    CardRule {
        card_type,
        prefix,
        lengths,
    }
}

static RULES: &[CardRule] = &[
    // Visa
    rule(CardType::Visa, "4", &[13, 16]),
    // Mastercard
    rule(CardType::Mastercard, "51", &[16]),
    rule(CardType::Mastercard, "52", &[16]),
    rule(CardType::Mastercard, "53", &[16]),
    rule(CardType::Mastercard, "54", &[16]),
    rule(CardType::Mastercard, "55", &[16]),
    // American Express
    rule(CardType::Amex, "34", &[15]),
    rule(CardType::Amex, "37", &[15]),
    // Diners Club
    rule(CardType::DinersClub, "300", &[14]),
    rule(CardType::DinersClub, "301", &[14]),
    rule(CardType::DinersClub, "302", &[14]),
    rule(CardType::DinersClub, "303", &[14]),
    rule(CardType::DinersClub, "304", &[14]),
    rule(CardType::DinersClub, "305", &[14]),
    rule(CardType::DinersClub, "36", &[14]),
    rule(CardType::DinersClub, "38", &[14]),
    // Discover
    rule(CardType::Discover, "6011", &[16]),
    rule(CardType::Discover, "65", &[16]),
    // JCB
    rule(CardType::Jcb, "2131", &[15]),
    rule(CardType::Jcb, "1800", &[15]),
    rule(CardType::Jcb, "35", &[16]),
];

// =============================================================================
// CLASSIFY
// =============================================================================

/// Classify a card number into its network.
///
/// Never fails: anything that is not a complete, all-digit number matching a
/// rule is [`CardType::Unknown`].
pub fn classify(number: &str) -> CardType {
    if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
        return CardType::Unknown;
    }

    let len = number.len();
    RULES
        .iter()
        .find(|r| r.lengths.contains(&len) && number.starts_with(r.prefix))
        .map(|r| r.card_type)
        .unwrap_or(CardType::Unknown)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_visa() {
        assert_eq!(classify("4532015112830366"), CardType::Visa);
        assert_eq!(classify("4222222222222"), CardType::Visa);
    }

    #[test]
    fn test_classify_mastercard() {
        assert_eq!(classify("5555555555554444"), CardType::Mastercard);
        assert_eq!(classify("5105105105105100"), CardType::Mastercard);
    }

    #[test]
    fn test_classify_amex() {
        assert_eq!(classify("378282246310005"), CardType::Amex);
        assert_eq!(classify("341111111111111"), CardType::Amex);
    }

    #[test]
    fn test_classify_diners_discover_jcb() {
        assert_eq!(classify("30569309025904"), CardType::DinersClub);
        assert_eq!(classify("38520000023237"), CardType::DinersClub);
        assert_eq!(classify("6011111111111117"), CardType::Discover);
        assert_eq!(classify("6500000000000002"), CardType::Discover);
        assert_eq!(classify("3530111333300000"), CardType::Jcb);
        assert_eq!(classify("213100000000001"), CardType::Jcb);
    }

    #[test]
    fn test_classify_partial_number_is_unknown() {
        // Right prefix, wrong length
        assert_eq!(classify("4532"), CardType::Unknown);
        assert_eq!(classify("37828224631000"), CardType::Unknown);
        assert_eq!(classify("45320151128303661"), CardType::Unknown);
    }

    #[test]
    fn test_classify_malformed_is_unknown() {
        assert_eq!(classify(""), CardType::Unknown);
        assert_eq!(classify("abc"), CardType::Unknown);
        assert_eq!(classify("4532 0151 1283 0366"), CardType::Unknown);
        assert_eq!(classify("453201511283036x"), CardType::Unknown);
        assert_eq!(classify("７７７７"), CardType::Unknown);
    }

    #[test]
    fn test_classify_unmatched_prefix_is_unknown() {
        assert_eq!(classify("1234567890123456"), CardType::Unknown);
        assert_eq!(classify("5612345678901234"), CardType::Unknown);
        assert_eq!(classify("30612345678901"), CardType::Unknown);
    }

    #[test]
    fn test_cvc_length_rule() {
        assert_eq!(CardType::Amex.cvc_length(), Some(4));
        assert_eq!(CardType::Visa.cvc_length(), Some(3));
        assert_eq!(CardType::Jcb.cvc_length(), Some(3));
        assert_eq!(CardType::Unknown.cvc_length(), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(CardType::Visa.to_string(), "VISA");
        assert_eq!(CardType::DinersClub.to_string(), "DINERS_CLUB");
        assert_eq!(CardType::Unknown.to_string(), "UNKNOWN");
        assert!(CardType::KNOWN.iter().all(|t| t.is_known()));
        assert!(!CardType::Unknown.is_known());
    }
}
