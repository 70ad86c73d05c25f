//! Error summary - failing checks in their fixed reporting order.

use std::fmt;

/// One of the four base checks that feed the error summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidityCheck {
    KnownCardType,
    Checksum,
    Cvc,
    ExpirationDate,
}

impl ValidityCheck {
    /// Reporting order of the summary.
    pub const ORDER: [ValidityCheck; 4] = [
        ValidityCheck::KnownCardType,
        ValidityCheck::Checksum,
        ValidityCheck::Cvc,
        ValidityCheck::ExpirationDate,
    ];

    /// Message shown when this check fails.
    pub const fn message(self) -> &'static str {
        match self {
            Self::KnownCardType => "Unknown card type",
            Self::Checksum => "Invalid checksum",
            Self::Cvc => "Invalid CVC code",
            Self::ExpirationDate => "Invalid expiration date",
        }
    }
}

/// The set of currently failing checks.
///
/// Always kept in [`ValidityCheck::ORDER`]. Displays as the failing messages
/// joined by `\n`, without a trailing newline, or the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorSummary {
    failing: Vec<ValidityCheck>,
}

impl ErrorSummary {
    /// Build a summary from the four check results.
    pub fn from_checks(
        is_known_card_type: bool,
        is_valid_checksum: bool,
        is_valid_cvc: bool,
        is_valid_expiration_date: bool,
    ) -> Self {
        let results = [
            is_known_card_type,
            is_valid_checksum,
            is_valid_cvc,
            is_valid_expiration_date,
        ];
        let failing = ValidityCheck::ORDER
            .iter()
            .zip(results)
            .filter(|(_, ok)| !ok)
            .map(|(check, _)| *check)
            .collect();
        Self { failing }
    }

    pub fn failing(&self) -> &[ValidityCheck] {
        &self.failing
    }

    pub fn is_empty(&self) -> bool {
        self.failing.is_empty()
    }

    /// Render the summary text.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ErrorSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, check) in self.failing.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(check.message())?;
        }
        Ok(())
    }
}
