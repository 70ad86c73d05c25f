//! Validity Derived - The combine-latest validation graph.
//!
//! Builds one memoized derived per named signal over the raw field text:
//!
//! ```text
//! number ──► card_type ──► is_known_card_type ──┐
//!    │           │                               ├─► is_valid_number ──┐
//!    └──────► is_valid_checksum ─────────────────┘                     │
//!                │                                                     ├─► is_submit_enabled
//! cvc ───────────┴──► is_valid_cvc ────────────────────────────────────┤
//! expiration ───────► is_valid_expiration_date ────────────────────────┘
//!
//! (is_known_card_type, is_valid_checksum, is_valid_cvc, is_valid_expiration_date)
//!                    ──► error_summary
//! ```
//!
//! Any antecedent change recomputes its dependents from the latest value of
//! every antecedent; antecedents do not need to change together. Deriveds are
//! pulled in dependency order, so a recomputation never mixes an old and a new
//! value of the same antecedent.

use std::rc::Rc;

use spark_signals::derived;

use crate::state::FormInputs;
use crate::types::FieldId;
use crate::validation::{
    check_checksum, classify, is_valid_cvc, is_valid_expiration_date, CardType, ErrorSummary,
};

// =============================================================================
// Types
// =============================================================================

/// Reactive getter. Reading it inside a derived or effect tracks the
/// underlying signal.
pub type Getter<T> = Rc<dyn Fn() -> T>;

/// Wrap a closure in a memoized derived and expose it as a getter.
pub(crate) fn memo<T>(compute: impl Fn() -> T + 'static) -> Getter<T>
where
    T: Clone + PartialEq + 'static,
{
    let node = derived(compute);
    Rc::new(move || node.get())
}

/// The derived validation signals of one form.
///
/// Cloning shares the same graph nodes.
#[derive(Clone)]
pub struct ValiditySignals {
    pub card_type: Getter<CardType>,
    pub is_known_card_type: Getter<bool>,
    pub is_valid_checksum: Getter<bool>,
    pub is_valid_number: Getter<bool>,
    pub is_valid_cvc: Getter<bool>,
    pub is_valid_expiration_date: Getter<bool>,
    pub is_submit_enabled: Getter<bool>,
    pub error_summary: Getter<ErrorSummary>,
}

// =============================================================================
// Factory
// =============================================================================

/// Create the validation graph over the raw inputs.
pub fn create_validity_signals(inputs: &FormInputs) -> ValiditySignals {
    let number = inputs.text_signal(FieldId::CardNumber);
    let cvc = inputs.text_signal(FieldId::Cvc);
    let expiration = inputs.text_signal(FieldId::ExpirationDate);

    let card_type = {
        let number = number.clone();
        memo(move || classify(&number.get()))
    };

    let is_known_card_type = {
        let card_type = card_type.clone();
        memo(move || card_type().is_known())
    };

    let is_valid_checksum = memo(move || check_checksum(&number.get()));

    let is_valid_number = {
        let known = is_known_card_type.clone();
        let checksum = is_valid_checksum.clone();
        memo(move || known() && checksum())
    };

    let is_valid_cvc = {
        let card_type = card_type.clone();
        memo(move || is_valid_cvc(card_type(), &cvc.get()))
    };

    let is_valid_expiration_date = memo(move || is_valid_expiration_date(&expiration.get()));

    let is_submit_enabled = {
        let number_ok = is_valid_number.clone();
        let cvc_ok = is_valid_cvc.clone();
        let expiration_ok = is_valid_expiration_date.clone();
        memo(move || {
            // Read all three so every antecedent stays tracked
            let (n, c, e) = (number_ok(), cvc_ok(), expiration_ok());
            n && c && e
        })
    };

    let error_summary = {
        let known = is_known_card_type.clone();
        let checksum = is_valid_checksum.clone();
        let cvc_ok = is_valid_cvc.clone();
        let expiration_ok = is_valid_expiration_date.clone();
        memo(move || ErrorSummary::from_checks(known(), checksum(), cvc_ok(), expiration_ok()))
    };

    ValiditySignals {
        card_type,
        is_known_card_type,
        is_valid_checksum,
        is_valid_number,
        is_valid_cvc,
        is_valid_expiration_date,
        is_submit_enabled,
        error_summary,
    }
}

impl ValiditySignals {
    /// Validity input of a field's show-error rule.
    pub fn field_validity(&self, field: FieldId) -> Getter<bool> {
        match field {
            FieldId::CardNumber => self.is_valid_number.clone(),
            FieldId::Cvc => self.is_valid_cvc.clone(),
            FieldId::ExpirationDate => self.is_valid_expiration_date.clone(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
