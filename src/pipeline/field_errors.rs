//! Field Error Derived - Per-field "render as erroneous" signals.
//!
//! Combines each field's touched state, focus and validity through
//! [`show_error`]. Recomputed whenever any of the three changes.

use crate::state::{show_error, FormInputs};
use crate::types::FieldId;

use super::validity::{memo, Getter, ValiditySignals};

/// Show-error getters, one per field in [`FieldId::ALL`] order.
#[derive(Clone)]
pub struct FieldErrorSignals {
    show: [Getter<bool>; 3],
}

impl FieldErrorSignals {
    /// Show-error getter of one field.
    pub fn show_as_error(&self, field: FieldId) -> Getter<bool> {
        self.show[field.index()].clone()
    }
}

fn create_field_error(inputs: &FormInputs, validity: &ValiditySignals, field: FieldId) -> Getter<bool> {
    let has_focus = inputs.focus(field).focus_signal();
    let touched = inputs.focus(field).touched_signal();
    let is_valid = validity.field_validity(field);

    memo(move || {
        let (touched, has_focus, is_valid) = (touched.get(), has_focus.get(), is_valid());
        show_error(touched, has_focus, is_valid)
    })
}

/// Create the show-error derived for every field.
pub fn create_field_error_signals(
    inputs: &FormInputs,
    validity: &ValiditySignals,
) -> FieldErrorSignals {
    FieldErrorSignals {
        show: FieldId::ALL.map(|field| create_field_error(inputs, validity, field)),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::create_validity_signals;

    fn setup() -> (FormInputs, FieldErrorSignals) {
        let inputs = FormInputs::new();
        let validity = create_validity_signals(&inputs);
        let errors = create_field_error_signals(&inputs, &validity);
        (inputs, errors)
    }

    #[test]
    fn test_untouched_invalid_field_is_not_flagged() {
        let (inputs, errors) = setup();
        inputs.on_field_text_changed(FieldId::Cvc, "1");

        for field in FieldId::ALL {
            assert!(!(errors.show_as_error(field))());
        }
    }

    #[test]
    fn test_focus_then_blur_flags_invalid_field() {
        let (inputs, errors) = setup();
        let cvc_error = errors.show_as_error(FieldId::Cvc);

        assert!(!cvc_error(), "never focused");

        inputs.on_field_focus_changed(FieldId::Cvc, true);
        assert!(!cvc_error(), "focused");

        inputs.on_field_focus_changed(FieldId::Cvc, false);
        assert!(cvc_error(), "left invalid");

        inputs.on_field_focus_changed(FieldId::Cvc, true);
        assert!(!cvc_error(), "editing again");

        inputs.on_field_focus_changed(FieldId::Cvc, false);
        assert!(cvc_error(), "left invalid again");
    }

    #[test]
    fn test_field_valid_before_blur_is_never_flagged() {
        let (inputs, errors) = setup();
        let expiration_error = errors.show_as_error(FieldId::ExpirationDate);

        inputs.on_field_focus_changed(FieldId::ExpirationDate, true);
        inputs.on_field_text_changed(FieldId::ExpirationDate, "1");
        inputs.on_field_text_changed(FieldId::ExpirationDate, "12/2");
        inputs.on_field_text_changed(FieldId::ExpirationDate, "12/25");
        assert!(!expiration_error());

        inputs.on_field_focus_changed(FieldId::ExpirationDate, false);
        assert!(!expiration_error());
    }

    #[test]
    fn test_flag_clears_when_field_becomes_valid() {
        let (inputs, errors) = setup();
        let number_error = errors.show_as_error(FieldId::CardNumber);

        inputs.on_field_focus_changed(FieldId::CardNumber, true);
        inputs.on_field_text_changed(FieldId::CardNumber, "4532");
        inputs.on_field_focus_changed(FieldId::CardNumber, false);
        assert!(number_error());

        // Fixed while unfocused (e.g. pasted by the host)
        inputs.on_field_text_changed(FieldId::CardNumber, "4532015112830366");
        assert!(!number_error());
    }

    #[test]
    fn test_fields_are_independent() {
        let (inputs, errors) = setup();
        inputs.on_field_focus_changed(FieldId::CardNumber, true);
        inputs.on_field_focus_changed(FieldId::CardNumber, false);

        assert!((errors.show_as_error(FieldId::CardNumber))());
        assert!(!(errors.show_as_error(FieldId::Cvc))());
        assert!(!(errors.show_as_error(FieldId::ExpirationDate))());
    }
}
