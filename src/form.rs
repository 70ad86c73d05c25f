//! Card Form - The assembled pipeline behind one form view.
//!
//! [`CardForm`] owns the raw inputs, the validity graph and the per-field
//! error signals. Hosts feed it events, mount it onto a sink, read a
//! [`FormSnapshot`] and call [`CardForm::submit`].
//!
//! # Example
//!
//! ```ignore
//! use spark_card_form::{CardForm, FieldId, ChannelSink};
//!
//! let form = CardForm::new(Default::default());
//! let (sink, rx) = ChannelSink::new();
//! let handle = form.mount(sink);
//!
//! form.on_field_focus_changed(FieldId::CardNumber, true);
//! form.on_field_text_changed(FieldId::CardNumber, "4532015112830366");
//! assert_eq!(form.snapshot().card_type_label, "VISA");
//! ```

use std::fmt;

use crate::error::FormError;
use crate::pipeline::{
    self, create_field_error_signals, create_validity_signals, FieldErrorSignals, FormHandle,
    ValiditySignals,
};
use crate::sink::PresentationSink;
use crate::state::FormInputs;
use crate::theme::FormTheme;
use crate::types::FieldId;
use crate::validation::{CardType, ErrorSummary};

// =============================================================================
// Snapshot
// =============================================================================

/// Current value of every output, read at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSnapshot {
    pub card_type: CardType,
    pub card_type_label: String,
    pub submit_enabled: bool,
    pub error_summary: ErrorSummary,
    pub show_as_error: [bool; 3],
}

impl FormSnapshot {
    pub fn error_summary_text(&self) -> String {
        self.error_summary.text()
    }

    pub fn field_shows_error(&self, field: FieldId) -> bool {
        self.show_as_error[field.index()]
    }
}

// =============================================================================
// Submission
// =============================================================================

/// Values of a form that passed validation.
#[derive(Clone, PartialEq, Eq)]
pub struct Submission {
    pub card_type: CardType,
    pub number: String,
    pub cvc: String,
    pub expiration_date: String,
}

impl Submission {
    /// Card number with all but the last four digits masked.
    pub fn masked_number(&self) -> String {
        let visible = self.number.len().saturating_sub(4);
        self.number
            .char_indices()
            .map(|(i, c)| if i < visible { '*' } else { c })
            .collect()
    }
}

impl fmt::Debug for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submission")
            .field("card_type", &self.card_type)
            .field("number", &self.masked_number())
            .field("cvc", &"***")
            .field("expiration_date", &self.expiration_date)
            .finish()
    }
}

// =============================================================================
// CardForm
// =============================================================================

/// One card form: inputs, derived graph and theme.
///
/// Cloning shares the same signals.
#[derive(Clone)]
pub struct CardForm {
    inputs: FormInputs,
    validity: ValiditySignals,
    field_errors: FieldErrorSignals,
    theme: FormTheme,
}

impl CardForm {
    /// Build the graph. Nothing is emitted until [`CardForm::mount`].
    pub fn new(theme: FormTheme) -> Self {
        let inputs = FormInputs::new();
        let validity = create_validity_signals(&inputs);
        let field_errors = create_field_error_signals(&inputs, &validity);
        Self {
            inputs,
            validity,
            field_errors,
            theme,
        }
    }

    /// Host entry point: text of a field changed.
    pub fn on_field_text_changed(&self, field: FieldId, text: impl Into<String>) {
        self.inputs.on_field_text_changed(field, text);
    }

    /// Host entry point: focus of a field changed.
    pub fn on_field_focus_changed(&self, field: FieldId, has_focus: bool) {
        self.inputs.on_field_focus_changed(field, has_focus);
    }

    /// Connect the outputs to a sink until the handle is dropped.
    pub fn mount<S>(&self, sink: S) -> FormHandle
    where
        S: PresentationSink + 'static,
    {
        pipeline::mount(&self.validity, &self.field_errors, self.theme.clone(), sink)
    }

    /// Read every output now.
    pub fn snapshot(&self) -> FormSnapshot {
        let card_type = (self.validity.card_type)();
        FormSnapshot {
            card_type,
            card_type_label: card_type.name().to_string(),
            submit_enabled: (self.validity.is_submit_enabled)(),
            error_summary: (self.validity.error_summary)(),
            show_as_error: FieldId::ALL.map(|f| (self.field_errors.show_as_error(f))()),
        }
    }

    /// Submit the form.
    ///
    /// Only allowed while submit is enabled. On success focus is cleared from
    /// every field and the validated values are returned. Nothing is sent
    /// anywhere.
    pub fn submit(&self) -> Result<Submission, FormError> {
        if !(self.validity.is_submit_enabled)() {
            let summary = (self.validity.error_summary)().text();
            tracing::debug!("submit rejected");
            return Err(FormError::SubmitDisabled { summary });
        }

        let submission = Submission {
            card_type: (self.validity.card_type)(),
            number: self.inputs.text(FieldId::CardNumber),
            cvc: self.inputs.text(FieldId::Cvc),
            expiration_date: self.inputs.text(FieldId::ExpirationDate),
        };
        tracing::info!(
            card_type = %submission.card_type,
            number = %submission.masked_number(),
            "submit"
        );

        if let Some(field) = self.inputs.focused_field() {
            self.inputs.on_field_focus_changed(field, false);
        }

        Ok(submission)
    }

    pub fn inputs(&self) -> &FormInputs {
        &self.inputs
    }

    pub fn validity(&self) -> &ValiditySignals {
        &self.validity
    }

    pub fn field_errors(&self) -> &FieldErrorSignals {
        &self.field_errors
    }

    pub fn theme(&self) -> &FormTheme {
        &self.theme
    }
}

impl Default for CardForm {
    fn default() -> Self {
        Self::new(FormTheme::default())
    }
}

// =============================================================================
// Tests
// =============================================================================
