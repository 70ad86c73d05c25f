//! Form Inputs - Raw text and focus sources for the three fields.
//!
//! These are the only writable nodes of the graph. The host calls
//! [`FormInputs::on_field_text_changed`] and
//! [`FormInputs::on_field_focus_changed`]; everything downstream is derived.
//! Both entry points flush pending effects before returning, so sinks have
//! seen the new state by the time the call completes.

use spark_signals::{flush_sync, signal, Signal};

use super::focus::FieldFocus;
use crate::types::FieldId;

// =============================================================================
// FORM INPUTS
// =============================================================================

/// Raw per-field sources: current text and focus.
#[derive(Clone)]
pub struct FormInputs {
    texts: [Signal<String>; 3],
    focus: [FieldFocus; 3],
}

impl FormInputs {
    pub fn new() -> Self {
        Self {
            texts: [signal(String::new()), signal(String::new()), signal(String::new())],
            focus: [FieldFocus::new(), FieldFocus::new(), FieldFocus::new()],
        }
    }

    /// Text of a field changed.
    pub fn on_field_text_changed(&self, field: FieldId, text: impl Into<String>) {
        let text = text.into();
        let sig = &self.texts[field.index()];
        if sig.get() == text {
            return;
        }

        tracing::trace!(field = %field, len = text.len(), "field text changed");
        sig.set(text);
        flush_sync();
    }

    /// Focus of a field changed.
    pub fn on_field_focus_changed(&self, field: FieldId, has_focus: bool) {
        tracing::trace!(field = %field, has_focus, "field focus changed");
        self.focus[field.index()].set_focus(has_focus);
        flush_sync();
    }

    /// Shared handle to a field's text signal.
    pub fn text_signal(&self, field: FieldId) -> Signal<String> {
        self.texts[field.index()].clone()
    }

    /// Current text of a field (reactive read).
    pub fn text(&self, field: FieldId) -> String {
        self.texts[field.index()].get()
    }

    /// Focus state of a field.
    pub fn focus(&self, field: FieldId) -> &FieldFocus {
        &self.focus[field.index()]
    }

    /// Field currently holding focus, if any.
    pub fn focused_field(&self) -> Option<FieldId> {
        FieldId::ALL.into_iter().find(|f| self.focus(*f).has_focus())
    }
}

impl Default for FormInputs {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
