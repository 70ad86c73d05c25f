//! Field Focus - Per-field focus signal and touched history.
//!
//! Each validatable field owns one `has_focus` signal and one `touched`
//! signal. The focus signal is a single shared source: every dependent (the
//! touched transition, the show-error derived, a renderer) reads the same
//! value, so they can never observe different focus histories. Cloning a
//! [`FieldFocus`] clones handles to the same signals.
//!
//! # Example
//!
//! ```ignore
//! use spark_card_form::state::{FieldFocus, TouchedState};
//!
//! let focus = FieldFocus::new();
//! focus.set_focus(true);
//! focus.set_focus(false);
//! assert_eq!(focus.touched(), TouchedState::FocusedAtLeastOnce);
//! ```

use spark_signals::{signal, Signal};

use super::touched::TouchedState;

/// Focus state of one field.
#[derive(Clone)]
pub struct FieldFocus {
    has_focus: Signal<bool>,
    touched: Signal<TouchedState>,
}

impl FieldFocus {
    pub fn new() -> Self {
        Self {
            has_focus: signal(false),
            touched: signal(TouchedState::NeverFocused),
        }
    }

    /// Record a focus change coming from the host.
    ///
    /// The focus value is written before the touched transition, so no
    /// dependent ever sees "touched and unfocused" on the way into focus.
    pub fn set_focus(&self, has_focus: bool) {
        if self.has_focus.get() != has_focus {
            self.has_focus.set(has_focus);
        }

        let current = self.touched.get();
        let next = current.observe_focus(has_focus);
        if next != current {
            self.touched.set(next);
        }
    }

    /// Current focus (reactive read).
    pub fn has_focus(&self) -> bool {
        self.has_focus.get()
    }

    /// Current touched state (reactive read).
    pub fn touched(&self) -> TouchedState {
        self.touched.get()
    }

    /// Shared handle to the focus signal.
    pub fn focus_signal(&self) -> Signal<bool> {
        self.has_focus.clone()
    }

    /// Shared handle to the touched signal.
    pub fn touched_signal(&self) -> Signal<TouchedState> {
        self.touched.clone()
    }
}

impl Default for FieldFocus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FieldFocus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldFocus")
            .field("has_focus", &self.has_focus.get())
            .field("touched", &self.touched.get())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
