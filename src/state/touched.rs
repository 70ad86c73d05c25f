//! Touched-Error Policy - When a field is allowed to look erroneous.
//!
//! A field starts [`TouchedState::NeverFocused`] and moves to
//! [`TouchedState::FocusedAtLeastOnce`] the first time it is observed with
//! focus. There is no way back.
//!
//! The error display rule is a three-way AND:
//!
//! ```text
//! show_error = touched AND !has_focus AND !is_valid
//! ```
//!
//! An untouched field is never flagged, a field being edited is never flagged,
//! and a field left invalid after being visited stays flagged until it becomes
//! valid.

/// Focus history of one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchedState {
    #[default]
    NeverFocused,
    FocusedAtLeastOnce,
}

impl TouchedState {
    /// Next state after observing a focus value.
    ///
    /// `FocusedAtLeastOnce` is terminal.
    #[must_use]
    pub const fn observe_focus(self, has_focus: bool) -> Self {
        match self {
            Self::NeverFocused if has_focus => Self::FocusedAtLeastOnce,
            Self::NeverFocused => Self::NeverFocused,
            Self::FocusedAtLeastOnce => Self::FocusedAtLeastOnce,
        }
    }

    pub const fn is_touched(self) -> bool {
        matches!(self, Self::FocusedAtLeastOnce)
    }
}

/// Whether a field should render as erroneous right now.
pub const fn show_error(touched: TouchedState, has_focus: bool, is_valid: bool) -> bool {
    touched.is_touched() && !has_focus && !is_valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_untouched() {
        assert_eq!(TouchedState::default(), TouchedState::NeverFocused);
        assert!(!TouchedState::default().is_touched());
    }

    #[test]
    fn test_blur_without_focus_does_not_touch() {
        let state = TouchedState::NeverFocused.observe_focus(false);
        assert_eq!(state, TouchedState::NeverFocused);
    }

    #[test]
    fn test_focus_touches_permanently() {
        let state = TouchedState::NeverFocused.observe_focus(true);
        assert_eq!(state, TouchedState::FocusedAtLeastOnce);

        // Never reverts, whatever focus does next
        let state = state.observe_focus(false).observe_focus(true).observe_focus(false);
        assert_eq!(state, TouchedState::FocusedAtLeastOnce);
    }

    #[test]
    fn test_show_error_truth_table() {
        use TouchedState::*;

        for has_focus in [false, true] {
            for is_valid in [false, true] {
                assert!(!show_error(NeverFocused, has_focus, is_valid));
            }
        }
        assert!(!show_error(FocusedAtLeastOnce, true, false));
        assert!(!show_error(FocusedAtLeastOnce, true, true));
        assert!(!show_error(FocusedAtLeastOnce, false, true));
        assert!(show_error(FocusedAtLeastOnce, false, false));
    }

    #[test]
    fn test_focus_then_blur_on_invalid_field() {
        let mut touched = TouchedState::NeverFocused;
        let is_valid = false;

        // Never focused
        assert!(!show_error(touched, false, is_valid));

        // focus(true)
        touched = touched.observe_focus(true);
        assert!(!show_error(touched, true, is_valid));

        // focus(false)
        touched = touched.observe_focus(false);
        assert!(show_error(touched, false, is_valid));

        // Re-enter and leave again: still flagged
        touched = touched.observe_focus(true);
        assert!(!show_error(touched, true, is_valid));
        touched = touched.observe_focus(false);
        assert!(show_error(touched, false, is_valid));
    }
}
