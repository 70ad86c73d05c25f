//! Mount API - Connect the derived graph to a presentation sink.
//!
//! Mounting creates one effect per display slot inside a single effect scope:
//!
//! ```text
//! card_type          ──► effect ──► sink.set_card_type_label
//! is_submit_enabled  ──► effect ──► sink.set_submit_enabled
//! error_summary      ──► effect ──► sink.set_error_text
//! show_as_error[f]   ──► effect ──► sink.set_field_error(f, ..)   (x3)
//! ```
//!
//! Every effect runs once immediately, so the sink receives a full initial
//! state. Unmounting stops the scope, which releases all six effects at
//! once; no effect can outlive the others and write into a torn-down view.
//!
//! # Example
//!
//! ```ignore
//! let handle = form.mount(sink);
//! // ... events flow ...
//! handle.unmount();
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::{effect, effect_scope, flush_sync, on_scope_dispose};

use crate::sink::PresentationSink;
use crate::theme::FormTheme;
use crate::types::FieldId;

use super::field_errors::FieldErrorSignals;
use super::validity::ValiditySignals;

// =============================================================================
// Form Handle
// =============================================================================

/// Handle returned by [`mount`]. Dropping it unmounts.
pub struct FormHandle {
    stop_scope: Option<Box<dyn FnOnce()>>,
}

impl FormHandle {
    /// Release every sink subscription.
    pub fn unmount(mut self) {
        self.stop();
    }

    /// Check if still mounted.
    pub fn is_mounted(&self) -> bool {
        self.stop_scope.is_some()
    }

    fn stop(&mut self) {
        if let Some(stop) = self.stop_scope.take() {
            stop();
            tracing::debug!("card form unmounted");
        }
    }
}

impl Drop for FormHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for FormHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormHandle")
            .field("mounted", &self.is_mounted())
            .finish()
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Sink shared by the mount effects. Emptied when the scope is disposed.
type SinkSlot<S> = Rc<RefCell<Option<S>>>;

fn emit<S: PresentationSink>(slot: &SinkSlot<S>, write: impl FnOnce(&mut S)) {
    if let Some(sink) = slot.borrow_mut().as_mut() {
        write(sink);
    }
}

/// Mount the graph onto a sink.
///
/// The sink is dropped when the scope is disposed, so a [`ChannelSink`]
/// receiver observes disconnection after unmount.
///
/// [`ChannelSink`]: crate::sink::ChannelSink
pub fn mount<S>(
    validity: &ValiditySignals,
    field_errors: &FieldErrorSignals,
    theme: FormTheme,
    sink: S,
) -> FormHandle
where
    S: PresentationSink + 'static,
{
    let slot: SinkSlot<S> = Rc::new(RefCell::new(Some(sink)));
    let scope = effect_scope(false);

    let validity = validity.clone();
    let field_errors = field_errors.clone();

    scope.run(move || {
        let card_type = validity.card_type.clone();
        let label_sink = slot.clone();
        let _label = effect(move || {
            let label = card_type().name();
            tracing::trace!(label, "emit card type label");
            emit(&label_sink, |sink| sink.set_card_type_label(label));
        });

        let submit_enabled = validity.is_submit_enabled.clone();
        let submit_sink = slot.clone();
        let _submit = effect(move || {
            let enabled = submit_enabled();
            tracing::trace!(enabled, "emit submit enabled");
            emit(&submit_sink, |sink| sink.set_submit_enabled(enabled));
        });

        let error_summary = validity.error_summary.clone();
        let summary_sink = slot.clone();
        let _summary = effect(move || {
            let summary = error_summary();
            tracing::trace!(failing = summary.failing().len(), "emit error summary");
            emit(&summary_sink, |sink| sink.set_error_text(&summary.text()));
        });

        for field in FieldId::ALL {
            let show_as_error = field_errors.show_as_error(field);
            let field_sink = slot.clone();
            let theme = theme.clone();
            // Last value sent; upstream reruns with an equal flag are not re-sent
            let last_sent = Cell::new(None::<bool>);
            let _field = effect(move || {
                let show = show_as_error();
                if last_sent.replace(Some(show)) == Some(show) {
                    return;
                }
                tracing::trace!(field = %field, show, "emit field error");
                emit(&field_sink, |sink| {
                    sink.set_field_error(field, show, theme.field_color(show));
                });
            });
        }

        on_scope_dispose(move || {
            *slot.borrow_mut() = None;
        });
    });

    flush_sync();
    tracing::debug!("card form mounted");

    FormHandle {
        stop_scope: Some(Box::new(move || {
            scope.stop();
        })),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{create_field_error_signals, create_validity_signals};
    use crate::sink::{ChannelSink, DisplayState, DisplayUpdate};
    use crate::state::FormInputs;
    use crate::types::Rgba;
    use std::sync::mpsc::TryRecvError;

    fn setup() -> (FormInputs, ValiditySignals, FieldErrorSignals) {
        let inputs = FormInputs::new();
        let validity = create_validity_signals(&inputs);
        let errors = create_field_error_signals(&inputs, &validity);
        (inputs, validity, errors)
    }

    #[test]
    fn test_mount_emits_initial_state() {
        let (_inputs, validity, errors) = setup();
        let (sink, rx) = ChannelSink::new();

        let _handle = mount(&validity, &errors, FormTheme::default(), sink);

        let mut display = DisplayState::default();
        display.drain(&rx);
        assert_eq!(display.card_type_label, "UNKNOWN");
        assert!(!display.submit_enabled);
        assert_eq!(
            display.error_text,
            "Unknown card type\nInvalid checksum\nInvalid CVC code\nInvalid expiration date"
        );
        for field in FieldId::ALL {
            assert!(!display.show_as_error(field));
            assert!(display.field_color(field).is_terminal_default());
        }
    }

    #[test]
    fn test_mount_follows_input() {
        let (inputs, validity, errors) = setup();
        let (sink, rx) = ChannelSink::new();
        let _handle = mount(&validity, &errors, FormTheme::default(), sink);

        inputs.on_field_text_changed(FieldId::CardNumber, "378282246310005");
        inputs.on_field_text_changed(FieldId::Cvc, "1234");
        inputs.on_field_text_changed(FieldId::ExpirationDate, "11/29");

        let mut display = DisplayState::default();
        display.drain(&rx);
        assert_eq!(display.card_type_label, "AMEX");
        assert!(display.submit_enabled);
        assert_eq!(display.error_text, "");
    }

    #[test]
    fn test_field_error_uses_theme_color() {
        let (inputs, validity, errors) = setup();
        let (sink, rx) = ChannelSink::new();
        let _handle = mount(&validity, &errors, crate::theme::dracula(), sink);

        inputs.on_field_focus_changed(FieldId::Cvc, true);
        inputs.on_field_focus_changed(FieldId::Cvc, false);

        let mut display = DisplayState::default();
        display.drain(&rx);
        assert!(display.show_as_error(FieldId::Cvc));
        assert_eq!(display.field_color(FieldId::Cvc), Rgba::from_rgb_int(0xff5555));
        assert_eq!(
            display.field_color(FieldId::CardNumber),
            Rgba::from_rgb_int(0xf8f8f2)
        );
    }

    #[test]
    fn test_unmount_releases_all_subscriptions() {
        let (inputs, validity, errors) = setup();
        let (sink, rx) = ChannelSink::new();
        let handle = mount(&validity, &errors, FormTheme::default(), sink);
        assert!(handle.is_mounted());
        let _ = rx.try_iter().count();

        handle.unmount();

        inputs.on_field_text_changed(FieldId::CardNumber, "4532015112830366");
        inputs.on_field_focus_changed(FieldId::CardNumber, true);
        inputs.on_field_focus_changed(FieldId::CardNumber, false);

        let late: Vec<DisplayUpdate> = rx.try_iter().collect();
        assert!(late.is_empty(), "no update after unmount, got {late:?}");
    }

    #[test]
    fn test_drop_unmounts() {
        let (inputs, validity, errors) = setup();
        let (sink, rx) = ChannelSink::new();
        {
            let _handle = mount(&validity, &errors, FormTheme::default(), sink);
        }
        let _ = rx.try_iter().count();

        inputs.on_field_text_changed(FieldId::Cvc, "999");
        assert_eq!(rx.try_iter().count(), 0);
    }

    #[test]
    fn test_unmount_drops_sink() {
        let (_inputs, validity, errors) = setup();
        let (sink, rx) = ChannelSink::new();
        let handle = mount(&validity, &errors, FormTheme::default(), sink);
        let _ = rx.try_iter().count();

        handle.unmount();
        assert_eq!(rx.try_recv(), Err(TryRecvError::Disconnected));
    }

    #[test]
    fn test_unchanged_field_flag_is_not_resent() {
        let (inputs, validity, errors) = setup();
        let (sink, rx) = ChannelSink::new();
        let _handle = mount(&validity, &errors, FormTheme::default(), sink);
        let _ = rx.try_iter().count();

        // Focusing an untouched field keeps its flag at false
        inputs.on_field_focus_changed(FieldId::CardNumber, true);
        let field_updates = rx
            .try_iter()
            .filter(|u| matches!(u, DisplayUpdate::FieldError { .. }))
            .count();
        assert_eq!(field_updates, 0);

        // Card type change re-derives CVC validity; the CVC flag stays false
        inputs.on_field_text_changed(FieldId::Cvc, "12");
        inputs.on_field_text_changed(FieldId::CardNumber, "378282246310005");
        let cvc_updates = rx
            .try_iter()
            .filter(|u| matches!(u, DisplayUpdate::FieldError { field: FieldId::Cvc, .. }))
            .count();
        assert_eq!(cvc_updates, 0);
    }

    #[test]
    fn test_changed_field_flag_is_sent_once() {
        let (inputs, validity, errors) = setup();
        let (sink, rx) = ChannelSink::new();
        let _handle = mount(&validity, &errors, FormTheme::default(), sink);
        let _ = rx.try_iter().count();

        inputs.on_field_focus_changed(FieldId::Cvc, true);
        inputs.on_field_focus_changed(FieldId::Cvc, false);

        let updates: Vec<DisplayUpdate> = rx
            .try_iter()
            .filter(|u| matches!(u, DisplayUpdate::FieldError { .. }))
            .collect();
        assert_eq!(
            updates,
            vec![DisplayUpdate::FieldError {
                field: FieldId::Cvc,
                show_as_error: true,
                color: FormTheme::default().error,
            }]
        );
    }
}
