//! Presentation Sink - Where final display values go.
//!
//! The pipeline never renders. It pushes values into a [`PresentationSink`]
//! owned by the host. Two adapters cover the common setups:
//!
//! - [`ChannelSink`] - FIFO hand-off to the thread that owns the widgets
//! - [`DisplayState`] - the rendering-side model that applies updates in order
//!
//! # Example
//!
//! ```ignore
//! use spark_card_form::sink::{ChannelSink, DisplayState};
//!
//! let (sink, rx) = ChannelSink::new();
//! let handle = form.mount(sink);
//!
//! // On the rendering thread
//! let mut display = DisplayState::default();
//! for update in rx.try_iter() {
//!     display.apply(update);
//! }
//! ```

use std::sync::mpsc::{self, Receiver, Sender};

use crate::types::{FieldId, Rgba};

// =============================================================================
// SINK TRAIT
// =============================================================================

/// Receiver of display values.
pub trait PresentationSink {
    fn set_card_type_label(&mut self, label: &str);
    fn set_submit_enabled(&mut self, enabled: bool);
    fn set_error_text(&mut self, text: &str);
    /// `color` is the theme color matching `show_as_error`.
    fn set_field_error(&mut self, field: FieldId, show_as_error: bool, color: Rgba);
}

// =============================================================================
// DISPLAY UPDATE
// =============================================================================

/// One display value, as a message.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayUpdate {
    CardTypeLabel(String),
    SubmitEnabled(bool),
    ErrorText(String),
    FieldError {
        field: FieldId,
        show_as_error: bool,
        color: Rgba,
    },
}

// =============================================================================
// CHANNEL SINK
// =============================================================================

/// Sends every display value over an mpsc channel, in emission order.
///
/// If the receiving side is gone the update is dropped; the view it would
/// have updated no longer exists.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: Sender<DisplayUpdate>,
}

impl ChannelSink {
    /// Create a sink and the receiver for the rendering thread.
    pub fn new() -> (Self, Receiver<DisplayUpdate>) {
        let (tx, rx) = mpsc::channel();
        (Self { tx }, rx)
    }

    fn send(&self, update: DisplayUpdate) {
        if self.tx.send(update).is_err() {
            tracing::debug!("display receiver dropped, discarding update");
        }
    }
}

impl PresentationSink for ChannelSink {
    fn set_card_type_label(&mut self, label: &str) {
        self.send(DisplayUpdate::CardTypeLabel(label.to_string()));
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.send(DisplayUpdate::SubmitEnabled(enabled));
    }

    fn set_error_text(&mut self, text: &str) {
        self.send(DisplayUpdate::ErrorText(text.to_string()));
    }

    fn set_field_error(&mut self, field: FieldId, show_as_error: bool, color: Rgba) {
        self.send(DisplayUpdate::FieldError {
            field,
            show_as_error,
            color,
        });
    }
}

// =============================================================================
// DISPLAY STATE
// =============================================================================

/// Last value received for every display slot.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayState {
    pub card_type_label: String,
    pub submit_enabled: bool,
    pub error_text: String,
    pub field_errors: [bool; 3],
    pub field_colors: [Rgba; 3],
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            card_type_label: String::new(),
            submit_enabled: false,
            error_text: String::new(),
            field_errors: [false; 3],
            field_colors: [Rgba::TERMINAL_DEFAULT; 3],
        }
    }
}

impl DisplayState {
    /// Apply one update.
    pub fn apply(&mut self, update: DisplayUpdate) {
        match update {
            DisplayUpdate::CardTypeLabel(label) => self.card_type_label = label,
            DisplayUpdate::SubmitEnabled(enabled) => self.submit_enabled = enabled,
            DisplayUpdate::ErrorText(text) => self.error_text = text,
            DisplayUpdate::FieldError {
                field,
                show_as_error,
                color,
            } => {
                self.field_errors[field.index()] = show_as_error;
                self.field_colors[field.index()] = color;
            }
        }
    }

    /// Apply everything currently queued on a receiver. Returns how many
    /// updates were applied.
    pub fn drain(&mut self, rx: &Receiver<DisplayUpdate>) -> usize {
        let mut applied = 0;
        for update in rx.try_iter() {
            self.apply(update);
            applied += 1;
        }
        applied
    }

    pub fn show_as_error(&self, field: FieldId) -> bool {
        self.field_errors[field.index()]
    }

    pub fn field_color(&self, field: FieldId) -> Rgba {
        self.field_colors[field.index()]
    }
}

impl PresentationSink for DisplayState {
    fn set_card_type_label(&mut self, label: &str) {
        self.apply(DisplayUpdate::CardTypeLabel(label.to_string()));
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.apply(DisplayUpdate::SubmitEnabled(enabled));
    }

    fn set_error_text(&mut self, text: &str) {
        self.apply(DisplayUpdate::ErrorText(text.to_string()));
    }

    fn set_field_error(&mut self, field: FieldId, show_as_error: bool, color: Rgba) {
        self.apply(DisplayUpdate::FieldError {
            field,
            show_as_error,
            color,
        });
    }
}

// =============================================================================
// TESTS
// =============================================================================
