//! Terminal Host - crossterm keys to form events.
//!
//! The form only understands "text of field X is now ..." and "field X has
//! focus: bool". [`FormHost`] is the keystroke side of that contract for a
//! terminal: it keeps the text buffers and the focused field, and turns
//! crossterm key events into those two notifications.
//!
//! | Key               | Effect                                   |
//! |-------------------|------------------------------------------|
//! | Tab / Shift+Tab   | Focus next / previous field (wraps)      |
//! | printable char    | Append to the focused field              |
//! | Backspace         | Delete last char of the focused field    |
//! | Enter             | [`HostAction::Submit`]                   |
//! | Esc / Ctrl+C      | [`HostAction::Quit`]                     |
//!
//! # Example
//!
//! ```ignore
//! let mut host = FormHost::new();
//! loop {
//!     if let Event::Key(key) = crossterm::event::read()? {
//!         match host.handle_key(&form, key) {
//!             HostAction::Quit => break,
//!             HostAction::Submit => { let _ = form.submit(); }
//!             HostAction::Continue => {}
//!         }
//!     }
//! }
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Color;

use crate::form::CardForm;
use crate::types::{FieldId, Rgba};

// =============================================================================
// HOST ACTION
// =============================================================================

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    Continue,
    Submit,
    Quit,
}

// =============================================================================
// FORM HOST
// =============================================================================

/// Field buffers and focus for a terminal-hosted form.
#[derive(Debug, Default)]
pub struct FormHost {
    texts: [String; 3],
    focused: Option<FieldId>,
}

impl FormHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current buffer of a field.
    pub fn text(&self, field: FieldId) -> &str {
        &self.texts[field.index()]
    }

    pub fn focused(&self) -> Option<FieldId> {
        self.focused
    }

    /// Move focus to `target`, notifying blur before focus.
    pub fn focus(&mut self, form: &CardForm, target: Option<FieldId>) {
        if self.focused == target {
            return;
        }
        if let Some(old) = self.focused {
            form.on_field_focus_changed(old, false);
        }
        self.focused = target;
        if let Some(new) = target {
            form.on_field_focus_changed(new, true);
        }
    }

    /// Focus the next field in tab order (wraps).
    pub fn focus_next(&mut self, form: &CardForm) {
        let next = self.step(1);
        self.focus(form, Some(next));
    }

    /// Focus the previous field in tab order (wraps).
    pub fn focus_previous(&mut self, form: &CardForm) {
        let prev = self.step(-1);
        self.focus(form, Some(prev));
    }

    fn step(&self, direction: i32) -> FieldId {
        let len = FieldId::ALL.len() as i32;
        match self.focused {
            None if direction > 0 => FieldId::ALL[0],
            None => FieldId::ALL[FieldId::ALL.len() - 1],
            Some(field) => {
                let next = ((field.index() as i32 + direction) % len + len) % len;
                FieldId::ALL[next as usize]
            }
        }
    }

    /// Blur the focused field, if any.
    pub fn clear_focus(&mut self, form: &CardForm) {
        self.focus(form, None);
    }

    fn edit(&mut self, form: &CardForm, apply: impl FnOnce(&mut String) -> bool) {
        let Some(field) = self.focused else {
            return;
        };
        let buffer = &mut self.texts[field.index()];
        if apply(buffer) {
            form.on_field_text_changed(field, buffer.clone());
        }
    }

    /// Handle one crossterm key event.
    pub fn handle_key(&mut self, form: &CardForm, event: KeyEvent) -> HostAction {
        if event.kind == KeyEventKind::Release {
            return HostAction::Continue;
        }

        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        match event.code {
            KeyCode::Char('c') if ctrl => HostAction::Quit,
            KeyCode::Esc => HostAction::Quit,
            KeyCode::Enter => HostAction::Submit,
            KeyCode::Tab => {
                self.focus_next(form);
                HostAction::Continue
            }
            KeyCode::BackTab => {
                self.focus_previous(form);
                HostAction::Continue
            }
            KeyCode::Backspace => {
                self.edit(form, |buf| buf.pop().is_some());
                HostAction::Continue
            }
            KeyCode::Char(c) if !ctrl && !c.is_control() => {
                self.edit(form, |buf| {
                    buf.push(c);
                    true
                });
                HostAction::Continue
            }
            _ => HostAction::Continue,
        }
    }
}

// =============================================================================
// COLOR CONVERSION
// =============================================================================

/// Convert a theme color to a crossterm color.
pub fn to_crossterm_color(color: Rgba) -> Color {
    if color.is_terminal_default() {
        Color::Reset
    } else if color.is_ansi() {
        Color::AnsiValue(color.ansi_index())
    } else {
        Color::Rgb {
            r: color.r.clamp(0, 255) as u8,
            g: color.g.clamp(0, 255) as u8,
            b: color.b.clamp(0, 255) as u8,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
