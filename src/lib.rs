//! # spark-card-form
//!
//! Live credit card form validation for Rust.
//!
//! Built on [spark-signals](https://crates.io/crates/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! Three raw field signals (card number, CVC, expiration date) and three focus
//! signals feed a graph of memoized deriveds. Effects push the final values
//! into a host-provided [`PresentationSink`]:
//!
//! ```text
//! FormInputs → validity deriveds → show-error deriveds → mount effects → sink
//! ```
//!
//! Data flows one way. The only state with memory is each field's
//! [`TouchedState`], which moves from "never focused" to "focused at least
//! once" and never back.
//!
//! ## Modules
//!
//! - [`validation`] - Pure validators (card type, Luhn, CVC, expiration) and the error summary
//! - [`state`] - Raw field signals, focus and the touched-error policy
//! - [`pipeline`] - Derived graph and mount/unmount
//! - [`sink`] - Presentation sink trait and channel/display adapters
//! - [`host`] - crossterm key handling for terminal hosts
//! - [`theme`] / [`config`] - Error colors and their configuration

pub mod config;
pub mod error;
pub mod form;
pub mod host;
pub mod pipeline;
pub mod sink;
pub mod state;
pub mod theme;
pub mod types;
pub mod validation;

// Re-export commonly used items
pub use types::*;

pub use config::FormConfig;
pub use error::FormError;
pub use form::{CardForm, FormSnapshot, Submission};
pub use host::{FormHost, HostAction};
pub use pipeline::{FormHandle, Getter};
pub use sink::{ChannelSink, DisplayState, DisplayUpdate, PresentationSink};
pub use state::{show_error, FieldFocus, FormInputs, TouchedState};
pub use theme::{get_preset, preset_names, FormTheme};

pub use validation::{
    check_checksum, classify, is_valid_cvc, is_valid_expiration_date, CardType, ErrorSummary,
    ValidityCheck,
};
