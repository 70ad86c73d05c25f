//! Reactive Pipeline
//!
//! Connects the raw field signals to the presentation sink.
//!
//! # Pipeline Architecture
//!
//! ```text
//! FormInputs → validityDerived → fieldErrorDerived → mount effects → PresentationSink
//! ```
//!
//! ## Data Flow
//!
//! 1. **validity** - Pure validators over the latest field text (combine-latest)
//! 2. **field_errors** - Touched-error rule per field over focus, touched and validity
//! 3. **mount** - One effect per display slot, all owned by a single scope
//!
//! ## Key Design Principles
//!
//! - **Pure Deriveds**: every validity and show-error value is a memoized derived
//! - **Side Effects in Effects**: only the mount effects touch the sink
//! - **One-way flow**: nothing downstream writes back into an upstream signal

pub mod field_errors;
pub mod mount;
pub mod validity;

pub use field_errors::{create_field_error_signals, FieldErrorSignals};
pub use mount::{mount, FormHandle};
pub use validity::{create_validity_signals, Getter, ValiditySignals};
