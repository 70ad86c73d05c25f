//! State Module - The writable sources and the only stateful policy
//!
//! - **Fields** - Raw per-field text and focus signals (event entry points)
//! - **Focus** - Per-field focus signal plus touched history
//! - **Touched** - Touched state machine and the show-error rule

mod fields;
mod focus;
mod touched;

pub use fields::*;
pub use focus::*;
pub use touched::*;
