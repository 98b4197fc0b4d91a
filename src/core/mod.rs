//! Core validation types.
//!
//! This module contains the pure building blocks the engine is composed of:
//! - `ErrorBag`, the ordered collection validators write into
//! - `Phase`, the lifecycle stage a pass runs in
//! - `Record`, implemented by host types
//! - `Condition`, the typed `if`/`unless` guard
//!
//! Nothing in this module performs I/O or holds global state.

mod condition;
mod error_bag;
mod phase;
mod record;

pub use condition::Condition;
pub use error_bag::{ErrorBag, FieldError, BASE};
pub use phase::Phase;
pub use record::Record;
