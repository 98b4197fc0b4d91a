//! Ratify: a pluggable record validation engine
//!
//! Ratify lets you attach external validators to record types, run them
//! during a validity check, scope them to lifecycle phases, and gate them on
//! conditions. Every eligible validator runs on every pass and appends its
//! findings to one shared error collection.
//!
//! # Core Concepts
//!
//! - **ErrorBag**: Ordered multi-map of field keys to messages
//! - **Validator**: Polymorphic validation logic, built fresh on every pass
//! - **Registration**: A validator bound to a phase filter, `if`/`unless`
//!   guards, and options forwarded to its factory
//! - **ValidatorRegistry**: Explicit registry that runs registrations in order
//!
//! # Example
//!
//! ```rust
//! use ratify::core::{Phase, Record};
//! use ratify::registry::{RegistrationOptions, ValidatorRegistry};
//! use ratify::validator::{factory, ValidationContext, ValidationError, Validator, ValidatorOptions};
//!
//! struct Topic;
//!
//! impl Record for Topic {}
//!
//! struct ValidatorThatAddsErrors;
//!
//! impl Validator<Topic> for ValidatorThatAddsErrors {
//!     fn validate(&self, ctx: &mut ValidationContext<'_, Topic>) -> Result<(), ValidationError> {
//!         ctx.add_base_error("Validation error from validator");
//!         Ok(())
//!     }
//! }
//!
//! let mut registry = ValidatorRegistry::new();
//! registry.register_one(
//!     "ValidatorThatAddsErrors",
//!     factory(|_: &ValidatorOptions| Ok(ValidatorThatAddsErrors)),
//!     RegistrationOptions::<Topic>::new(),
//! );
//!
//! let errors = registry.validate(&Topic, Phase::Create).unwrap();
//! assert!(!errors.is_empty());
//! assert!(errors.includes("base", "Validation error from validator"));
//! ```

pub mod core;
pub mod registry;
pub mod validator;

// Re-export commonly used types
pub use core::{Condition, ErrorBag, Phase, Record};
pub use registry::{RegistrationOptions, ValidatorRegistry};
pub use validator::{ValidationContext, ValidationError, Validator, ValidatorOptions};
