//! The validator capability and its supporting types.
//!
//! A validator is a unit of validation logic. It inspects the record through
//! a [`ValidationContext`] and may append messages to the shared
//! [`ErrorBag`](crate::core::ErrorBag). Validators are built fresh on every
//! pass by a [`ValidatorFactory`] that receives the registration's
//! forwarded [`ValidatorOptions`].
//!
//! # Example
//!
//! ```rust
//! use ratify::validator::{ValidationContext, ValidationError, Validator, ValidatorOptions};
//!
//! struct Topic { title: String }
//!
//! struct PresenceValidator {
//!     options: ValidatorOptions,
//! }
//!
//! impl Validator<Topic> for PresenceValidator {
//!     fn validate(&self, ctx: &mut ValidationContext<'_, Topic>) -> Result<(), ValidationError> {
//!         if ctx.record().title.is_empty() {
//!             let field = self.options.get_str("field").unwrap_or("title");
//!             ctx.add_error(field, "can't be blank");
//!         }
//!         Ok(())
//!     }
//! }
//! ```

pub mod context;
pub mod error;
pub mod options;

pub use context::ValidationContext;
pub use error::ValidationError;
pub use options::ValidatorOptions;

use std::sync::Arc;

/// Validation logic run against a record.
pub trait Validator<R>: Send + Sync {
    /// Inspect the record and append any findings to the context's errors.
    ///
    /// Returning `Err` aborts the whole pass.
    fn validate(&self, ctx: &mut ValidationContext<'_, R>) -> Result<(), ValidationError>;
}

impl<R, V> Validator<R> for Arc<V>
where
    V: Validator<R> + ?Sized,
{
    fn validate(&self, ctx: &mut ValidationContext<'_, R>) -> Result<(), ValidationError> {
        (**self).validate(ctx)
    }
}

impl<R> Validator<R> for Box<dyn Validator<R>> {
    fn validate(&self, ctx: &mut ValidationContext<'_, R>) -> Result<(), ValidationError> {
        (**self).validate(ctx)
    }
}

/// Factory building a validator from its forwarded options.
/// Invoked once per eligible registration on every pass.
pub type ValidatorFactory<R> =
    Arc<dyn Fn(&ValidatorOptions) -> Result<Box<dyn Validator<R>>, ValidationError> + Send + Sync>;

/// Wrap a constructor function into a [`ValidatorFactory`].
///
/// # Example
///
/// ```rust
/// use ratify::validator::{
///     factory, ValidationContext, ValidationError, Validator, ValidatorFactory, ValidatorOptions,
/// };
///
/// struct AlwaysInvalid;
///
/// impl Validator<()> for AlwaysInvalid {
///     fn validate(&self, ctx: &mut ValidationContext<'_, ()>) -> Result<(), ValidationError> {
///         ctx.add_base_error("nope");
///         Ok(())
///     }
/// }
///
/// let build: ValidatorFactory<()> = factory(|_options: &ValidatorOptions| Ok(AlwaysInvalid));
/// assert!(build(&ValidatorOptions::new()).is_ok());
/// ```
pub fn factory<R, V, F>(constructor: F) -> ValidatorFactory<R>
where
    R: 'static,
    V: Validator<R> + 'static,
    F: Fn(&ValidatorOptions) -> Result<V, ValidationError> + Send + Sync + 'static,
{
    Arc::new(move |options: &ValidatorOptions| {
        constructor(options).map(|validator| Box::new(validator) as Box<dyn Validator<R>>)
    })
}

/// Validator backed by a closure.
pub struct FnValidator<F> {
    check: F,
}

impl<F> FnValidator<F> {
    pub fn new<R>(check: F) -> Self
    where
        F: Fn(&mut ValidationContext<'_, R>) -> Result<(), ValidationError> + Send + Sync,
    {
        Self { check }
    }
}

impl<R, F> Validator<R> for FnValidator<F>
where
    F: Fn(&mut ValidationContext<'_, R>) -> Result<(), ValidationError> + Send + Sync,
{
    fn validate(&self, ctx: &mut ValidationContext<'_, R>) -> Result<(), ValidationError> {
        (self.check)(ctx)
    }
}
