//! Validator registry and the validation engine.
//!
//! The registry keeps an ordered list of registrations per record type and
//! runs them against records. Every eligible registration runs on every
//! pass; findings are aggregated in one [`ErrorBag`] instead of stopping at
//! the first failing validator.
//!
//! The registry is an explicit value: construct it at startup, register
//! validators, then share it by reference wherever records are validated.
//! Registration needs `&mut self`, so it cannot overlap with an in-flight
//! validation pass.
//!
//! # Example
//!
//! ```rust
//! use ratify::core::{Phase, Record};
//! use ratify::registry::{RegistrationOptions, ValidatorRegistry};
//! use ratify::validator::ValidationContext;
//!
//! struct Topic { title: String }
//!
//! impl Record for Topic {}
//!
//! let mut registry = ValidatorRegistry::new();
//! registry.register_fn(
//!     "title_presence",
//!     |ctx: &mut ValidationContext<'_, Topic>| {
//!         if ctx.record().title.is_empty() {
//!             ctx.add_error("title", "can't be blank");
//!         }
//!         Ok(())
//!     },
//!     RegistrationOptions::new().on(Phase::Create),
//! );
//!
//! let topic = Topic { title: String::new() };
//! let errors = registry.validate(&topic, Phase::Create).unwrap();
//! assert!(errors.includes("title", "can't be blank"));
//! assert!(registry.validate(&topic, Phase::Update).unwrap().is_empty());
//! ```

pub mod builder;
pub mod registration;

pub use builder::RegistrationOptions;
pub use registration::{Registration, SkipReason};

use crate::core::{ErrorBag, Phase, Record};
use crate::validator::{
    FnValidator, ValidationContext, ValidationError, Validator, ValidatorFactory,
    ValidatorOptions,
};
use chrono::Utc;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Ordered validator registrations keyed by record type.
#[derive(Default)]
pub struct ValidatorRegistry {
    registrations: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self {
            registrations: HashMap::new(),
        }
    }

    /// Register one or more validators sharing the same options.
    ///
    /// Each validator becomes its own registration, appended in the order
    /// given.
    pub fn register<R, I, N>(&mut self, validators: I, options: RegistrationOptions<R>)
    where
        R: Record,
        I: IntoIterator<Item = (N, ValidatorFactory<R>)>,
        N: Into<String>,
    {
        let list = self.registrations_mut::<R>();
        for (name, factory) in validators {
            let registration = Registration::new(name, factory, options.clone());
            debug!(
                record = type_name::<R>(),
                validator = registration.name(),
                on = ?registration.phase(),
                "registered validator"
            );
            list.push(registration);
        }
    }

    /// Register a single validator factory.
    pub fn register_one<R: Record>(
        &mut self,
        name: impl Into<String>,
        factory: ValidatorFactory<R>,
        options: RegistrationOptions<R>,
    ) {
        self.register([(name.into(), factory)], options);
    }

    /// Register a closure as a validator.
    pub fn register_fn<R, F>(
        &mut self,
        name: impl Into<String>,
        check: F,
        options: RegistrationOptions<R>,
    ) where
        R: Record,
        F: Fn(&mut ValidationContext<'_, R>) -> Result<(), ValidationError>
            + Send
            + Sync
            + 'static,
    {
        self.register_instance(name, Arc::new(FnValidator::new(check)), options);
    }

    /// Register an already built validator. The same instance serves every
    /// pass, so forwarded options are not passed to it.
    pub fn register_instance<R, V>(
        &mut self,
        name: impl Into<String>,
        validator: Arc<V>,
        options: RegistrationOptions<R>,
    ) where
        R: Record,
        V: Validator<R> + 'static,
    {
        let factory: ValidatorFactory<R> = Arc::new(
            move |_: &ValidatorOptions| -> Result<Box<dyn Validator<R>>, ValidationError> {
                Ok(Box::new(Arc::clone(&validator)))
            },
        );
        self.register_one(name, factory, options);
    }

    /// Run every eligible registration for the record's type.
    ///
    /// Returns a fresh [`ErrorBag`]; the record is valid when it is empty.
    /// A failing factory or validator aborts the pass and its error is
    /// returned.
    pub fn validate<R: Record>(&self, record: &R, phase: Phase) -> Result<ErrorBag, ValidationError> {
        let mut errors = ErrorBag::new();
        self.validate_into(record, phase, &mut errors)?;
        Ok(errors)
    }

    /// Like [`validate`](Self::validate) but appends to an existing bag
    /// without clearing it.
    pub fn validate_into<R: Record>(
        &self,
        record: &R,
        phase: Phase,
        errors: &mut ErrorBag,
    ) -> Result<(), ValidationError> {
        let started_at = Utc::now();
        let before = errors.len();

        for registration in self.registrations_for::<R>() {
            if let Some(reason) = registration.skip_reason(record, &phase) {
                trace!(
                    validator = registration.name(),
                    phase = %phase,
                    %reason,
                    "skipping validator"
                );
                continue;
            }

            let validator = registration.build().inspect_err(|err| {
                warn!(validator = registration.name(), error = %err, "validator factory failed");
            })?;

            let mut ctx =
                ValidationContext::new(record, phase.clone(), errors).with_start(started_at);
            validator.validate(&mut ctx).inspect_err(|err| {
                warn!(validator = registration.name(), error = %err, "validator failed");
            })?;
        }

        debug!(
            record = record.record_name(),
            phase = %phase,
            errors = errors.len().saturating_sub(before),
            elapsed_us = (Utc::now() - started_at).num_microseconds().unwrap_or(i64::MAX),
            "validation pass finished"
        );
        Ok(())
    }

    /// Validate in the phase the record reports for itself.
    pub fn validate_record<R: Record>(&self, record: &R) -> Result<ErrorBag, ValidationError> {
        self.validate(record, record.validation_phase())
    }

    /// True when validating in the record's own phase adds no errors.
    pub fn is_valid<R: Record>(&self, record: &R) -> Result<bool, ValidationError> {
        Ok(self.validate_record(record)?.is_empty())
    }

    pub fn is_invalid<R: Record>(&self, record: &R) -> Result<bool, ValidationError> {
        self.is_valid(record).map(|valid| !valid)
    }

    /// Registrations for a record type in execution order.
    pub fn registrations_for<R: Record>(&self) -> &[Registration<R>] {
        self.registrations
            .get(&TypeId::of::<R>())
            .and_then(|list| list.downcast_ref::<Vec<Registration<R>>>())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Names of the validators registered for a record type, in order.
    pub fn validator_names<R: Record>(&self) -> Vec<&str> {
        self.registrations_for::<R>()
            .iter()
            .map(Registration::name)
            .collect()
    }

    pub fn registration_count<R: Record>(&self) -> usize {
        self.registrations_for::<R>().len()
    }

    /// Remove every registration for a record type.
    pub fn reset<R: Record>(&mut self) {
        if self.registrations.remove(&TypeId::of::<R>()).is_some() {
            debug!(record = type_name::<R>(), "reset validator registrations");
        }
    }

    pub fn reset_all(&mut self) {
        self.registrations.clear();
    }

    fn registrations_mut<R: Record>(&mut self) -> &mut Vec<Registration<R>> {
        // Slots are keyed by `TypeId::of::<R>()` and only ever hold
        // `Vec<Registration<R>>`, so the downcast cannot miss.
        match self
            .registrations
            .entry(TypeId::of::<R>())
            .or_insert_with(|| Box::new(Vec::<Registration<R>>::new()))
            .downcast_mut::<Vec<Registration<R>>>()
        {
            Some(list) => list,
            None => unreachable!("slot for {} holds another type", type_name::<R>()),
        }
    }
}
