//! A validator bound to its phase filter, guards, and forwarded options.

use crate::core::{Condition, Phase};
use crate::registry::builder::RegistrationOptions;
use crate::validator::{ValidationError, Validator, ValidatorFactory, ValidatorOptions};
use std::fmt;

/// Why a registration did not run for a pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The registration is scoped to another phase.
    Phase,
    /// The `unless` condition held.
    Unless,
    /// The `if` condition did not hold.
    If,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::Phase => "phase filter did not match",
            Self::Unless => "unless condition held",
            Self::If => "if condition did not hold",
        };
        f.write_str(reason)
    }
}

/// One registered validator.
pub struct Registration<R> {
    name: String,
    factory: ValidatorFactory<R>,
    on: Option<Phase>,
    condition: Option<Condition<R>>,
    unless: Option<Condition<R>>,
    forwarded: ValidatorOptions,
}

impl<R> Registration<R> {
    pub fn new(
        name: impl Into<String>,
        factory: ValidatorFactory<R>,
        options: RegistrationOptions<R>,
    ) -> Self {
        let forwarded = options.forwarded();
        Self {
            name: name.into(),
            factory,
            on: options.on,
            condition: options.condition,
            unless: options.unless,
            forwarded,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phase(&self) -> Option<&Phase> {
        self.on.as_ref()
    }

    /// Options handed to the factory on every pass.
    pub fn forwarded_options(&self) -> &ValidatorOptions {
        &self.forwarded
    }

    /// Decide whether this registration runs for `record` in `phase`.
    ///
    /// Conditions are evaluated here, on every call. `unless` is checked
    /// before `if`, and neither is evaluated when the phase already excludes
    /// the registration.
    pub fn skip_reason(&self, record: &R, phase: &Phase) -> Option<SkipReason> {
        if !phase.admits(self.on.as_ref()) {
            return Some(SkipReason::Phase);
        }
        if self.unless.as_ref().is_some_and(|c| c.check(record)) {
            return Some(SkipReason::Unless);
        }
        if self.condition.as_ref().is_some_and(|c| !c.check(record)) {
            return Some(SkipReason::If);
        }
        None
    }

    /// Build a fresh validator from the forwarded options.
    pub fn build(&self) -> Result<Box<dyn Validator<R>>, ValidationError> {
        (self.factory)(&self.forwarded).map_err(|err| match err {
            ValidationError::Custom(reason) => ValidationError::FactoryFailed {
                validator: self.name.clone(),
                reason,
            },
            other => other,
        })
    }
}

impl<R> fmt::Debug for Registration<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("name", &self.name)
            .field("on", &self.on)
            .field("if", &self.condition)
            .field("unless", &self.unless)
            .field("options", &self.forwarded)
            .finish()
    }
}
