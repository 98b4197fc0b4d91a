//! Context provided to validators.

use crate::core::{ErrorBag, Phase};
use chrono::{DateTime, Utc};
use std::time::Duration;

/// Context provided to a validator for one pass.
///
/// Wraps the record under validation, the phase of the pass, and the error
/// bag shared by every validator in the pass.
#[derive(Debug)]
pub struct ValidationContext<'a, R> {
    record: &'a R,
    phase: Phase,
    errors: &'a mut ErrorBag,
    started_at: DateTime<Utc>,
}

impl<'a, R> ValidationContext<'a, R> {
    pub fn new(record: &'a R, phase: Phase, errors: &'a mut ErrorBag) -> Self {
        Self {
            record,
            phase,
            errors,
            started_at: Utc::now(),
        }
    }

    pub(crate) fn with_start(mut self, started_at: DateTime<Utc>) -> Self {
        self.started_at = started_at;
        self
    }

    /// The record exactly as it was passed to the engine.
    pub fn record(&self) -> &'a R {
        self.record
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn errors(&mut self) -> &mut ErrorBag {
        &mut *self.errors
    }

    /// Shorthand for `errors().add(field, message)`.
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.add(field, message);
    }

    pub fn add_base_error(&mut self, message: impl Into<String>) {
        self.errors.add_to_base(message);
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Calculate elapsed time since the pass started (pure)
    pub fn elapsed(&self) -> Duration {
        Utc::now()
            .signed_duration_since(self.started_at)
            .to_std()
            .unwrap_or(Duration::ZERO)
    }
}
