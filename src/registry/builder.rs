//! Builder API for registration options.

use crate::core::{Condition, Phase};
use crate::validator::{ValidationError, ValidatorOptions};
use serde_json::Value;

/// Option keys the engine consumes itself.
pub const ON: &str = "on";
pub const IF: &str = "if";
pub const UNLESS: &str = "unless";

/// Options attached to a registration.
///
/// `on` scopes the registration to a phase, `when`/`unless` gate it on a
/// condition, and every other option is forwarded untouched to the
/// validator factory. The `if` condition is forwarded as well; `on` and
/// `unless` are not.
///
/// # Example
///
/// ```rust
/// use ratify::core::{Condition, Phase};
/// use ratify::registry::RegistrationOptions;
/// use serde_json::json;
///
/// struct Topic;
///
/// let options = RegistrationOptions::<Topic>::new()
///     .on(Phase::Update)
///     .when(Condition::from_fn("1 == 1", || 1 == 1))
///     .option("foo", "bar");
///
/// assert_eq!(options.forwarded(), json!({ "foo": "bar", "if": "1 == 1" }));
/// ```
pub struct RegistrationOptions<R> {
    pub(crate) on: Option<Phase>,
    pub(crate) condition: Option<Condition<R>>,
    pub(crate) unless: Option<Condition<R>>,
    pub(crate) options: ValidatorOptions,
}

impl<R> RegistrationOptions<R> {
    pub fn new() -> Self {
        Self {
            on: None,
            condition: None,
            unless: None,
            options: ValidatorOptions::new(),
        }
    }

    /// Only run in this phase.
    pub fn on(mut self, phase: Phase) -> Self {
        self.on = Some(phase);
        self
    }

    /// Only run when the condition holds (the `if` option).
    pub fn when(mut self, condition: impl Into<Condition<R>>) -> Self {
        self.condition = Some(condition.into());
        self
    }

    /// Skip when the condition holds.
    pub fn unless(mut self, condition: impl Into<Condition<R>>) -> Self {
        self.unless = Some(condition.into());
        self
    }

    /// Add an option forwarded to the validator factory.
    pub fn option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key, value);
        self
    }

    /// Parse declarative options from a JSON object.
    ///
    /// `on` must be a phase name. `if` and `unless` must be booleans; string
    /// expressions are rejected since there is nothing to evaluate them with.
    /// Use [`when`](Self::when) or [`unless`](Self::unless) for predicates.
    pub fn from_json(value: Value) -> Result<Self, ValidationError> {
        let Value::Object(map) = value else {
            return Err(ValidationError::invalid_option(
                "options",
                "expected a JSON object",
            ));
        };

        let mut parsed = Self::new();
        for (key, value) in map {
            match key.as_str() {
                ON => parsed.on = Some(parse_phase(&value)?),
                IF => parsed.condition = Some(parse_condition(IF, &value)?),
                UNLESS => parsed.unless = Some(parse_condition(UNLESS, &value)?),
                _ => parsed.options.insert(key, value),
            }
        }
        Ok(parsed)
    }

    pub fn phase(&self) -> Option<&Phase> {
        self.on.as_ref()
    }

    /// Options a validator factory receives for this registration.
    pub fn forwarded(&self) -> ValidatorOptions {
        let mut forwarded = self.options.clone();
        if let Some(condition) = &self.condition {
            forwarded.insert(IF, condition.to_option_value());
        }
        forwarded
    }
}

fn parse_phase(value: &Value) -> Result<Phase, ValidationError> {
    match value {
        Value::String(name) => Ok(Phase::parse(name)),
        other => Err(ValidationError::invalid_option(
            ON,
            format!("expected a phase name, got {other}"),
        )),
    }
}

fn parse_condition<R>(key: &str, value: &Value) -> Result<Condition<R>, ValidationError> {
    match value {
        Value::Bool(literal) => Ok(Condition::Literal(*literal)),
        Value::String(expr) => Err(ValidationError::invalid_option(
            key,
            format!("cannot evaluate expression '{expr}', register a predicate instead"),
        )),
        other => Err(ValidationError::invalid_option(
            key,
            format!("expected a boolean, got {other}"),
        )),
    }
}

impl<R> Default for RegistrationOptions<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for RegistrationOptions<R> {
    fn clone(&self) -> Self {
        Self {
            on: self.on.clone(),
            condition: self.condition.clone(),
            unless: self.unless.clone(),
            options: self.options.clone(),
        }
    }
}
