//! Conditional guards for validator registrations.
//!
//! Conditions back the `if`/`unless` registration options. They are
//! evaluated late, immediately before the engine decides whether a
//! registration runs for the current pass.

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

type Predicate<R> = Arc<dyn Fn(&R) -> bool + Send + Sync>;

/// Guard deciding whether a registration runs.
///
/// A condition is either a literal boolean or a predicate. Predicates carry a
/// label that shows up in logs and is what validator factories receive under
/// the `if` option.
///
/// # Example
///
/// ```rust
/// use ratify::core::Condition;
///
/// struct Topic { approved: bool }
///
/// let always = Condition::<Topic>::from(true);
/// let one_is_one = Condition::<Topic>::from_fn("1 == 1", || 1 == 1);
/// let approved = Condition::new("approved", |topic: &Topic| topic.approved);
///
/// let topic = Topic { approved: false };
/// assert!(always.check(&topic));
/// assert!(one_is_one.check(&topic));
/// assert!(!approved.check(&topic));
/// ```
pub enum Condition<R> {
    Literal(bool),
    Predicate { label: String, predicate: Predicate<R> },
}

impl<R> Condition<R> {
    /// Create a condition from a predicate over the record.
    pub fn new<F>(label: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&R) -> bool + Send + Sync + 'static,
    {
        Condition::Predicate {
            label: label.into(),
            predicate: Arc::new(predicate),
        }
    }

    /// Create a condition from a zero-argument predicate.
    pub fn from_fn<F>(label: impl Into<String>, predicate: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
        R: 'static,
    {
        Self::new(label, move |_: &R| predicate())
    }

    /// Evaluate the condition for this record.
    pub fn check(&self, record: &R) -> bool {
        match self {
            Condition::Literal(value) => *value,
            Condition::Predicate { predicate, .. } => predicate(record),
        }
    }

    /// Value forwarded to validator factories for this condition.
    pub fn to_option_value(&self) -> Value {
        match self {
            Condition::Literal(value) => Value::Bool(*value),
            Condition::Predicate { label, .. } => Value::String(label.clone()),
        }
    }
}

impl<R> From<bool> for Condition<R> {
    fn from(value: bool) -> Self {
        Condition::Literal(value)
    }
}

impl<R> Clone for Condition<R> {
    fn clone(&self) -> Self {
        match self {
            Condition::Literal(value) => Condition::Literal(*value),
            Condition::Predicate { label, predicate } => Condition::Predicate {
                label: label.clone(),
                predicate: Arc::clone(predicate),
            },
        }
    }
}

impl<R> fmt::Debug for Condition<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Condition::Predicate { label, .. } => {
                f.debug_struct("Predicate").field("label", label).finish()
            }
        }
    }
}

impl<R> fmt::Display for Condition<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Literal(value) => write!(f, "{value}"),
            Condition::Predicate { label, .. } => f.write_str(label),
        }
    }
}
