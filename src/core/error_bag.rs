//! Ordered collection of validation messages keyed by field.
//!
//! An `ErrorBag` is the only normal-path output of a validation pass. It
//! behaves like an ordered multi-map: each field keeps its messages in the
//! order they were added, duplicates included.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Key used for record-level messages that are not tied to a single field.
pub const BASE: &str = "base";

/// A single message attached to a field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered multi-map from field key to validation messages.
///
/// # Example
///
/// ```rust
/// use ratify::core::ErrorBag;
///
/// let mut errors = ErrorBag::new();
/// errors.add_to_base("Validation error from validator");
/// errors.add("title", "can't be blank");
///
/// assert!(!errors.is_empty());
/// assert!(errors.includes("base", "Validation error from validator"));
/// assert_eq!(errors.full_messages(), vec![
///     "Validation error from validator".to_string(),
///     "Title can't be blank".to_string(),
/// ]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorBag {
    messages: IndexMap<String, Vec<String>>,
}

impl ErrorBag {
    /// Create an empty bag.
    pub fn new() -> Self {
        Self {
            messages: IndexMap::new(),
        }
    }

    /// Append a message to a field, creating the field's sequence if needed.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.messages
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Append a record-level message under [`BASE`].
    pub fn add_to_base(&mut self, message: impl Into<String>) {
        self.add(BASE, message);
    }

    /// Check whether `message` was added to `field` (exact match).
    pub fn includes(&self, field: &str, message: &str) -> bool {
        self.messages
            .get(field)
            .is_some_and(|messages| messages.iter().any(|m| m == message))
    }

    /// True when no field holds a message.
    pub fn is_empty(&self) -> bool {
        self.messages.values().all(Vec::is_empty)
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    /// Messages for a field in insertion order. Empty when the field is absent.
    pub fn get(&self, field: &str) -> &[String] {
        self.messages.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of messages across all fields.
    pub fn len(&self) -> usize {
        self.messages.values().map(Vec::len).sum()
    }

    /// Fields holding at least one message, in the order they were first added.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.messages
            .iter()
            .filter(|(_, messages)| !messages.is_empty())
            .map(|(field, _)| field.as_str())
    }

    /// Remove a field, returning its messages.
    pub fn delete(&mut self, field: &str) -> Option<Vec<String>> {
        self.messages.shift_remove(field)
    }

    /// Iterate `(field, message)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.messages.iter().flat_map(|(field, messages)| {
            messages
                .iter()
                .map(move |message| (field.as_str(), message.as_str()))
        })
    }

    /// Append every message of `other`, preserving its order.
    pub fn merge(&mut self, other: ErrorBag) {
        for (field, messages) in other.messages {
            self.messages.entry(field).or_default().extend(messages);
        }
    }

    /// Human readable messages.
    ///
    /// Base messages are returned verbatim; field messages are prefixed with
    /// the humanized field name.
    pub fn full_messages(&self) -> Vec<String> {
        self.iter()
            .map(|(field, message)| {
                if field == BASE {
                    message.to_string()
                } else {
                    format!("{} {}", humanize(field), message)
                }
            })
            .collect()
    }

    /// Convert into a Stillwater `Validation`, failing with every message.
    pub fn into_validation(self) -> Validation<(), NonEmptyVec<FieldError>> {
        let errors: Vec<FieldError> = self
            .messages
            .into_iter()
            .flat_map(|(field, messages)| {
                messages.into_iter().map(move |message| FieldError {
                    field: field.clone(),
                    message,
                })
            })
            .collect();

        match NonEmptyVec::from_vec(errors) {
            Some(errors) => Validation::Failure(errors),
            None => Validation::Success(()),
        }
    }
}

/// `first_name` -> `First name`
fn humanize(field: &str) -> String {
    let field = field.strip_suffix("_id").unwrap_or(field);
    let spaced = field.trim_start_matches('_').replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
