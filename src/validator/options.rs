//! Options forwarded to validator factories.

use crate::validator::error::ValidationError;
use serde_json::{Map, Value};

/// Options a validator is built with.
///
/// Factories receive these on every pass and validators usually keep a
/// clone so they can read their configuration inside `validate`.
///
/// # Example
///
/// ```rust
/// use ratify::validator::ValidatorOptions;
/// use serde_json::json;
///
/// let options = ValidatorOptions::from_value(json!({ "field": "first_name" })).unwrap();
/// assert_eq!(options.get_str("field"), Some("first_name"));
/// assert!(options.get("missing").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ValidatorOptions {
    values: Map<String, Value>,
}

impl ValidatorOptions {
    pub fn new() -> Self {
        Self { values: Map::new() }
    }

    /// Build options from a JSON object.
    pub fn from_value(value: Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            other => Err(ValidationError::invalid_option(
                "options",
                format!("expected an object, got {other}"),
            )),
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.values.get(key).and_then(Value::as_str)
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.values.get(key).and_then(Value::as_bool)
    }

    /// Read a string option, failing when it is missing or not a string.
    pub fn require_str(&self, key: &str) -> Result<&str, ValidationError> {
        self.get_str(key).ok_or_else(|| {
            ValidationError::invalid_option(key, "required string option is missing")
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.values
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.values)
    }
}

impl PartialEq<Value> for ValidatorOptions {
    fn eq(&self, other: &Value) -> bool {
        other.as_object() == Some(&self.values)
    }
}

impl From<Map<String, Value>> for ValidatorOptions {
    fn from(values: Map<String, Value>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_rejects_non_objects() {
        let result = ValidatorOptions::from_value(json!(["field"]));
        assert!(matches!(
            result,
            Err(ValidationError::InvalidOption { ref key, .. }) if key == "options"
        ));
    }

    #[test]
    fn typed_getters_read_values() {
        let mut options = ValidatorOptions::new();
        options.insert("field", "first_name");
        options.insert("strict", true);

        assert_eq!(options.get_str("field"), Some("first_name"));
        assert_eq!(options.get_bool("strict"), Some(true));
        assert_eq!(options.get_bool("field"), None);
        assert_eq!(options.len(), 2);
    }

    #[test]
    fn require_str_reports_missing_key() {
        let options = ValidatorOptions::new();
        let err = options.require_str("field").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Invalid registration option 'field': required string option is missing"
        );
    }

    #[test]
    fn compares_against_json_objects() {
        let mut options = ValidatorOptions::new();
        options.insert("foo", "bar");

        assert_eq!(options, json!({ "foo": "bar" }));
        assert_ne!(options, json!({ "foo": "bar", "if": "1 == 1" }));
    }
}
