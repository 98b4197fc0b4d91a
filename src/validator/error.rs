//! Errors raised while registering or running validators.

use thiserror::Error;

/// Failures that abort a validation pass.
///
/// These are never validation findings: findings are messages in the
/// `ErrorBag`. A `ValidationError` means the pass itself could not finish.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid registration option '{key}': {reason}")]
    InvalidOption { key: String, reason: String },

    #[error("Validator '{validator}' could not be built: {reason}")]
    FactoryFailed { validator: String, reason: String },

    #[error("Validator '{validator}' failed: {reason}")]
    ValidatorFailed { validator: String, reason: String },

    #[error("{0}")]
    Custom(String),
}

impl ValidationError {
    pub fn invalid_option(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            key: key.into(),
            reason: reason.into(),
        }
    }

    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }
}
