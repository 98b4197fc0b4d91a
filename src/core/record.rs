//! Record trait implemented by host types that can be validated.

use super::phase::Phase;

/// Trait for subjects handed to the validation engine.
///
/// The registry keys registrations on the implementing type, so every
/// record type has its own ordered validator list.
///
/// # Example
///
/// ```rust
/// use ratify::core::{Phase, Record};
///
/// struct Topic {
///     id: Option<u64>,
///     title: String,
/// }
///
/// impl Record for Topic {
///     fn is_new_record(&self) -> bool {
///         self.id.is_none()
///     }
/// }
///
/// let topic = Topic { id: None, title: String::new() };
/// assert_eq!(topic.validation_phase(), Phase::Create);
/// ```
pub trait Record: Send + Sync + 'static {
    /// Name used in log output.
    fn record_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// True while the record has never been persisted.
    ///
    /// Default implementation returns `true`.
    fn is_new_record(&self) -> bool {
        true
    }

    /// Phase the host's validity check runs in.
    fn validation_phase(&self) -> Phase {
        if self.is_new_record() {
            Phase::Create
        } else {
            Phase::Update
        }
    }
}
