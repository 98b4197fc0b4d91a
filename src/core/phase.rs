//! Lifecycle phases that scope when a validator runs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Lifecycle stage a validation pass runs in.
///
/// The host decides the phase: `Create` for records that were never saved,
/// `Update` for persisted ones. `Any` means the pass is not tied to a
/// specific phase. `Custom` names an application-defined context.
///
/// A phase is identified by its name, so `Custom("create")` and `Create`
/// compare equal and serialize the same way.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Phase {
    Create,
    Update,
    Any,
    Custom(String),
}

impl Phase {
    /// Parse a phase name as written in declarative options.
    pub fn parse(name: &str) -> Self {
        match name {
            "create" => Self::Create,
            "update" => Self::Update,
            "any" => Self::Any,
            other => Self::Custom(other.to_string()),
        }
    }

    /// Application-defined phase. Reserved names map to their built-in variant.
    pub fn custom(name: impl AsRef<str>) -> Self {
        Self::parse(name.as_ref())
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Create => "create",
            Self::Update => "update",
            Self::Any => "any",
            Self::Custom(name) => name,
        }
    }

    fn is_any(&self) -> bool {
        self.name() == "any"
    }

    /// Check whether a registration filtered on `filter` applies to this phase.
    ///
    /// Registrations without a filter always apply, and so does every
    /// registration when the pass runs in `Any`.
    pub fn admits(&self, filter: Option<&Phase>) -> bool {
        match filter {
            None => true,
            Some(_) if self.is_any() => true,
            Some(filter) => filter == self,
        }
    }
}

impl PartialEq for Phase {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for Phase {}

impl Hash for Phase {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name().hash(state);
    }
}

impl From<String> for Phase {
    fn from(name: String) -> Self {
        Self::parse(&name)
    }
}

impl From<Phase> for String {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Custom(name) => name,
            builtin => builtin.name().to_string(),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
