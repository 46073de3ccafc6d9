//! Representation levels for serialized resources.
//!
//! A representation controls how much of a resource appears on the wire:
//! `Ref` is the minimal pointer form (`uuid` + `display` + links), `Default`
//! is the usual listing form, and `Full` adds audit metadata and expands
//! relations. Relation-valued properties carry a nested representation so a
//! related entity expands at `Ref` instead of recursing without bound.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RestError;

/// Requested verbosity of a serialized resource, ordered from least to most
/// detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Representation {
    /// Minimal pointer form: `uuid`, `display` and navigation links.
    Ref,
    /// The standard form returned when no `v=` parameter is given.
    Default,
    /// Everything, including audit metadata; relations expand at `Default`.
    Full,
}

impl Representation {
    /// The wire value used in `v=` query parameters.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ref => "ref",
            Self::Default => "default",
            Self::Full => "full",
        }
    }
}

impl Default for Representation {
    fn default() -> Self {
        Self::Default
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Representation {
    type Err = RestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ref" => Ok(Self::Ref),
            "default" => Ok(Self::Default),
            "full" => Ok(Self::Full),
            other => Err(RestError::unknown_representation(other)),
        }
    }
}
