//! Metadata entities: the reference data other entities point at.
//!
//! Metadata is never voided, it is retired: still resolvable, flagged as no
//! longer in use.

use serde::{Deserialize, Serialize};

use crate::audit::AuditInfo;

/// A kind of patient identifier (e.g. a national ID scheme or an MRN).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifierType {
    pub uuid: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub retired: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audit: Option<AuditInfo>,
}

impl IdentifierType {
    pub fn new(uuid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            name: name.into(),
            description: None,
            retired: false,
            audit: Some(AuditInfo::new()),
        }
    }
}

/// A physical place identifiers can be issued at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub uuid: String,
    pub name: String,
    #[serde(default)]
    pub retired: bool,
}

impl Location {
    pub fn new(uuid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            name: name.into(),
            retired: false,
        }
    }
}

/// A coded concept. Only the pointer form matters at this layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub uuid: String,
    pub display: String,
}

impl Concept {
    pub fn new(uuid: impl Into<String>, display: impl Into<String>) -> Self {
        Self {
            uuid: uuid.into(),
            display: display.into(),
        }
    }
}
