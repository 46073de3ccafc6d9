use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Creation/change timestamps carried by every persisted entity and exposed
/// only at the full representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditInfo {
    #[serde(rename = "dateCreated", with = "time::serde::rfc3339")]
    pub date_created: OffsetDateTime,
    #[serde(
        rename = "dateChanged",
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub date_changed: Option<OffsetDateTime>,
}

impl AuditInfo {
    #[must_use]
    pub fn new() -> Self {
        Self {
            date_created: OffsetDateTime::now_utc(),
            date_changed: None,
        }
    }

    /// Stamps the entity as changed now.
    pub fn mark_changed(&mut self) {
        self.date_changed = Some(OffsetDateTime::now_utc());
    }
}

impl Default for AuditInfo {
    fn default() -> Self {
        Self::new()
    }
}
