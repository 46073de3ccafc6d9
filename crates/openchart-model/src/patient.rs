//! Patients and their identifiers.
//!
//! A `PatientIdentifier` is a sub-resource: its identity and lifecycle are
//! scoped to the owning `Patient` aggregate. The patient keeps the full
//! identifier collection, voided entries included; the active view filters
//! them out.

use serde::{Deserialize, Serialize};

use openchart_core::generate_uuid;

use crate::audit::AuditInfo;
use crate::metadata::{IdentifierType, Location};

/// One identifier issued to a patient under some identifier type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientIdentifier {
    pub uuid: String,
    /// Owning patient; set when the identifier enters a patient's collection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_uuid: Option<String>,
    pub identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier_type: Option<IdentifierType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default)]
    pub preferred: bool,
    #[serde(default)]
    pub voided: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub void_reason: Option<String>,
    pub audit: AuditInfo,
}

impl PatientIdentifier {
    #[must_use]
    pub fn new() -> Self {
        Self {
            uuid: generate_uuid(),
            patient_uuid: None,
            identifier: String::new(),
            identifier_type: None,
            location: None,
            preferred: false,
            voided: false,
            void_reason: None,
            audit: AuditInfo::new(),
        }
    }

    /// Flags the identifier as voided without removing it.
    pub fn void(&mut self, reason: impl Into<String>) {
        self.voided = true;
        self.void_reason = Some(reason.into());
        self.audit.mark_changed();
    }
}

impl Default for PatientIdentifier {
    fn default() -> Self {
        Self::new()
    }
}

// Identity follows the uuid; two instances describe the same identifier
// record regardless of their other fields. This is the equality the parent
// membership check runs on.
impl PartialEq for PatientIdentifier {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl Eq for PatientIdentifier {}

/// The patient aggregate: demographics plus the identifier collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub uuid: String,
    pub given_name: String,
    pub family_name: String,
    #[serde(default)]
    pub identifiers: Vec<PatientIdentifier>,
    pub audit: AuditInfo,
}

impl Patient {
    pub fn new(given_name: impl Into<String>, family_name: impl Into<String>) -> Self {
        Self {
            uuid: generate_uuid(),
            given_name: given_name.into(),
            family_name: family_name.into(),
            identifiers: Vec::new(),
            audit: AuditInfo::new(),
        }
    }

    /// The non-voided identifiers, in collection order.
    pub fn active_identifiers(&self) -> impl Iterator<Item = &PatientIdentifier> {
        self.identifiers.iter().filter(|id| !id.voided)
    }

    /// Appends an identifier and claims ownership of it. Does not check for
    /// duplicates; that is the saving adapter's membership check.
    pub fn add_identifier(&mut self, mut identifier: PatientIdentifier) {
        identifier.patient_uuid = Some(self.uuid.clone());
        self.identifiers.push(identifier);
    }

    /// Detaches an identifier from the collection. A no-op when the
    /// identifier is not a member.
    pub fn remove_identifier(&mut self, identifier: &PatientIdentifier) {
        self.identifiers.retain(|id| id != identifier);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_follows_uuid() {
        let mut a = PatientIdentifier::new();
        a.identifier = "100-1".to_string();
        let mut b = a.clone();
        b.identifier = "different".to_string();
        assert_eq!(a, b);

        let c = PatientIdentifier::new();
        assert_ne!(a, c);
    }

    #[test]
    fn test_active_identifiers_excludes_voided() {
        let mut patient = Patient::new("Ada", "Mwangi");
        let active = PatientIdentifier::new();
        let mut voided = PatientIdentifier::new();
        voided.void("entered in error");
        patient.add_identifier(active.clone());
        patient.add_identifier(voided);
        let actives: Vec<&PatientIdentifier> = patient.active_identifiers().collect();
        assert_eq!(actives.len(), 1);
        assert_eq!(actives[0].uuid, active.uuid);
    }

    #[test]
    fn test_add_identifier_claims_ownership() {
        let mut patient = Patient::new("Ada", "Mwangi");
        patient.add_identifier(PatientIdentifier::new());
        assert_eq!(
            patient.identifiers[0].patient_uuid.as_deref(),
            Some(patient.uuid.as_str())
        );
    }

    #[test]
    fn test_remove_identifier_is_noop_when_absent() {
        let mut patient = Patient::new("Ada", "Mwangi");
        patient.add_identifier(PatientIdentifier::new());
        let stranger = PatientIdentifier::new();
        patient.remove_identifier(&stranger);
        assert_eq!(patient.identifiers.len(), 1);
    }

    #[test]
    fn test_void_sets_reason_and_change_date() {
        let mut identifier = PatientIdentifier::new();
        identifier.void("duplicate entry");
        assert!(identifier.voided);
        assert_eq!(identifier.void_reason.as_deref(), Some("duplicate entry"));
        assert!(identifier.audit.date_changed.is_some());
    }
}
