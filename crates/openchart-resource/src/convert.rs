//! Serialization of relation-valued properties.
//!
//! A related entity never expands through its own full adapter here; it is
//! rendered at the nested representation its parent's description asked
//! for. `Ref` yields the minimal pointer object `{uuid, display, ...}`.

use serde_json::{Value, json};

use openchart_core::{Representation, Result};
use openchart_model::{AuditInfo, Concept, IdentifierType, Location, ProgramWorkflow};

/// Renders an identifier type at the given level.
pub fn identifier_type_json(t: &IdentifierType, representation: Representation) -> Value {
    match representation {
        Representation::Ref => json!({
            "uuid": t.uuid,
            "display": t.name,
        }),
        Representation::Default | Representation::Full => json!({
            "uuid": t.uuid,
            "display": t.name,
            "name": t.name,
            "description": t.description,
            "retired": t.retired,
        }),
    }
}

/// Renders a location at the given level.
pub fn location_json(location: &Location, representation: Representation) -> Value {
    match representation {
        Representation::Ref => json!({
            "uuid": location.uuid,
            "display": location.name,
        }),
        Representation::Default | Representation::Full => json!({
            "uuid": location.uuid,
            "display": location.name,
            "name": location.name,
            "retired": location.retired,
        }),
    }
}

/// Renders a concept pointer. Concepts only ever appear in pointer form at
/// this layer.
pub fn concept_json(concept: &Concept) -> Value {
    json!({
        "uuid": concept.uuid,
        "display": concept.display,
    })
}

/// Renders a program workflow at the given level.
pub fn workflow_json(workflow: &ProgramWorkflow, representation: Representation) -> Value {
    match representation {
        Representation::Ref => json!({
            "uuid": workflow.uuid,
            "display": workflow.display(),
            "retired": workflow.retired,
        }),
        Representation::Default | Representation::Full => json!({
            "uuid": workflow.uuid,
            "display": workflow.display(),
            "concept": workflow.concept.as_ref().map(concept_json),
            "retired": workflow.retired,
        }),
    }
}

/// Renders audit metadata for full representations.
pub fn audit_json(audit: &AuditInfo) -> Result<Value> {
    Ok(serde_json::to_value(audit)?)
}

/// Reads the uuid out of a loosely-specified reference: a bare string or an
/// object carrying a `uuid` key. Empty strings count as absent.
pub fn reference_uuid(value: &Value) -> Option<&str> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Object(map) => map
            .get("uuid")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty()),
        _ => None,
    }
}

/// Reads the name out of a partially-populated reference literal.
pub fn reference_name(value: &Value) -> Option<&str> {
    value
        .as_object()?
        .get("name")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_type_ref_is_pointer_form() {
        let t = IdentifierType::new("t-1", "National ID");
        let value = identifier_type_json(&t, Representation::Ref);
        assert_eq!(value, json!({"uuid": "t-1", "display": "National ID"}));
    }

    #[test]
    fn test_identifier_type_default_expands() {
        let mut t = IdentifierType::new("t-1", "National ID");
        t.description = Some("Government issued".to_string());
        let value = identifier_type_json(&t, Representation::Default);
        assert_eq!(value["name"], "National ID");
        assert_eq!(value["description"], "Government issued");
        assert_eq!(value["retired"], false);
    }

    #[test]
    fn test_workflow_ref_uses_concept_display() {
        let workflow = ProgramWorkflow::new(Concept::new("c-1", "HIV Treatment"));
        let value = workflow_json(&workflow, Representation::Ref);
        assert_eq!(value["display"], "HIV Treatment");
        assert!(value.get("concept").is_none());
    }

    #[test]
    fn test_workflow_default_carries_concept_pointer() {
        let workflow = ProgramWorkflow::new(Concept::new("c-1", "HIV Treatment"));
        let value = workflow_json(&workflow, Representation::Default);
        assert_eq!(value["concept"]["uuid"], "c-1");
    }

    #[test]
    fn test_audit_json_wire_names() {
        let value = audit_json(&AuditInfo::new()).unwrap();
        assert!(value["dateCreated"].is_string());
    }

    #[test]
    fn test_reference_uuid_from_string_and_object() {
        assert_eq!(reference_uuid(&json!("t-1")), Some("t-1"));
        assert_eq!(reference_uuid(&json!({"uuid": "t-2"})), Some("t-2"));
        assert_eq!(reference_uuid(&json!({"name": "NID"})), None);
        assert_eq!(reference_uuid(&json!({"uuid": ""})), None);
        assert_eq!(reference_uuid(&json!(42)), None);
    }

    #[test]
    fn test_reference_name() {
        assert_eq!(reference_name(&json!({"name": "NID"})), Some("NID"));
        assert_eq!(reference_name(&json!({"name": ""})), None);
        assert_eq!(reference_name(&json!("NID")), None);
    }
}
