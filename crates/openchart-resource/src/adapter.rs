//! Generic operations over any resource: payload validation, representation
//! serialization, and the CRUD lifecycle.
//!
//! The external dispatcher calls these with a resource instance and wire
//! input; everything here completes within the caller's request and holds no
//! state between calls.

use serde_json::{Map, Value, json};
use tracing::debug;

use openchart_core::{Representation, ResourceDescription, RestError, Result};

use crate::resource::{CrudResource, SubResource};

/// Checks a write payload against a property description before any entity
/// is constructed or mutated.
///
/// # Errors
///
/// `InvalidPayload` when the payload is not a JSON object,
/// `MissingRequiredProperty` for a required property that is absent or null,
/// `UnknownProperty` for a supplied key the description does not declare.
pub fn validate_payload(description: &ResourceDescription, payload: &Value) -> Result<()> {
    let object = payload.as_object().ok_or(RestError::InvalidPayload)?;
    for required in description.required_properties() {
        match object.get(required) {
            None | Some(Value::Null) => return Err(RestError::missing_required(required)),
            Some(_) => {}
        }
    }
    for key in object.keys() {
        if !description.contains(key) {
            return Err(RestError::unknown_property(key));
        }
    }
    Ok(())
}

async fn apply_properties<R: CrudResource>(
    resource: &R,
    entity: &mut R::Entity,
    payload: &Value,
) -> Result<()> {
    let object = payload.as_object().ok_or(RestError::InvalidPayload)?;
    for (name, value) in object {
        resource.apply_property(entity, name, value).await?;
    }
    Ok(())
}

/// Creates a top-level entity: validate, construct NEW, apply setter hooks,
/// save.
pub async fn create<R: CrudResource>(resource: &R, payload: &Value) -> Result<R::Entity> {
    validate_payload(resource.creatable_properties(), payload)?;
    let mut entity = resource.new_entity();
    apply_properties(resource, &mut entity, payload).await?;
    let saved = resource.save(entity).await?;
    debug!(resource = resource.name(), "created entity");
    Ok(saved)
}

/// Creates a sub-resource entity under the given parent.
pub async fn create_child<R: SubResource>(
    resource: &R,
    parent_uuid: &str,
    payload: &Value,
) -> Result<R::Entity> {
    validate_payload(resource.creatable_properties(), payload)?;
    let parent = resource.get_parent(parent_uuid).await?;
    let mut entity = resource.new_entity();
    resource.set_parent(&mut entity, &parent);
    apply_properties(resource, &mut entity, payload).await?;
    let saved = resource.save(entity).await?;
    debug!(
        resource = resource.name(),
        parent_uuid, "created child entity"
    );
    Ok(saved)
}

/// Fetches an entity and serializes it at the requested representation.
pub async fn retrieve<R: CrudResource>(
    resource: &R,
    unique_id: &str,
    representation: Representation,
) -> Result<Value> {
    let entity = resource
        .get_by_unique_id(unique_id)
        .await?
        .ok_or_else(|| RestError::not_found(resource.name(), unique_id))?;
    to_representation(resource, &entity, representation)
}

/// Updates a persisted entity: validate against the updatable table, apply
/// setter hooks, save.
pub async fn update<R: CrudResource>(
    resource: &R,
    unique_id: &str,
    payload: &Value,
) -> Result<R::Entity> {
    validate_payload(resource.updatable_properties(), payload)?;
    let mut entity = resource
        .get_by_unique_id(unique_id)
        .await?
        .ok_or_else(|| RestError::not_found(resource.name(), unique_id))?;
    apply_properties(resource, &mut entity, payload).await?;
    let saved = resource.save(entity).await?;
    debug!(resource = resource.name(), unique_id, "updated entity");
    Ok(saved)
}

/// Soft-deletes an entity by unique id; PERSISTED becomes VOIDED.
pub async fn void_by_id<R: CrudResource>(
    resource: &R,
    unique_id: &str,
    reason: &str,
) -> Result<R::Entity> {
    let entity = resource
        .get_by_unique_id(unique_id)
        .await?
        .ok_or_else(|| RestError::not_found(resource.name(), unique_id))?;
    let voided = resource.void(entity, reason).await?;
    debug!(resource = resource.name(), unique_id, reason, "voided entity");
    Ok(voided)
}

/// Hard-removes an entity by unique id; PERSISTED or VOIDED becomes PURGED.
pub async fn purge_by_id<R: CrudResource>(resource: &R, unique_id: &str) -> Result<()> {
    let entity = resource
        .get_by_unique_id(unique_id)
        .await?
        .ok_or_else(|| RestError::not_found(resource.name(), unique_id))?;
    resource.purge(entity).await?;
    debug!(resource = resource.name(), unique_id, "purged entity");
    Ok(())
}

/// Serializes an entity at a representation level.
///
/// Properties appear in the order the description declares them; links are
/// appended last, with `.`-relative URIs resolved against the entity's
/// canonical URI.
pub fn to_representation<R: CrudResource>(
    resource: &R,
    entity: &R::Entity,
    representation: Representation,
) -> Result<Value> {
    let description = resource.describe(representation)?;
    let mut object = Map::new();
    for (name, spec) in description.properties() {
        let value = resource.read_property(entity, name, spec.nested)?;
        object.insert(name.to_string(), value);
    }
    if !description.links().is_empty() {
        let self_uri = resource.uri_of(entity);
        let links: Vec<Value> = description
            .links()
            .iter()
            .map(|link| json!({"rel": link.rel, "uri": resolve_link(&link.uri, &self_uri)}))
            .collect();
        object.insert("links".to_string(), Value::Array(links));
    }
    Ok(Value::Object(object))
}

fn resolve_link(uri: &str, self_uri: &str) -> String {
    match uri.strip_prefix('.') {
        Some(rest) => format!("{self_uri}{rest}"),
        None => uri.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn description() -> ResourceDescription {
        let mut description = ResourceDescription::new();
        description
            .add_required_property("identifier")
            .add_required_property("identifierType")
            .add_property("location")
            .add_property("preferred");
        description
    }

    #[test]
    fn test_validate_accepts_complete_payload() {
        let payload = json!({
            "identifier": "100-8",
            "identifierType": {"uuid": "t-1"},
            "preferred": true,
        });
        assert!(validate_payload(&description(), &payload).is_ok());
    }

    #[test]
    fn test_validate_rejects_missing_required() {
        let payload = json!({"identifier": "100-8"});
        let err = validate_payload(&description(), &payload).unwrap_err();
        assert!(
            matches!(err, RestError::MissingRequiredProperty(ref p) if p == "identifierType")
        );
    }

    #[test]
    fn test_validate_treats_null_as_missing() {
        let payload = json!({"identifier": null, "identifierType": {"uuid": "t-1"}});
        let err = validate_payload(&description(), &payload).unwrap_err();
        assert!(matches!(err, RestError::MissingRequiredProperty(ref p) if p == "identifier"));
    }

    #[test]
    fn test_validate_rejects_unknown_property() {
        let payload = json!({
            "identifier": "100-8",
            "identifierType": {"uuid": "t-1"},
            "voided": true,
        });
        let err = validate_payload(&description(), &payload).unwrap_err();
        assert!(matches!(err, RestError::UnknownProperty(ref p) if p == "voided"));
    }

    #[test]
    fn test_validate_rejects_non_object_payload() {
        let err = validate_payload(&description(), &json!("just a string")).unwrap_err();
        assert!(matches!(err, RestError::InvalidPayload));
    }

    #[test]
    fn test_resolve_link_self() {
        assert_eq!(resolve_link(".", "/ws/rest/v1/program/p-1"), "/ws/rest/v1/program/p-1");
    }

    #[test]
    fn test_resolve_link_with_query() {
        assert_eq!(
            resolve_link(".?v=full", "/ws/rest/v1/program/p-1"),
            "/ws/rest/v1/program/p-1?v=full"
        );
    }

    #[test]
    fn test_resolve_link_absolute_passthrough() {
        assert_eq!(
            resolve_link("https://example.org/docs", "/ws/rest/v1/program/p-1"),
            "https://example.org/docs"
        );
    }
}
