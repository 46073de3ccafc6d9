//! Capability traits every resource adapter implements.
//!
//! A resource instance is constructed once with the services it needs and
//! its descriptor tables; after that it is read-only and safe to share
//! across requests. An entity moves through NEW (fresh from `new_entity`),
//! PERSISTED (after `save`), and finally VOIDED or PURGED.

use async_trait::async_trait;
use serde_json::Value;

use openchart_core::{
    Page, Representation, RequestContext, ResourceDescription, RestError, Result, SearchOutcome,
};

/// The contract between one domain entity type and its wire representation.
///
/// Read-path methods are pure lookups into descriptor tables built at
/// construction; write-path and lifecycle methods delegate to the injected
/// services. Operations an entity type does not implement keep the default
/// bodies and surface `OperationNotSupported` — fatal to that call, not to
/// the process.
#[async_trait]
pub trait CrudResource: Send + Sync {
    type Entity: Send + Sync;

    /// Resource name used in URIs and error messages.
    fn name(&self) -> &'static str;

    /// The ordered property set serialized at `representation`.
    ///
    /// # Errors
    ///
    /// Returns `RestError::UnsupportedRepresentation` for a level this
    /// resource does not describe — never an empty description, so the
    /// dispatcher can tell "unsupported" from "nothing to show".
    fn describe(&self, representation: Representation) -> Result<&ResourceDescription>;

    /// Properties accepted when creating an entity, tagged required/optional.
    fn creatable_properties(&self) -> &ResourceDescription;

    /// Properties accepted when updating an entity.
    ///
    /// Defaults to the creatable set: update accepts exactly what create
    /// accepts, required flags included. Note this lets an update change
    /// relation properties (identifier type, concept) that a stricter
    /// contract might only allow at create time.
    fn updatable_properties(&self) -> &ResourceDescription {
        self.creatable_properties()
    }

    /// A blank NEW entity, not yet persisted.
    fn new_entity(&self) -> Self::Entity;

    /// Human-readable display text, synthesized rather than stored.
    fn display(&self, entity: &Self::Entity) -> String;

    /// Canonical URI of the entity; `.`-relative link URIs resolve against
    /// it.
    fn uri_of(&self, entity: &Self::Entity) -> String;

    /// Reads one described property. Relation-valued properties serialize
    /// the related entity at `nested`.
    fn read_property(
        &self,
        entity: &Self::Entity,
        name: &str,
        nested: Option<Representation>,
    ) -> Result<Value>;

    /// Applies one payload property through this resource's setter hook.
    ///
    /// Relation references supplied as partially-populated literals (uuid
    /// and/or name only) are resolved against the authoritative service;
    /// caller-supplied nested fields are never written as-is. An optional
    /// relation that resolves to nothing leaves the current value unchanged.
    async fn apply_property(
        &self,
        entity: &mut Self::Entity,
        name: &str,
        value: &Value,
    ) -> Result<()>;

    /// Fetches the entity by its unique identifier, `None` when absent.
    async fn get_by_unique_id(&self, unique_id: &str) -> Result<Option<Self::Entity>>;

    /// Persists the entity; NEW becomes PERSISTED.
    async fn save(&self, entity: Self::Entity) -> Result<Self::Entity>;

    /// Soft delete: flags the entity with a reason, keeping it retrievable.
    async fn void(&self, _entity: Self::Entity, _reason: &str) -> Result<Self::Entity> {
        Err(RestError::operation_not_supported(self.name(), "void"))
    }

    /// Hard removal.
    async fn purge(&self, _entity: Self::Entity) -> Result<()> {
        Err(RestError::operation_not_supported(self.name(), "purge"))
    }

    /// All entities of this type, serialized at the context's
    /// representation and paged.
    async fn get_all(&self, _context: &RequestContext) -> Result<Page<Value>> {
        Err(RestError::operation_not_supported(self.name(), "get_all"))
    }

    /// Free-text search. With no `q` in the context the outcome is
    /// `NotSearched`; resources without a search path keep this default.
    async fn search(&self, _context: &RequestContext) -> Result<SearchOutcome<Value>> {
        Err(RestError::operation_not_supported(self.name(), "search"))
    }
}

/// A resource whose entities live inside a parent aggregate.
#[async_trait]
pub trait SubResource: CrudResource {
    type Parent: Send + Sync;

    /// Uuid of the owning parent, if the entity is attached to one.
    fn parent_uuid_of(&self, entity: &Self::Entity) -> Option<String>;

    /// Attaches the entity to a parent before it is first saved.
    fn set_parent(&self, entity: &mut Self::Entity, parent: &Self::Parent);

    /// Fetches the parent aggregate.
    ///
    /// # Errors
    ///
    /// Returns `RestError::NotFound` when no parent has that uuid.
    async fn get_parent(&self, parent_uuid: &str) -> Result<Self::Parent>;

    /// The parent's active (non-voided) children, serialized at the
    /// context's representation and paged.
    async fn list_children(
        &self,
        parent: &Self::Parent,
        context: &RequestContext,
    ) -> Result<Page<Value>>;
}
