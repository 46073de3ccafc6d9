//! Representation-driven resource adapters.
//!
//! Each resource maps one domain entity to its wire representation: it
//! declares which properties appear at each representation level, which
//! properties a write payload may carry, and delegates persistence to the
//! service layer. The generic operations in [`adapter`] drive any resource
//! through the same create/retrieve/update/void/purge lifecycle.

pub mod adapter;
pub mod convert;
pub mod identifier;
pub mod program;
pub mod resource;

pub use adapter::{
    create, create_child, purge_by_id, retrieve, to_representation, update, validate_payload,
    void_by_id,
};
pub use identifier::PatientIdentifierResource;
pub use program::ProgramResource;
pub use resource::{CrudResource, SubResource};
