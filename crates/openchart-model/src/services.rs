//! Service-layer contracts the resource adapters delegate to.
//!
//! Persistence, transactions and consistency are owned by implementations of
//! these traits; the resource layer is a stateless per-request translator on
//! top of them. Implementations must be thread-safe (`Send + Sync`).

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::metadata::{Concept, IdentifierType, Location};
use crate::patient::{Patient, PatientIdentifier};
use crate::program::Program;

/// Persistence operations for patients, their identifiers, and identifier
/// types.
///
/// Lookups return `None` for a missing record; errors are reserved for
/// infrastructure failures.
#[async_trait]
pub trait PatientService: Send + Sync {
    /// Reads a patient aggregate by uuid.
    async fn get_patient(&self, uuid: &str) -> Result<Option<Patient>, ServiceError>;

    /// Persists a patient aggregate, identifier collection included.
    async fn save_patient(&self, patient: &Patient) -> Result<Patient, ServiceError>;

    /// Reads a single identifier record by uuid, whichever patient owns it.
    async fn get_identifier_by_uuid(
        &self,
        uuid: &str,
    ) -> Result<Option<PatientIdentifier>, ServiceError>;

    /// Persists one identifier record within its owning patient's
    /// collection.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError::Backend` if the identifier names no owning
    /// patient or the patient does not exist.
    async fn save_identifier(
        &self,
        identifier: &PatientIdentifier,
    ) -> Result<PatientIdentifier, ServiceError>;

    /// Soft-deletes an identifier: flags it voided with the given reason and
    /// persists it. The record stays retrievable.
    async fn void_identifier(
        &self,
        identifier: &PatientIdentifier,
        reason: &str,
    ) -> Result<PatientIdentifier, ServiceError>;

    /// Resolves an identifier type by uuid.
    async fn get_identifier_type_by_uuid(
        &self,
        uuid: &str,
    ) -> Result<Option<IdentifierType>, ServiceError>;

    /// Resolves an identifier type by its unique name.
    async fn get_identifier_type_by_name(
        &self,
        name: &str,
    ) -> Result<Option<IdentifierType>, ServiceError>;
}

/// Lookup service for locations.
#[async_trait]
pub trait LocationService: Send + Sync {
    async fn get_by_uuid(&self, uuid: &str) -> Result<Option<Location>, ServiceError>;
}

/// Lookup service for concepts.
#[async_trait]
pub trait ConceptService: Send + Sync {
    async fn get_by_uuid(&self, uuid: &str) -> Result<Option<Concept>, ServiceError>;
}

/// Persistence operations for programs.
#[async_trait]
pub trait ProgramService: Send + Sync {
    /// Reads a program by uuid.
    async fn get_by_uuid(&self, uuid: &str) -> Result<Option<Program>, ServiceError>;

    /// Reads a program by its exact name.
    async fn get_by_name(&self, name: &str) -> Result<Option<Program>, ServiceError>;

    /// Persists a program, creating or replacing by uuid.
    async fn save(&self, program: &Program) -> Result<Program, ServiceError>;

    /// Retires a program with the given reason and persists it. Retired
    /// programs stay retrievable.
    async fn retire(&self, program: &Program, reason: &str) -> Result<Program, ServiceError>;

    /// Removes a program permanently.
    async fn purge(&self, program: &Program) -> Result<(), ServiceError>;

    /// Lists programs in name order, optionally including retired ones.
    async fn get_all(&self, include_retired: bool) -> Result<Vec<Program>, ServiceError>;

    /// Case-insensitive name search, in name order.
    async fn search(&self, query: &str) -> Result<Vec<Program>, ServiceError>;
}
