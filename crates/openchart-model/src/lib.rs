pub mod audit;
pub mod error;
pub mod metadata;
pub mod patient;
pub mod program;
pub mod services;

pub use audit::AuditInfo;
pub use error::{ServiceError, ServiceResult};
pub use metadata::{Concept, IdentifierType, Location};
pub use patient::{Patient, PatientIdentifier};
pub use program::{Program, ProgramWorkflow};
pub use services::{ConceptService, LocationService, PatientService, ProgramService};
