//! In-memory service implementations.
//!
//! These back the resource-layer tests and small demos; they keep whole
//! aggregates in `RwLock`'d maps and implement the same contracts a real
//! persistence layer would.

pub mod metadata;
pub mod patient;
pub mod program;

pub use metadata::{InMemoryConceptService, InMemoryLocationService};
pub use patient::InMemoryPatientService;
pub use program::InMemoryProgramService;
