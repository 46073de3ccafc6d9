pub mod config;
pub mod context;
pub mod description;
pub mod error;
pub mod id;
pub mod representation;

pub use config::RestConfig;
pub use context::{Page, RequestContext, SearchOutcome};
pub use description::{Link, PropertySpec, ResourceDescription};
pub use error::{RestError, Result};
pub use id::generate_uuid;
pub use representation::Representation;
