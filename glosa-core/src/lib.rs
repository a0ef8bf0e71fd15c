//! # glosa-core
//!
//! Foundation crate for the glosa scope/description engine.
//! Defines the catalog types, identifiers, errors, config, and tracing
//! setup shared by the rest of the workspace.

pub mod catalog;
pub mod config;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use catalog::{CatalogSnapshot, CatalogSource};
pub use config::ComposeConfig;
pub use errors::error_code::GlosaErrorCode;
pub use errors::{CatalogError, GlosaError};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::establishment::{AreaTag, Establishment, EstablishmentType, FULL_CATALOG_LABEL};
pub use types::identifiers::{EstablishmentId, EstablishmentTypeId};
