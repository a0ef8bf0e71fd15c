//! Error types for the glosa workspace.

pub mod catalog_error;
pub mod error_code;
pub mod glosa_error;

pub use catalog_error::CatalogError;
pub use glosa_error::GlosaError;
