//! Errors produced by catalog source implementations.

use super::error_code::{self, GlosaErrorCode};

/// Errors from the external establishment catalog collaborator.
///
/// The pure core never constructs these; they cross the boundary when a
/// `CatalogSource` fetch fails or returns unusable data.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog unavailable: {message}")]
    Unavailable { message: String },

    #[error("Catalog data inconsistent: {detail}")]
    Inconsistent { detail: String },
}

impl GlosaErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable { .. } => error_code::CATALOG_UNAVAILABLE,
            Self::Inconsistent { .. } => error_code::CATALOG_INCONSISTENT,
        }
    }
}
