//! Top-level error type for the glosa engine.

use super::error_code::{self, GlosaErrorCode};
use super::CatalogError;

/// Errors surfaced by the engine to its host.
///
/// The taxonomy is deliberately small: the composer and index are total
/// functions, so errors only arise at the catalog boundary and on malformed
/// host input (period strings, config).
#[derive(Debug, thiserror::Error)]
pub enum GlosaError {
    #[error("No catalog snapshot loaded; bulk selection and summaries are unavailable")]
    CatalogNotReady,

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Invalid billing period: {input:?} (expected YYYY-MM or YYYY-MM-DD)")]
    InvalidPeriod { input: String },

    #[error("Config error: {message}")]
    Config { message: String },
}

impl GlosaErrorCode for GlosaError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::CatalogNotReady => error_code::CATALOG_NOT_READY,
            Self::Catalog(inner) => inner.error_code(),
            Self::InvalidPeriod { .. } => error_code::INVALID_PERIOD,
            Self::Config { .. } => error_code::CONFIG_ERROR,
        }
    }
}
