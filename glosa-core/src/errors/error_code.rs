//! Stable error codes.
//!
//! Hosts embedding this core (HTTP handlers, UI bridges) match on these
//! codes rather than on error message text, which is free to change.

/// Maps every error to a stable, machine-readable code.
pub trait GlosaErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const CATALOG_UNAVAILABLE: &str = "GLOSA_CATALOG_UNAVAILABLE";
pub const CATALOG_INCONSISTENT: &str = "GLOSA_CATALOG_INCONSISTENT";
pub const CATALOG_NOT_READY: &str = "GLOSA_CATALOG_NOT_READY";
pub const INVALID_PERIOD: &str = "GLOSA_INVALID_PERIOD";
pub const CONFIG_ERROR: &str = "GLOSA_CONFIG_ERROR";
