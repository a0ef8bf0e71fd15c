//! Composer configuration.

use serde::{Deserialize, Serialize};

use crate::errors::GlosaError;

/// Configuration for the description composer.
///
/// Every field is optional; `effective_*` accessors apply the defaults the
/// institution's documents were written against. Hosts normally embed this
/// as a `[glosa]` table in their own config file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ComposeConfig {
    /// Selection size above which summary shortcuts may fire. Strictly
    /// greater-than: a selection of exactly this size is always itemized.
    /// Default: 5.
    pub shortcut_threshold: Option<usize>,
    /// Prefix for each summary line. Default: "- ".
    pub bullet_prefix: Option<String>,
}

impl ComposeConfig {
    /// Returns the effective shortcut threshold, defaulting to 5.
    pub fn effective_shortcut_threshold(&self) -> usize {
        self.shortcut_threshold.unwrap_or(5)
    }

    /// Returns the effective bullet prefix, defaulting to "- ".
    pub fn effective_bullet_prefix(&self) -> &str {
        self.bullet_prefix.as_deref().unwrap_or("- ")
    }

    /// Parse from a TOML fragment.
    pub fn from_toml_str(input: &str) -> Result<Self, GlosaError> {
        toml::from_str(input).map_err(|e| GlosaError::Config {
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = ComposeConfig::default();
        assert_eq!(cfg.effective_shortcut_threshold(), 5);
        assert_eq!(cfg.effective_bullet_prefix(), "- ");
    }

    #[test]
    fn test_from_toml_overrides() {
        let cfg = ComposeConfig::from_toml_str("shortcut_threshold = 10\n").unwrap();
        assert_eq!(cfg.effective_shortcut_threshold(), 10);
        assert_eq!(cfg.effective_bullet_prefix(), "- ");
    }

    #[test]
    fn test_from_toml_rejects_garbage() {
        assert!(ComposeConfig::from_toml_str("shortcut_threshold = \"many\"").is_err());
    }
}
