//! Glosa composer — renders the final document description.
//!
//! One shared composer serves both the contract-reception and the
//! direct-acquisition flows; the rendered string is simultaneously the
//! live preview and the value submitted verbatim to the document
//! boundary, so composition must be a pure function of its inputs.

use glosa_core::catalog::CatalogSnapshot;
use glosa_core::config::ComposeConfig;
use glosa_core::types::establishment::FULL_CATALOG_LABEL;

use crate::area::AreaIndex;
use crate::scope::ScopeSet;

use super::period::BillingPeriod;
use super::policy::{summarize, ScopeSummary};

/// Compose the final description string.
///
/// Layout: `base` + (` - MONTH YEAR` when a period is present) + the
/// scope summary suffix. The suffix, when non-empty, starts on a new
/// line; each label or name carries the bullet prefix. An empty scope
/// (or one whose every id fails to resolve) adds nothing — no trailing
/// separator, no blank bullet.
pub fn compose(
    base: &str,
    period: Option<&BillingPeriod>,
    scope: &ScopeSet,
    index: &AreaIndex,
    snapshot: &CatalogSnapshot,
    config: &ComposeConfig,
) -> String {
    let bullet = config.effective_bullet_prefix();
    let mut out = String::from(base);

    if let Some(period) = period {
        out.push_str(" - ");
        out.push_str(&period.label());
    }

    match summarize(scope, index, snapshot, config.effective_shortcut_threshold()) {
        ScopeSummary::Empty => {}
        ScopeSummary::FullCatalog => {
            out.push('\n');
            out.push_str(bullet);
            out.push_str(FULL_CATALOG_LABEL);
        }
        ScopeSummary::FullArea(area) => {
            out.push('\n');
            out.push_str(bullet);
            out.push_str(area.summary_label());
        }
        ScopeSummary::Itemized(names) => {
            for name in &names {
                out.push('\n');
                out.push_str(bullet);
                out.push_str(name);
            }
        }
    }

    out
}

/// Composer bound to one configuration.
///
/// Thin wrapper over [`compose`] for callers that hold a config for the
/// lifetime of an edit session.
#[derive(Debug, Clone, Default)]
pub struct GlosaComposer {
    config: ComposeConfig,
}

impl GlosaComposer {
    pub fn new(config: ComposeConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ComposeConfig {
        &self.config
    }

    /// See [`compose`].
    pub fn compose(
        &self,
        base: &str,
        period: Option<&BillingPeriod>,
        scope: &ScopeSet,
        index: &AreaIndex,
        snapshot: &CatalogSnapshot,
    ) -> String {
        compose(base, period, scope, index, snapshot, &self.config)
    }
}
