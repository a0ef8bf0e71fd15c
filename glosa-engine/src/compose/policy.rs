//! Scope summary policy — when to collapse a selection to a fixed label.
//!
//! The decision is separated from string rendering so the tie-break and
//! threshold rules stay testable on their own. The rules, in order:
//! full-catalog shortcut, per-area shortcuts in fixed priority order,
//! itemized fallback.

use glosa_core::catalog::CatalogSnapshot;
use glosa_core::types::establishment::AreaTag;

use crate::area::AreaIndex;
use crate::scope::ScopeSet;

/// The summary decision for one scope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScopeSummary {
    /// Nothing selected; the summary contributes nothing.
    Empty,
    /// The whole catalog is selected; one fixed label replaces the list.
    FullCatalog,
    /// Exactly and only one full area is selected.
    FullArea(AreaTag),
    /// Resolved establishment names, one per line, in scope insertion
    /// order. Ids missing from the catalog are already dropped here.
    Itemized(Vec<String>),
}

/// Decide how a scope should be summarized.
///
/// `threshold` is the shortcut boundary: shortcuts only apply when the
/// selection is strictly larger. A selection of exactly `threshold` ids
/// is always itemized, even when it equals a full bucket.
///
/// Counts use the scope's raw length, including ids the catalog no
/// longer knows. A stale id therefore blocks the per-area shortcuts
/// (the totals stop matching) and the selection falls back to an
/// itemized list that omits the unresolvable entry.
pub fn summarize(
    scope: &ScopeSet,
    index: &AreaIndex,
    snapshot: &CatalogSnapshot,
    threshold: usize,
) -> ScopeSummary {
    if scope.is_empty() {
        return ScopeSummary::Empty;
    }

    let count = scope.len();

    if count > threshold {
        if count == snapshot.total_active() {
            return ScopeSummary::FullCatalog;
        }

        // Selected ids per area. Stale ids count toward `count` only.
        let mut selected = [0usize; AreaTag::ALL.len()];
        for id in scope {
            if let Some(area) = index.area_of(id) {
                selected[area as usize] += 1;
            }
        }

        // First area that the selection covers exactly and exclusively
        // wins; priority order is fixed by AreaTag::ALL.
        for area in AreaTag::ALL {
            let in_area = selected[area as usize];
            if in_area == index.bucket_len(area) && in_area == count {
                return ScopeSummary::FullArea(area);
            }
        }
    }

    let names: Vec<String> = scope
        .ids()
        .iter()
        .filter_map(|&id| {
            let name = snapshot.name_of(id);
            if name.is_none() {
                tracing::warn!(%id, "scope id not in catalog; omitted from summary");
            }
            name.map(str::to_owned)
        })
        .collect();

    ScopeSummary::Itemized(names)
}
