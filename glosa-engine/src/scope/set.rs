//! Scope set — the establishments a document declares it covers.

use glosa_core::catalog::CatalogSnapshot;
use glosa_core::types::collections::FxHashSet;
use glosa_core::types::establishment::AreaTag;
use glosa_core::types::identifiers::EstablishmentId;

use crate::area::AreaIndex;

/// Insertion-ordered set of establishment ids.
///
/// Membership gives set semantics; the insertion order is kept because
/// itemized summaries render in the order the user picked (or the order
/// a persisted document stored). Two scopes compare equal on membership
/// alone.
#[derive(Debug, Clone, Default)]
pub struct ScopeSet {
    order: Vec<EstablishmentId>,
    members: FxHashSet<EstablishmentId>,
}

impl ScopeSet {
    /// Empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an id sequence, keeping the first occurrence of each id.
    ///
    /// This is how a scope is pre-seeded from a persisted document's
    /// `establecimientos` array when editing an existing reception.
    pub fn from_ids(ids: impl IntoIterator<Item = EstablishmentId>) -> Self {
        let mut scope = Self::new();
        for id in ids {
            if scope.members.insert(id) {
                scope.order.push(id);
            }
        }
        scope
    }

    /// Flip membership of `id` — symmetric difference with a singleton.
    /// Removal keeps the relative order of the remaining ids.
    pub fn toggle(&mut self, id: EstablishmentId) {
        if self.members.remove(&id) {
            self.order.retain(|&other| other != id);
        } else {
            self.members.insert(id);
            self.order.push(id);
        }
    }

    /// Replace the selection with exactly the bucket for `area`.
    ///
    /// Replace, not union: the bulk buttons act as resets, so any prior
    /// manual picks are discarded.
    pub fn select_area(&mut self, index: &AreaIndex, area: AreaTag) {
        self.replace_with(index.bucket(area).iter().copied());
    }

    /// Replace the selection with every active id in the snapshot.
    ///
    /// A snapshot of the catalog at call time, not a live view; later
    /// catalog changes do not grow the scope.
    pub fn select_all(&mut self, snapshot: &CatalogSnapshot) {
        self.replace_with(snapshot.all_active_ids());
    }

    /// Empty the selection.
    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, id: EstablishmentId) -> bool {
        self.members.contains(&id)
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> &[EstablishmentId] {
        &self.order
    }

    /// Owned id array in insertion order, for the submission payload.
    pub fn to_vec(&self) -> Vec<EstablishmentId> {
        self.order.clone()
    }

    fn replace_with(&mut self, ids: impl IntoIterator<Item = EstablishmentId>) {
        self.clear();
        for id in ids {
            if self.members.insert(id) {
                self.order.push(id);
            }
        }
    }
}

impl PartialEq for ScopeSet {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for ScopeSet {}

impl<'a> IntoIterator for &'a ScopeSet {
    type Item = EstablishmentId;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, EstablishmentId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u64) -> EstablishmentId {
        EstablishmentId(n)
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut scope = ScopeSet::new();
        scope.toggle(id(1));
        assert!(scope.contains(id(1)));
        scope.toggle(id(1));
        assert!(scope.is_empty());
    }

    #[test]
    fn test_insertion_order_survives_removal() {
        let mut scope = ScopeSet::from_ids([id(3), id(1), id(2)]);
        scope.toggle(id(1));
        assert_eq!(scope.ids(), &[id(3), id(2)]);
    }

    #[test]
    fn test_from_ids_dedups_keeping_first() {
        let scope = ScopeSet::from_ids([id(2), id(1), id(2), id(1)]);
        assert_eq!(scope.ids(), &[id(2), id(1)]);
    }

    #[test]
    fn test_equality_ignores_order() {
        let a = ScopeSet::from_ids([id(1), id(2), id(3)]);
        let b = ScopeSet::from_ids([id(3), id(1), id(2)]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_clear_empties() {
        let mut scope = ScopeSet::from_ids([id(1), id(2)]);
        scope.clear();
        assert!(scope.is_empty());
        assert_eq!(scope.len(), 0);
    }
}
