//! Catalog source trait and the immutable per-session snapshot.
//!
//! The establishment catalog is owned by an external service; this core
//! only reads it. A host fetches once per edit session (or on explicit
//! refresh) and hands the result over as a `CatalogSnapshot`. Until a
//! snapshot exists the engine refuses to compute rather than guessing.

use std::sync::Arc;

use crate::errors::CatalogError;
use crate::types::collections::FxHashMap;
use crate::types::establishment::{AreaTag, Establishment, EstablishmentType};
use crate::types::identifiers::{EstablishmentId, EstablishmentTypeId};

/// Read-only contract with the establishment catalog collaborator.
///
/// Implementations may do I/O; everything downstream of the snapshot is
/// pure. Object-safe, `Send + Sync`, with an `Arc` blanket impl.
pub trait CatalogSource: Send + Sync {
    /// Active establishments, in the catalog's canonical order.
    fn list_active_establishments(&self) -> Result<Vec<Establishment>, CatalogError>;

    /// All establishment types with their management areas.
    fn list_types(&self) -> Result<Vec<EstablishmentType>, CatalogError>;
}

impl<T: CatalogSource + ?Sized> CatalogSource for Arc<T> {
    fn list_active_establishments(&self) -> Result<Vec<Establishment>, CatalogError> {
        (**self).list_active_establishments()
    }
    fn list_types(&self) -> Result<Vec<EstablishmentType>, CatalogError> {
        (**self).list_types()
    }
}

/// Immutable view of the catalog taken at one point in time.
///
/// Holds active establishments in catalog order plus the lookup tables the
/// engine needs. Rebuilt whenever the host refreshes the catalog; treated
/// as frozen for the duration of an edit session.
#[derive(Debug, Clone)]
pub struct CatalogSnapshot {
    establishments: Vec<Establishment>,
    by_id: FxHashMap<EstablishmentId, usize>,
    type_areas: FxHashMap<EstablishmentTypeId, AreaTag>,
}

impl CatalogSnapshot {
    /// Build a snapshot from raw catalog listings.
    ///
    /// Inactive establishments are dropped here. An establishment whose
    /// type is unknown, or whose type declares no area, resolves to the
    /// default area; the summary must stay complete even when the catalog
    /// data is not (see `area_of`).
    pub fn build(establishments: Vec<Establishment>, types: &[EstablishmentType]) -> Self {
        let type_areas: FxHashMap<EstablishmentTypeId, AreaTag> = types
            .iter()
            .map(|t| (t.id, t.area.unwrap_or_default()))
            .collect();

        let establishments: Vec<Establishment> =
            establishments.into_iter().filter(|e| e.active).collect();

        let by_id = establishments
            .iter()
            .enumerate()
            .map(|(idx, e)| (e.id, idx))
            .collect();

        tracing::debug!(
            active = establishments.len(),
            types = type_areas.len(),
            "catalog snapshot built"
        );

        Self {
            establishments,
            by_id,
            type_areas,
        }
    }

    /// Fetch from a source and build in one step.
    pub fn fetch(source: &dyn CatalogSource) -> Result<Self, CatalogError> {
        let establishments = source.list_active_establishments()?;
        let types = source.list_types()?;
        Ok(Self::build(establishments, &types))
    }

    /// Number of active establishments.
    pub fn total_active(&self) -> usize {
        self.establishments.len()
    }

    /// All active ids, in catalog order.
    pub fn all_active_ids(&self) -> Vec<EstablishmentId> {
        self.establishments.iter().map(|e| e.id).collect()
    }

    /// Active establishments, in catalog order.
    pub fn establishments(&self) -> &[Establishment] {
        &self.establishments
    }

    pub fn contains(&self, id: EstablishmentId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Display name for an id, or `None` if it is not in this snapshot
    /// (e.g. a stale id seeded from a previously persisted document).
    pub fn name_of(&self, id: EstablishmentId) -> Option<&str> {
        self.by_id
            .get(&id)
            .map(|&idx| self.establishments[idx].name.as_str())
    }

    /// Management area for an id. Unknown ids return `None`; unknown or
    /// area-less types fall back to the default area, with a warning so
    /// data-quality gaps stay observable without blocking generation.
    pub fn area_of(&self, id: EstablishmentId) -> Option<AreaTag> {
        let &idx = self.by_id.get(&id)?;
        let type_id = self.establishments[idx].type_id;
        match self.type_areas.get(&type_id) {
            Some(&area) => Some(area),
            None => {
                tracing::warn!(%id, %type_id, "establishment references unknown type; using default area");
                Some(AreaTag::default())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn est(id: u64, name: &str, type_id: u64, active: bool) -> Establishment {
        Establishment {
            id: EstablishmentId(id),
            name: name.to_string(),
            type_id: EstablishmentTypeId(type_id),
            active,
        }
    }

    fn ty(id: u64, area: Option<AreaTag>) -> EstablishmentType {
        EstablishmentType {
            id: EstablishmentTypeId(id),
            area,
        }
    }

    #[test]
    fn test_inactive_establishments_are_dropped() {
        let snap = CatalogSnapshot::build(
            vec![est(1, "Liceo A", 1, true), est(2, "Escuela B", 1, false)],
            &[ty(1, Some(AreaTag::School))],
        );
        assert_eq!(snap.total_active(), 1);
        assert!(snap.contains(EstablishmentId(1)));
        assert!(!snap.contains(EstablishmentId(2)));
    }

    #[test]
    fn test_all_active_ids_preserve_catalog_order() {
        let snap = CatalogSnapshot::build(
            vec![
                est(7, "C", 1, true),
                est(3, "A", 1, true),
                est(5, "B", 1, true),
            ],
            &[ty(1, Some(AreaTag::School))],
        );
        assert_eq!(
            snap.all_active_ids(),
            vec![EstablishmentId(7), EstablishmentId(3), EstablishmentId(5)]
        );
    }

    #[test]
    fn test_unknown_type_falls_back_to_default_area() {
        let snap = CatalogSnapshot::build(vec![est(1, "Anexo", 99, true)], &[]);
        assert_eq!(snap.area_of(EstablishmentId(1)), Some(AreaTag::School));
    }

    #[test]
    fn test_typeless_area_falls_back_to_default_area() {
        let snap = CatalogSnapshot::build(vec![est(1, "Anexo", 4, true)], &[ty(4, None)]);
        assert_eq!(snap.area_of(EstablishmentId(1)), Some(AreaTag::School));
    }

    #[test]
    fn test_unknown_id_has_no_name_or_area() {
        let snap = CatalogSnapshot::build(vec![], &[]);
        assert_eq!(snap.name_of(EstablishmentId(42)), None);
        assert_eq!(snap.area_of(EstablishmentId(42)), None);
    }
}
