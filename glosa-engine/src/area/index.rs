//! Area index — the derived partition backing bulk-select and summaries.

use glosa_core::catalog::CatalogSnapshot;
use glosa_core::types::collections::FxHashMap;
use glosa_core::types::establishment::AreaTag;
use glosa_core::types::identifiers::EstablishmentId;

/// Partition of a catalog snapshot into per-area id buckets.
///
/// Built once per snapshot and immutable for the rest of the edit
/// session. Every active establishment lands in exactly one bucket;
/// bucket vectors preserve catalog order, which is the order bulk-select
/// hands to the scope and therefore the order itemized summaries render
/// in after a bulk action.
#[derive(Debug, Clone)]
pub struct AreaIndex {
    buckets: [Vec<EstablishmentId>; AreaTag::ALL.len()],
    areas: FxHashMap<EstablishmentId, AreaTag>,
    total: usize,
}

impl AreaIndex {
    /// Partition `snapshot` by management area.
    ///
    /// Establishments with unknown or area-less types already resolve to
    /// the default area inside the snapshot, so the partition is total:
    /// no id is skipped and none appears twice.
    pub fn build(snapshot: &CatalogSnapshot) -> Self {
        let mut buckets: [Vec<EstablishmentId>; AreaTag::ALL.len()] =
            std::array::from_fn(|_| Vec::new());
        let mut areas =
            FxHashMap::with_capacity_and_hasher(snapshot.total_active(), Default::default());

        for establishment in snapshot.establishments() {
            let id = establishment.id;
            // area_of is Some for every id present in the snapshot.
            let area = snapshot.area_of(id).unwrap_or_default();
            buckets[area as usize].push(id);
            areas.insert(id, area);
        }

        let total = snapshot.total_active();
        tracing::debug!(
            total,
            school = buckets[AreaTag::School as usize].len(),
            kindergarten = buckets[AreaTag::Kindergarten as usize].len(),
            central_office = buckets[AreaTag::CentralOffice as usize].len(),
            "area index built"
        );

        Self {
            buckets,
            areas,
            total,
        }
    }

    /// Ids belonging to `area`, in catalog order.
    pub fn bucket(&self, area: AreaTag) -> &[EstablishmentId] {
        &self.buckets[area as usize]
    }

    /// Number of establishments in `area`.
    pub fn bucket_len(&self, area: AreaTag) -> usize {
        self.buckets[area as usize].len()
    }

    /// Area of an id, or `None` for ids outside the snapshot.
    pub fn area_of(&self, id: EstablishmentId) -> Option<AreaTag> {
        self.areas.get(&id).copied()
    }

    /// Total establishments across all buckets (== snapshot active count).
    pub fn total(&self) -> usize {
        self.total
    }
}
