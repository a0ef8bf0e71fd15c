//! Edit session — one open reception/acquisition form.
//!
//! A session owns its scope, snapshot, and index exclusively; there is no
//! cross-session sharing. Until a catalog snapshot is attached, every
//! operation that needs one reports `CatalogNotReady` instead of
//! guessing — the host disables the bulk buttons and the preview.

use glosa_core::catalog::{CatalogSnapshot, CatalogSource};
use glosa_core::config::ComposeConfig;
use glosa_core::errors::GlosaError;
use glosa_core::types::establishment::AreaTag;
use glosa_core::types::identifiers::EstablishmentId;

use crate::area::AreaIndex;
use crate::compose::{BillingPeriod, GlosaComposer};
use crate::draft::ReceptionDraft;
use crate::scope::ScopeSet;

/// One of the fixed bulk-selection actions the form exposes.
///
/// The area list is the hardcoded `AreaTag` enumeration, not something
/// derived from the catalog's observed types: an area introduced
/// upstream without a button here is only reachable by toggling
/// establishments one by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulkAction {
    SelectAll,
    Clear,
    Area(AreaTag),
}

impl BulkAction {
    /// Button label for this action.
    pub fn label(self) -> &'static str {
        match self {
            Self::SelectAll => "Todos",
            Self::Clear => "Limpiar",
            Self::Area(area) => area.button_label(),
        }
    }
}

/// Fixed action list, in display order.
pub const BULK_ACTIONS: [BulkAction; 5] = [
    BulkAction::SelectAll,
    BulkAction::Area(AreaTag::School),
    BulkAction::Area(AreaTag::Kindergarten),
    BulkAction::Area(AreaTag::CentralOffice),
    BulkAction::Clear,
];

/// Snapshot plus its derived index, loaded together.
#[derive(Debug, Clone)]
struct LoadedCatalog {
    snapshot: CatalogSnapshot,
    index: AreaIndex,
}

/// State of one open editing context.
///
/// Created when the form opens (empty or seeded from a persisted
/// document) and discarded on close or submit.
#[derive(Debug, Clone)]
pub struct EditSession {
    catalog: Option<LoadedCatalog>,
    scope: ScopeSet,
    base_text: String,
    period: Option<BillingPeriod>,
    composer: GlosaComposer,
}

impl EditSession {
    /// New session with no catalog yet; summary and bulk actions are
    /// unavailable until [`attach_catalog`](Self::attach_catalog) or
    /// [`refresh_from`](Self::refresh_from).
    pub fn new(config: ComposeConfig) -> Self {
        Self {
            catalog: None,
            scope: ScopeSet::new(),
            base_text: String::new(),
            period: None,
            composer: GlosaComposer::new(config),
        }
    }

    /// Fetch the catalog from `source` and open a ready session.
    pub fn open(source: &dyn CatalogSource, config: ComposeConfig) -> Result<Self, GlosaError> {
        let mut session = Self::new(config);
        session.refresh_from(source)?;
        Ok(session)
    }

    /// Open a ready session from a snapshot the host already fetched.
    pub fn with_snapshot(snapshot: CatalogSnapshot, config: ComposeConfig) -> Self {
        let mut session = Self::new(config);
        session.attach_catalog(snapshot);
        session
    }

    /// Attach (or replace) the catalog snapshot and rebuild the index.
    ///
    /// The scope is left untouched: ids the new snapshot no longer knows
    /// stay selected and are simply omitted from rendering.
    pub fn attach_catalog(&mut self, snapshot: CatalogSnapshot) {
        let index = AreaIndex::build(&snapshot);
        self.catalog = Some(LoadedCatalog { snapshot, index });
    }

    /// Re-fetch the catalog through `source`.
    pub fn refresh_from(&mut self, source: &dyn CatalogSource) -> Result<(), GlosaError> {
        let snapshot = CatalogSnapshot::fetch(source)?;
        self.attach_catalog(snapshot);
        Ok(())
    }

    pub fn is_ready(&self) -> bool {
        self.catalog.is_some()
    }

    fn loaded(&self) -> Result<&LoadedCatalog, GlosaError> {
        self.catalog.as_ref().ok_or(GlosaError::CatalogNotReady)
    }

    /// Seed the scope from a persisted document's id array.
    ///
    /// No catalog check: a document may legitimately reference ids the
    /// current catalog lacks, and they must survive to `draft()` even
    /// though the summary omits them.
    pub fn seed_scope(&mut self, ids: impl IntoIterator<Item = EstablishmentId>) {
        self.scope = ScopeSet::from_ids(ids);
    }

    /// Toggle one establishment. Ids outside the catalog are ignored, so
    /// user action never grows the scope beyond the snapshot. The one
    /// exception: an id already in the scope (seeded from a persisted
    /// document) can always be toggled off.
    pub fn toggle(&mut self, id: EstablishmentId) -> Result<(), GlosaError> {
        let loaded = self.catalog.as_ref().ok_or(GlosaError::CatalogNotReady)?;
        if loaded.snapshot.contains(id) || self.scope.contains(id) {
            self.scope.toggle(id);
        }
        Ok(())
    }

    /// Run one of the fixed bulk actions.
    pub fn apply(&mut self, action: BulkAction) -> Result<(), GlosaError> {
        match action {
            BulkAction::Clear => {
                self.scope.clear();
                Ok(())
            }
            BulkAction::SelectAll => self.select_all(),
            BulkAction::Area(area) => self.select_area(area),
        }
    }

    /// Replace the scope with the full bucket for `area`.
    pub fn select_area(&mut self, area: AreaTag) -> Result<(), GlosaError> {
        let loaded = self.catalog.as_ref().ok_or(GlosaError::CatalogNotReady)?;
        self.scope.select_area(&loaded.index, area);
        Ok(())
    }

    /// Replace the scope with every active id, as of the snapshot.
    pub fn select_all(&mut self) -> Result<(), GlosaError> {
        let loaded = self.catalog.as_ref().ok_or(GlosaError::CatalogNotReady)?;
        self.scope.select_all(&loaded.snapshot);
        Ok(())
    }

    pub fn clear_scope(&mut self) {
        self.scope.clear();
    }

    pub fn set_base_text(&mut self, base: impl Into<String>) {
        self.base_text = base.into();
    }

    pub fn set_period(&mut self, period: BillingPeriod) {
        self.period = Some(period);
    }

    pub fn clear_period(&mut self) {
        self.period = None;
    }

    pub fn scope(&self) -> &ScopeSet {
        &self.scope
    }

    pub fn snapshot(&self) -> Option<&CatalogSnapshot> {
        self.catalog.as_ref().map(|loaded| &loaded.snapshot)
    }

    pub fn area_index(&self) -> Option<&AreaIndex> {
        self.catalog.as_ref().map(|loaded| &loaded.index)
    }

    /// Recompute the full description. Hosts call this on every change;
    /// the same string is later submitted unchanged.
    pub fn preview(&self) -> Result<String, GlosaError> {
        let loaded = self.loaded()?;
        Ok(self.composer.compose(
            &self.base_text,
            self.period.as_ref(),
            &self.scope,
            &loaded.index,
            &loaded.snapshot,
        ))
    }

    /// Build the submission payload: the composed description verbatim
    /// plus the raw id list.
    pub fn draft(&self) -> Result<ReceptionDraft, GlosaError> {
        let descripcion = self.preview()?;
        Ok(ReceptionDraft {
            descripcion,
            establecimientos: self.scope.to_vec(),
            periodo: self.period.map(|p| p.to_submission_date()),
        })
    }
}
