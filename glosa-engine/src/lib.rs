//! # glosa-engine
//!
//! Scope resolution and canonical description ("glosa") engine.
//!
//! Given a catalog snapshot from `glosa-core`, this crate partitions it
//! into management areas, tracks the user's establishment selection, and
//! deterministically renders the legally-quoted description embedded in
//! generated reception documents. Both the contract-reception and the
//! direct-acquisition flows consume this one engine; the composition
//! logic deliberately has a single home.

pub mod area;
pub mod compose;
pub mod draft;
pub mod scope;
pub mod session;

// Re-export the most commonly used types at the crate root.
pub use area::index::AreaIndex;
pub use compose::composer::{compose, GlosaComposer};
pub use compose::period::BillingPeriod;
pub use compose::policy::{summarize, ScopeSummary};
pub use draft::ReceptionDraft;
pub use scope::set::ScopeSet;
pub use session::{BulkAction, EditSession, BULK_ACTIONS};
