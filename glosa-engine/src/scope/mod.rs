//! Selection state for an edit session.

pub mod set;

pub use set::ScopeSet;
