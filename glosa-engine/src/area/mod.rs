//! Management-area partition of a catalog snapshot.

pub mod index;

pub use index::AreaIndex;
