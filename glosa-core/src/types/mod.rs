//! Shared type definitions: identifiers, collections, catalog records.

pub mod collections;
pub mod establishment;
pub mod identifiers;
