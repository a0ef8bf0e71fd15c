//! Newtype identifiers for catalog entities.
//!
//! Establishment and type ids come from the external catalog service and
//! are opaque to this core. Newtypes keep them from being mixed up.

use serde::{Deserialize, Serialize};

/// Identifier of an establishment (school, kindergarten, office, ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct EstablishmentId(pub u64);

/// Identifier of an establishment type ("Liceo", "Sala Cuna", ...).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct EstablishmentTypeId(pub u64);

impl std::fmt::Display for EstablishmentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for EstablishmentTypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
