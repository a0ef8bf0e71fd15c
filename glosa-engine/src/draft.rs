//! Submission payload for the document-generation boundary.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use glosa_core::types::identifiers::EstablishmentId;

/// What gets submitted when the reception form is saved.
///
/// Wire field names match the backend. `establecimientos` is the source
/// of truth; `descripcion` is the composed string frozen at submission
/// time. The two are not kept in sync if the catalog changes afterwards —
/// that drift is accepted, the stored text is a legal snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceptionDraft {
    /// Final composed description, transmitted verbatim.
    pub descripcion: String,
    /// Selected establishment ids, in scope insertion order.
    pub establecimientos: Vec<EstablishmentId>,
    /// Billing period as a full date, pinned to day 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub periodo: Option<NaiveDate>,
}
