//! Catalog records and the management-area enumeration.
//!
//! `AreaTag` is a closed enum with a per-variant data table (wire code,
//! labels, priority). Adding an area means adding a variant and a table
//! row, not new branching logic elsewhere.

use serde::{Deserialize, Serialize};

use super::identifiers::{EstablishmentId, EstablishmentTypeId};

/// An establishment as delivered by the catalog service. Read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Establishment {
    pub id: EstablishmentId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub type_id: EstablishmentTypeId,
    #[serde(rename = "activo", default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

/// An establishment type ("Liceo", "Sala Cuna", ...) with its management
/// area. A type with no declared area falls back to the default area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstablishmentType {
    pub id: EstablishmentTypeId,
    #[serde(
        rename = "area_gestion",
        default,
        with = "area_wire",
        skip_serializing_if = "Option::is_none"
    )]
    pub area: Option<AreaTag>,
}

/// Management area — the coarse grouping used for bulk selection and for
/// collapsing long establishment lists into canonical phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AreaTag {
    /// Schools and liceos. The default when a type declares no area.
    #[default]
    School,
    /// VTF kindergartens.
    Kindergarten,
    /// Central administrative office.
    CentralOffice,
}

/// Static per-area data: wire code, fixed legal summary label, bulk-select
/// button label. Row order is the shortcut priority order.
struct AreaRow {
    tag: AreaTag,
    wire_code: &'static str,
    summary_label: &'static str,
    button_label: &'static str,
}

const AREA_TABLE: &[AreaRow] = &[
    AreaRow {
        tag: AreaTag::School,
        wire_code: "ESTABLECIMIENTO",
        summary_label: "TOTALIDAD DE ESTABLECIMIENTOS (ESCUELAS/LICEOS)",
        button_label: "Establecimientos",
    },
    AreaRow {
        tag: AreaTag::Kindergarten,
        wire_code: "JARDIN",
        summary_label: "TOTALIDAD DE JARDINES INFANTILES VTF",
        button_label: "Jardines VTF",
    },
    AreaRow {
        tag: AreaTag::CentralOffice,
        wire_code: "OFICINA",
        summary_label: "OFICINA CENTRAL ADM.",
        button_label: "Oficina Central",
    },
];

/// Fixed label emitted when the whole catalog is selected. Not tied to
/// any single area.
pub const FULL_CATALOG_LABEL: &str = "TOTALIDAD DE ESTABLECIMIENTOS";

impl AreaTag {
    /// All areas in shortcut priority order (school first, then
    /// kindergarten, then central office). The order is load-bearing:
    /// the composer's per-area shortcut takes the first exact match.
    pub const ALL: [AreaTag; 3] = [AreaTag::School, AreaTag::Kindergarten, AreaTag::CentralOffice];

    fn row(self) -> &'static AreaRow {
        // AREA_TABLE covers every variant; the positions match ALL.
        &AREA_TABLE[self as usize]
    }

    /// Catalog wire code (`area_gestion` value) for this area.
    pub fn wire_code(self) -> &'static str {
        self.row().wire_code
    }

    /// Fixed legal text used when a selection collapses to this full area.
    pub fn summary_label(self) -> &'static str {
        self.row().summary_label
    }

    /// Label for the bulk-select button of this area.
    pub fn button_label(self) -> &'static str {
        self.row().button_label
    }

    /// Resolve a catalog wire code. Unknown codes map to the default area
    /// so every establishment stays representable in the summary.
    pub fn from_wire_code(code: &str) -> AreaTag {
        AREA_TABLE
            .iter()
            .find(|row| row.wire_code == code)
            .map(|row| row.tag)
            .unwrap_or_default()
    }
}

mod area_wire {
    //! Serde bridge between `Option<AreaTag>` and the catalog's string
    //! `area_gestion` field (absent/empty means "no declared area").

    use serde::{Deserialize, Deserializer, Serializer};

    use super::AreaTag;

    pub fn serialize<S: Serializer>(area: &Option<AreaTag>, ser: S) -> Result<S::Ok, S::Error> {
        match area {
            Some(tag) => ser.serialize_str(tag.wire_code()),
            None => ser.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(de: D) -> Result<Option<AreaTag>, D::Error> {
        let raw: Option<String> = Option::deserialize(de)?;
        Ok(raw
            .filter(|code| !code.is_empty())
            .map(|code| AreaTag::from_wire_code(&code)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_every_variant_in_priority_order() {
        assert_eq!(AREA_TABLE.len(), AreaTag::ALL.len());
        for (i, tag) in AreaTag::ALL.iter().enumerate() {
            assert_eq!(AREA_TABLE[i].tag, *tag);
            assert_eq!(*tag as usize, i);
        }
    }

    #[test]
    fn test_priority_order_is_school_kindergarten_office() {
        assert_eq!(
            AreaTag::ALL,
            [AreaTag::School, AreaTag::Kindergarten, AreaTag::CentralOffice]
        );
    }

    #[test]
    fn test_unknown_wire_code_falls_back_to_school() {
        assert_eq!(AreaTag::from_wire_code("BODEGA"), AreaTag::School);
        assert_eq!(AreaTag::from_wire_code("JARDIN"), AreaTag::Kindergarten);
    }

    #[test]
    fn test_type_deserializes_wire_area() {
        let t: EstablishmentType =
            serde_json::from_str(r#"{"id": 3, "area_gestion": "OFICINA"}"#).unwrap();
        assert_eq!(t.area, Some(AreaTag::CentralOffice));

        let bare: EstablishmentType = serde_json::from_str(r#"{"id": 4}"#).unwrap();
        assert_eq!(bare.area, None);
    }

    #[test]
    fn test_establishment_defaults_to_active() {
        let e: Establishment =
            serde_json::from_str(r#"{"id": 1, "nombre": "Liceo A-1", "tipo": 3}"#).unwrap();
        assert!(e.active);
    }
}
