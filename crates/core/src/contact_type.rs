//! Contact role types and the loose-input synonym mapping used by the
//! spreadsheet importer.

use serde::{Deserialize, Serialize};

/// Role of a contact in the estimating workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContactType {
    Subcontractor,
    Supplier,
    GeneralContractor,
    Owner,
    Architect,
    Other,
}

impl ContactType {
    /// Return the type name as stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Subcontractor => "SUBCONTRACTOR",
            Self::Supplier => "SUPPLIER",
            Self::GeneralContractor => "GENERAL_CONTRACTOR",
            Self::Owner => "OWNER",
            Self::Architect => "ARCHITECT",
            Self::Other => "OTHER",
        }
    }

    /// Parse a stored type string. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "SUBCONTRACTOR" => Some(Self::Subcontractor),
            "SUPPLIER" => Some(Self::Supplier),
            "GENERAL_CONTRACTOR" => Some(Self::GeneralContractor),
            "OWNER" => Some(Self::Owner),
            "ARCHITECT" => Some(Self::Architect),
            "OTHER" => Some(Self::Other),
            _ => None,
        }
    }

    /// Human-readable label for display grouping.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Subcontractor => "Subcontractor",
            Self::Supplier => "Supplier",
            Self::GeneralContractor => "General Contractor",
            Self::Owner => "Owner",
            Self::Architect => "Architect",
            Self::Other => "Other",
        }
    }

    /// All types in display order (subcontractors first, Other last).
    pub const ALL: &'static [ContactType] = &[
        Self::Subcontractor,
        Self::Supplier,
        Self::GeneralContractor,
        Self::Owner,
        Self::Architect,
        Self::Other,
    ];

    /// Map a loosely-formatted cell value to a canonical type.
    ///
    /// The input is trimmed, lowercased, and stripped of whitespace, hyphen,
    /// and underscore runs before matching against the synonym table.
    /// Absent or unrecognized values map to [`ContactType::Other`] without
    /// error.
    pub fn from_loose(raw: &str) -> Self {
        match normalize_token(raw).as_str() {
            "subcontractor" | "sub" | "subcon" => Self::Subcontractor,
            "supplier" | "supply" | "vendor" => Self::Supplier,
            "generalcontractor" | "gc" => Self::GeneralContractor,
            "owner" => Self::Owner,
            "architect" => Self::Architect,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for ContactType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercase, trim, and remove whitespace/hyphen/underscore runs.
///
/// Shared by the type synonym table above and the header synonym table in
/// [`crate::import`].
pub(crate) fn normalize_token(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        for t in ContactType::ALL {
            assert_eq!(ContactType::from_str(t.as_str()), Some(*t));
        }
    }

    #[test]
    fn unknown_stored_value_returns_none() {
        assert!(ContactType::from_str("VENDOR").is_none());
        assert!(ContactType::from_str("subcontractor").is_none());
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(format!("{}", ContactType::GeneralContractor), "GENERAL_CONTRACTOR");
    }

    #[test]
    fn loose_subcontractor_synonyms() {
        for raw in ["Subcontractor", "sub", "SUBCON", " Sub-Contractor "] {
            assert_eq!(ContactType::from_loose(raw), ContactType::Subcontractor, "raw: {raw}");
        }
    }

    #[test]
    fn loose_supplier_synonyms() {
        for raw in ["supplier", "Supply", "vendor"] {
            assert_eq!(ContactType::from_loose(raw), ContactType::Supplier, "raw: {raw}");
        }
    }

    #[test]
    fn loose_gc_synonyms() {
        assert_eq!(ContactType::from_loose("GC"), ContactType::GeneralContractor);
        assert_eq!(
            ContactType::from_loose("General Contractor"),
            ContactType::GeneralContractor
        );
        assert_eq!(
            ContactType::from_loose("general_contractor"),
            ContactType::GeneralContractor
        );
    }

    #[test]
    fn loose_unrecognized_degrades_to_other() {
        assert_eq!(ContactType::from_loose(""), ContactType::Other);
        assert_eq!(ContactType::from_loose("plumber"), ContactType::Other);
    }

    #[test]
    fn normalize_collapses_separators() {
        assert_eq!(normalize_token("  Sub-Con_tractor  "), "subcontractor");
        assert_eq!(normalize_token("E-MAIL"), "email");
    }
}
