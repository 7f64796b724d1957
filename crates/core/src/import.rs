//! Contact import reconciliation planner.
//!
//! This module has zero external dependencies (no DB, no async, no I/O).
//! Given loosely-formatted spreadsheet rows and the caller's existing
//! contacts, it:
//!
//! - Normalizes raw column headers against a fixed synonym table
//! - Normalizes the enumerated `type` column (see [`ContactType::from_loose`])
//! - Matches rows against existing contacts by a case-insensitive
//!   `name::email` composite key
//! - Partitions rows into create / update / skip sets with per-row error
//!   strings and collision warnings
//!
//! Applying the plan (bulk create, individual updates) is the storage
//! layer's job; the planner only classifies.

use std::collections::HashMap;

use serde::Serialize;

use crate::contact_type::{normalize_token, ContactType};
use crate::types::DbId;

/// A raw spreadsheet row: ordered `(header, cell)` pairs as parsed by the
/// caller. Cell values arrive untrimmed; headers arrive in arbitrary case,
/// spacing, and punctuation.
pub type RawRow = Vec<(String, String)>;

/// Canonical contact fields a column header can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Company,
    Email,
    Phone,
    Type,
    SubCategory,
    Location,
    Notes,
}

/// Normalize a raw header and match it against the synonym table.
///
/// Headers matching no synonym set are dropped: their column contributes
/// nothing to any field.
pub fn map_header(raw: &str) -> Option<Field> {
    match normalize_token(raw).as_str() {
        "name" | "contactname" | "fullname" => Some(Field::Name),
        "company" | "organization" | "organisation" | "firm" => Some(Field::Company),
        "email" | "emailaddress" => Some(Field::Email),
        "phone" | "phonenumber" | "cell" | "mobile" | "telephone" => Some(Field::Phone),
        "type" | "contacttype" | "category" => Some(Field::Type),
        "subcategory" | "subcat" => Some(Field::SubCategory),
        "location" | "city" | "region" | "area" => Some(Field::Location),
        "notes" | "note" | "comments" | "comment" => Some(Field::Notes),
        _ => None,
    }
}

/// Case-insensitive composite matching key: `name::email`, with the empty
/// string substituted for a missing email.
///
/// Two contacts that share a name and both lack an email collapse onto the
/// same key; the planner surfaces a warning when that happens (last write
/// wins).
pub fn match_key(name: &str, email: Option<&str>) -> String {
    format!(
        "{}::{}",
        name.to_lowercase(),
        email.unwrap_or("").to_lowercase()
    )
}

/// The identity slice of an existing contact needed for matching.
#[derive(Debug, Clone)]
pub struct ExistingContact {
    pub id: DbId,
    pub name: String,
    pub email: Option<String>,
}

/// Parsed contact payload produced from one accepted row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub company: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub contact_type: ContactType,
    pub sub_category: Option<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
}

/// Classified outcome of a row batch, ready to be applied to storage.
#[derive(Debug, Default)]
pub struct ImportPlan {
    /// Rows with no matching existing contact, in file order.
    pub to_create: Vec<ContactFields>,
    /// Rows matching an existing contact, with the matched id.
    pub to_update: Vec<(DbId, ContactFields)>,
    /// Per-row skip messages (currently only missing-name rows).
    pub errors: Vec<String>,
    /// Non-fatal match-key collision notices.
    pub warnings: Vec<String>,
}

/// Final result reported to the caller after the plan is applied.
///
/// `created` reflects the count the storage layer reports as actually
/// inserted, not the number of rows the planner intended to create.
#[derive(Debug, Serialize)]
pub struct ImportSummary {
    pub created: u64,
    pub updated: u64,
    pub skipped: u64,
    pub errors: Vec<String>,
}

/// Classify `rows` against `existing` contacts.
///
/// Rows are processed in file order. Row numbers in messages are the
/// spreadsheet row (data index + 2, accounting for 1-indexing plus the
/// header row). A row with an empty name is skipped and recorded; no error
/// aborts the batch.
pub fn build_plan(rows: &[RawRow], existing: &[ExistingContact]) -> ImportPlan {
    let mut plan = ImportPlan::default();

    // The header mapping is computed once from the first row and applied
    // uniformly to every row.
    let header_map: Vec<(&str, Field)> = match rows.first() {
        Some(first) => first
            .iter()
            .filter_map(|(raw, _)| map_header(raw).map(|f| (raw.as_str(), f)))
            .collect(),
        None => return plan,
    };

    // One O(existing) pass builds the lookup; matching is then O(1) per row.
    let mut existing_map: HashMap<String, DbId> = HashMap::with_capacity(existing.len());
    for contact in existing {
        let key = match_key(&contact.name, contact.email.as_deref());
        if existing_map.insert(key, contact.id).is_some() && contact.email.is_none() {
            plan.warnings.push(format!(
                "Existing contacts named \"{}\" with no email share a matching key; \
                 updates apply to the most recent one.",
                contact.name
            ));
        }
    }

    let mut seen_rows: HashMap<String, usize> = HashMap::new();

    for (i, row) in rows.iter().enumerate() {
        let row_num = i + 2;

        let mut rec: HashMap<Field, String> = HashMap::new();
        for (raw_key, field) in &header_map {
            let value = row
                .iter()
                .find(|(k, _)| k == raw_key)
                .map(|(_, v)| v.trim().to_string())
                .unwrap_or_default();
            rec.insert(*field, value);
        }

        let name = rec.get(&Field::Name).cloned().unwrap_or_default();
        if name.is_empty() {
            plan.errors.push(format!("Row {row_num}: skipped — no name."));
            continue;
        }

        let non_empty = |f: Field| rec.get(&f).filter(|v| !v.is_empty()).cloned();
        let fields = ContactFields {
            company: non_empty(Field::Company),
            email: non_empty(Field::Email),
            phone: non_empty(Field::Phone),
            contact_type: ContactType::from_loose(rec.get(&Field::Type).map_or("", |v| v)),
            sub_category: non_empty(Field::SubCategory),
            location: non_empty(Field::Location),
            notes: non_empty(Field::Notes),
            name,
        };

        let key = match_key(&fields.name, fields.email.as_deref());
        if let Some(prev) = seen_rows.insert(key.clone(), row_num) {
            plan.warnings.push(format!(
                "Row {row_num}: same matching key as row {prev} (\"{}\"); last write wins.",
                fields.name
            ));
        }

        match existing_map.get(&key) {
            Some(id) => plan.to_update.push((*id, fields)),
            None => plan.to_create.push(fields),
        }
    }

    plan
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    // -- map_header tests -----------------------------------------------------

    #[test]
    fn header_synonyms_resolve() {
        assert_eq!(map_header("Name"), Some(Field::Name));
        assert_eq!(map_header("Contact Name"), Some(Field::Name));
        assert_eq!(map_header("full_name"), Some(Field::Name));
        assert_eq!(map_header("E-Mail"), Some(Field::Email));
        assert_eq!(map_header("Email Address"), Some(Field::Email));
        assert_eq!(map_header("Sub-Category"), Some(Field::SubCategory));
        assert_eq!(map_header("SUBCAT"), Some(Field::SubCategory));
        assert_eq!(map_header("Organisation"), Some(Field::Company));
        assert_eq!(map_header("City"), Some(Field::Location));
        assert_eq!(map_header("Comments"), Some(Field::Notes));
    }

    #[test]
    fn unknown_header_is_dropped() {
        assert_eq!(map_header("Org"), None);
        assert_eq!(map_header("Fax"), None);
        assert_eq!(map_header(""), None);
    }

    // -- match_key tests ------------------------------------------------------

    #[test]
    fn key_is_case_insensitive() {
        assert_eq!(
            match_key("Jane Doe", Some("Jane@Y.com")),
            match_key("jane doe", Some("jane@y.com"))
        );
    }

    #[test]
    fn missing_email_becomes_empty_suffix() {
        assert_eq!(match_key("Jane", None), "jane::");
    }

    // -- build_plan classification --------------------------------------------

    #[test]
    fn sub_category_header_maps_value() {
        let rows = vec![row(&[("Name", "Jane"), ("Sub-Category", "Rebar")])];
        let plan = build_plan(&rows, &[]);
        assert_eq!(plan.to_create.len(), 1);
        assert_eq!(plan.to_create[0].sub_category.as_deref(), Some("Rebar"));
    }

    #[test]
    fn unmapped_column_value_is_dropped() {
        let rows = vec![row(&[("Name", "Jane"), ("Org", "Acme")])];
        let plan = build_plan(&rows, &[]);
        assert_eq!(plan.to_create[0].company, None);
        assert_eq!(plan.to_create[0].notes, None);
    }

    #[test]
    fn loose_type_and_empty_email_normalize() {
        let rows = vec![row(&[("Name", "Jane Doe"), ("Type", "sub"), ("Email", "")])];
        let plan = build_plan(&rows, &[]);
        let c = &plan.to_create[0];
        assert_eq!(c.contact_type, ContactType::Subcontractor);
        assert_eq!(c.email, None);
        assert_eq!(c.company, None);
    }

    #[test]
    fn missing_name_skips_row_with_message() {
        let rows = vec![row(&[("Name", ""), ("Email", "x@y.com")])];
        let plan = build_plan(&rows, &[]);
        assert!(plan.to_create.is_empty());
        assert!(plan.to_update.is_empty());
        assert_eq!(plan.errors, vec!["Row 2: skipped — no name."]);
    }

    #[test]
    fn row_numbers_offset_for_header_row() {
        let rows = vec![
            row(&[("Name", "Jane")]),
            row(&[("Name", "")]),
            row(&[("Name", "")]),
        ];
        let plan = build_plan(&rows, &[]);
        assert_eq!(
            plan.errors,
            vec!["Row 3: skipped — no name.", "Row 4: skipped — no name."]
        );
    }

    #[test]
    fn matching_row_becomes_update() {
        let existing = vec![ExistingContact {
            id: 7,
            name: "Jane Doe".into(),
            email: Some("j@y.com".into()),
        }];
        let rows = vec![row(&[("Name", "jane doe"), ("Email", "J@Y.COM"), ("Phone", "555")])];
        let plan = build_plan(&rows, &existing);
        assert!(plan.to_create.is_empty());
        assert_eq!(plan.to_update.len(), 1);
        assert_eq!(plan.to_update[0].0, 7);
        assert_eq!(plan.to_update[0].1.phone.as_deref(), Some("555"));
    }

    #[test]
    fn same_name_different_email_stays_distinct() {
        let existing = vec![ExistingContact {
            id: 1,
            name: "Jane Doe".into(),
            email: Some("a@x.com".into()),
        }];
        let rows = vec![row(&[("Name", "Jane Doe"), ("Email", "b@x.com")])];
        let plan = build_plan(&rows, &existing);
        assert_eq!(plan.to_create.len(), 1);
        assert!(plan.to_update.is_empty());
    }

    #[test]
    fn no_email_name_collision_in_existing_warns() {
        let existing = vec![
            ExistingContact { id: 1, name: "Jane".into(), email: None },
            ExistingContact { id: 2, name: "Jane".into(), email: None },
        ];
        let rows = vec![row(&[("Name", "Jane")])];
        let plan = build_plan(&rows, &existing);
        assert_eq!(plan.warnings.len(), 1);
        // Last write wins in the lookup.
        assert_eq!(plan.to_update[0].0, 2);
    }

    #[test]
    fn duplicate_incoming_rows_warn() {
        let rows = vec![
            row(&[("Name", "Jane"), ("Email", "j@y.com")]),
            row(&[("Name", "Jane"), ("Email", "j@y.com")]),
        ];
        let plan = build_plan(&rows, &[]);
        assert_eq!(plan.to_create.len(), 2);
        assert_eq!(plan.warnings.len(), 1);
        assert!(plan.warnings[0].starts_with("Row 3:"));
    }

    #[test]
    fn header_mapping_comes_from_first_row_only() {
        // The second row carries an extra column absent from the first row's
        // header set; it must be ignored.
        let rows = vec![
            row(&[("Name", "Jane")]),
            row(&[("Name", "Bob"), ("Company", "Acme")]),
        ];
        let plan = build_plan(&rows, &[]);
        assert_eq!(plan.to_create.len(), 2);
        assert_eq!(plan.to_create[1].company, None);
    }

    #[test]
    fn empty_rows_produce_empty_plan() {
        let plan = build_plan(&[], &[]);
        assert!(plan.to_create.is_empty());
        assert!(plan.to_update.is_empty());
        assert!(plan.errors.is_empty());
    }
}
