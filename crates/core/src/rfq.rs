//! Pure RFQ helpers: subject synthesis and company grouping.

/// Group label for contacts with no company.
pub const NO_COMPANY: &str = "(No Company)";

/// Subject synthesized for RFQs created in bulk for a project.
pub fn default_subject(project_name: &str) -> String {
    format!("RFQ: {project_name}")
}

/// Group items by their associated contact's company.
///
/// Returns `(label, items)` groups sorted alphabetically
/// (case-insensitive), with the [`NO_COMPANY`] fallback group always last
/// regardless of alphabetical order. Item order within a group follows
/// input order.
pub fn group_by_company<T>(items: Vec<(Option<String>, T)>) -> Vec<(String, Vec<T>)> {
    let mut groups: Vec<(String, Vec<T>)> = Vec::new();
    for (company, item) in items {
        let label = match company {
            Some(c) if !c.trim().is_empty() => c,
            _ => NO_COMPANY.to_string(),
        };
        match groups.iter_mut().find(|(l, _)| *l == label) {
            Some((_, bucket)) => bucket.push(item),
            None => groups.push((label, vec![item])),
        }
    }
    groups.sort_by(|(a, _), (b, _)| {
        let a_fallback = a == NO_COMPANY;
        let b_fallback = b == NO_COMPANY;
        a_fallback
            .cmp(&b_fallback)
            .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
    });
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_prefixes_project_name() {
        assert_eq!(default_subject("Cedar Creek Bridge"), "RFQ: Cedar Creek Bridge");
    }

    #[test]
    fn groups_sort_alphabetically_with_fallback_last() {
        let groups = group_by_company(vec![
            (None, "B"),
            (Some("Zulu Corp".into()), "Z"),
            (Some("Acme".into()), "A"),
        ]);
        let labels: Vec<&str> = groups.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["Acme", "Zulu Corp", NO_COMPANY]);
    }

    #[test]
    fn fallback_last_even_against_late_alphabet() {
        // "(No Company)" would sort first by punctuation; it must still land last.
        let groups = group_by_company(vec![
            (Some("Acme".into()), 1),
            (None, 2),
        ]);
        assert_eq!(groups[0].0, "Acme");
        assert_eq!(groups[1].0, NO_COMPANY);
    }

    #[test]
    fn blank_company_joins_fallback_group() {
        let groups = group_by_company(vec![
            (Some("  ".into()), 1),
            (None, 2),
        ]);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, NO_COMPANY);
        assert_eq!(groups[0].1, vec![1, 2]);
    }

    #[test]
    fn items_keep_input_order_within_group() {
        let groups = group_by_company(vec![
            (Some("Acme".into()), 1),
            (Some("Acme".into()), 2),
        ]);
        assert_eq!(groups[0].1, vec![1, 2]);
    }
}
