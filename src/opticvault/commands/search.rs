use crate::model::Item;

/// Items whose brand, model or notes contain `query`, ignoring case.
///
/// An empty query matches everything. Order is preserved.
pub fn filter_items(items: &[Item], query: &str) -> Vec<Item> {
    if query.is_empty() {
        return items.to_vec();
    }
    let needle = query.to_lowercase();
    items
        .iter()
        .filter(|item| matches(item, &needle))
        .cloned()
        .collect()
}

fn matches(item: &Item, needle: &str) -> bool {
    [&item.brand, &item.model, &item.notes]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ItemDraft;

    fn items() -> Vec<Item> {
        vec![
            ItemDraft::new("Oakley", "Holbrook")
                .notes("Polarized lenses")
                .into_item("1".into())
                .unwrap(),
            ItemDraft::new("Ray-Ban", "Wayfarer")
                .notes("Limited edition")
                .into_item("2".into())
                .unwrap(),
            ItemDraft::new("Persol", "PO0649")
                .into_item("3".into())
                .unwrap(),
        ]
    }

    #[test]
    fn matches_notes_case_insensitively() {
        let found = filter_items(&items(), "limited");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "2");
    }

    #[test]
    fn matches_any_field() {
        let ids = |q: &str| -> Vec<String> {
            filter_items(&items(), q).into_iter().map(|i| i.id).collect()
        };
        assert_eq!(ids("OAK"), vec!["1"]);
        assert_eq!(ids("wayf"), vec!["2"]);
        assert_eq!(ids("po"), vec!["1", "3"]);
        assert!(ids("zeiss").is_empty());
    }

    #[test]
    fn empty_query_is_identity() {
        assert_eq!(filter_items(&items(), ""), items());
    }

    #[test]
    fn whitespace_query_is_a_literal_match() {
        // " " matches items with a space in any field, like a typed search would.
        let found = filter_items(&items(), " ");
        assert_eq!(found.len(), 2);
    }
}
