//! Catalog index built once from the page's service cards, with the
//! title search used by both the search button and the suggestion dropdown.

use crate::models::catalog::{CatalogEntry, ServiceCard};

#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    entries: Vec<CatalogEntry>,
}

impl CatalogIndex {
    /// Index the cards in page order.
    pub fn build_index(cards: &[ServiceCard]) -> Self {
        let entries = cards
            .iter()
            .map(|card| CatalogEntry {
                title: card.title.clone(),
                key: card.key.clone(),
                details: card.details.clone(),
                image_urls: split_image_list(&card.images),
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose title contains `query`, ignoring case.
    /// An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&CatalogEntry> {
        let Some(needle) = normalize(query) else {
            return Vec::new();
        };
        self.entries
            .iter()
            .filter(|e| title_matches(&e.title, &needle))
            .collect()
    }

    /// One emphasis flag per entry, in page order.
    pub fn highlight(&self, query: &str) -> Vec<bool> {
        let needle = normalize(query);
        self.entries
            .iter()
            .map(|e| needle.as_deref().is_some_and(|n| title_matches(&e.title, n)))
            .collect()
    }

    /// Titles to offer in the dropdown while typing.
    pub fn suggestions(&self, query: &str) -> Vec<String> {
        self.search(query).into_iter().map(|e| e.title.clone()).collect()
    }
}

fn normalize(query: &str) -> Option<String> {
    if query.is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}

fn title_matches(title: &str, needle: &str) -> bool {
    title.to_lowercase().contains(needle)
}

fn split_image_list(images: &str) -> Vec<String> {
    images
        .split(',')
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(title: &str, key: &str) -> ServiceCard {
        ServiceCard {
            title: title.to_string(),
            key: key.to_string(),
            details: format!("{} details", title),
            images: String::new(),
        }
    }

    fn sample_index() -> CatalogIndex {
        CatalogIndex::build_index(&[
            card("Custom Shirt Tailoring", "shirt"),
            card("Evening Dress", "dress"),
            card("Pant Alterations", "pant"),
        ])
    }

    #[test]
    fn empty_query_matches_nothing() {
        let index = sample_index();
        assert!(index.search("").is_empty());
        assert!(index.suggestions("").is_empty());
        assert_eq!(index.highlight(""), vec![false, false, false]);
    }

    #[test]
    fn shirt_highlights_only_shirt_card() {
        let index = sample_index();
        assert_eq!(index.highlight("shirt"), vec![true, false, false]);
        let hits = index.search("shirt");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].key, "shirt");
    }

    #[test]
    fn search_ignores_case() {
        let index = sample_index();
        assert_eq!(index.suggestions("EVENING"), vec!["Evening Dress".to_string()]);
        assert_eq!(index.suggestions("dReSs"), vec!["Evening Dress".to_string()]);
    }

    #[test]
    fn substring_can_match_several_titles() {
        let index = sample_index();
        assert_eq!(
            index.suggestions("t"),
            vec![
                "Custom Shirt Tailoring".to_string(),
                "Pant Alterations".to_string()
            ]
        );
    }

    #[test]
    fn highlight_is_idempotent() {
        let index = sample_index();
        let first = index.highlight("dress");
        let second = index.highlight("dress");
        assert_eq!(first, second);
    }

    #[test]
    fn no_match_yields_no_suggestions() {
        let index = sample_index();
        assert!(index.suggestions("kimono").is_empty());
        assert_eq!(index.highlight("kimono"), vec![false, false, false]);
    }

    #[test]
    fn image_list_is_split_and_trimmed() {
        let mut c = card("Evening Dress", "dress");
        c.images = "img/a.jpg, img/b.jpg,,img/c.jpg ".to_string();
        let index = CatalogIndex::build_index(&[c]);
        assert_eq!(
            index.get(0).unwrap().image_urls,
            vec!["img/a.jpg", "img/b.jpg", "img/c.jpg"]
        );
    }

    #[test]
    fn get_out_of_range_is_none() {
        assert!(sample_index().get(3).is_none());
        assert_eq!(sample_index().len(), 3);
    }
}
