use crate::util::text;

use super::types::{normalize, Category, Dish, RawDish};

/// In-memory dish catalog. Populated wholesale from a fetch; a failed
/// load leaves the previous contents in place.
#[derive(Debug, Default)]
pub struct DishCatalog {
    dishes: Vec<Dish>,
}

impl DishCatalog {
    /// Normalize raw records and sort them by title. Rows without a
    /// usable title are dropped; the skipped count is returned alongside.
    pub fn from_raw(raw: Vec<RawDish>) -> (Self, usize) {
        let total = raw.len();
        let mut dishes: Vec<Dish> = raw.into_iter().filter_map(normalize).collect();
        let skipped = total - dishes.len();
        dishes.sort_by(|a, b| text::locale_cmp(&a.title, &b.title));
        (DishCatalog { dishes }, skipped)
    }

    pub fn replace(&mut self, other: DishCatalog) {
        self.dishes = other.dishes;
    }

    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// Category must match exactly (None means any); the query is a
    /// case-insensitive substring on the title, blank matching all.
    /// Order is preserved from the sorted store.
    pub fn filter(&self, category: Option<Category>, query: &str) -> Vec<&Dish> {
        let needle = query.trim().to_lowercase();
        self.dishes
            .iter()
            .filter(|d| category.is_none_or(|c| d.category == c))
            .filter(|d| needle.is_empty() || d.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Case-insensitive title lookup, first match wins.
    pub fn find(&self, title: &str) -> Option<&Dish> {
        let wanted = title.trim().to_lowercase();
        self.dishes.iter().find(|d| d.title.to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_catalog() -> DishCatalog {
        let raw: Vec<RawDish> = serde_json::from_value(json!([
            {"title": "zucchini bake", "ingredients": ["Zucchini"], "category": "side"},
            {"title": "Pasta", "ingredients": ["Penne", "Tomato"], "category": "main"},
            {"title": "apple pie", "ingredients": ["Apple"], "category": "snacks"},
            {"title": "Borscht", "ingredients": ["Beet"], "category": "main"}
        ]))
        .unwrap();
        DishCatalog::from_raw(raw).0
    }

    #[test]
    fn load_sorts_titles_case_insensitively() {
        let catalog = sample_catalog();
        let titles: Vec<&str> = catalog.dishes().iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["apple pie", "Borscht", "Pasta", "zucchini bake"]);
    }

    #[test]
    fn load_counts_skipped_rows() {
        let raw: Vec<RawDish> =
            serde_json::from_value(json!([{"title": "Soup"}, {"title": ""}, {}])).unwrap();
        let (catalog, skipped) = DishCatalog::from_raw(raw);
        assert_eq!(catalog.len(), 1);
        assert_eq!(skipped, 2);
    }

    #[test]
    fn filter_by_category_preserves_sorted_order() {
        let catalog = sample_catalog();
        let mains = catalog.filter(Some(Category::Main), "");
        let titles: Vec<&str> = mains.iter().map(|d| d.title.as_str()).collect();
        assert_eq!(titles, vec!["Borscht", "Pasta"]);
    }

    #[test]
    fn filter_empty_query_matches_all() {
        let catalog = sample_catalog();
        assert_eq!(catalog.filter(None, "").len(), 4);
        assert_eq!(catalog.filter(None, "   ").len(), 4);
    }

    #[test]
    fn filter_query_is_case_insensitive_substring() {
        let catalog = sample_catalog();
        let hits = catalog.filter(None, "PIE");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "apple pie");
        assert!(catalog.filter(Some(Category::Main), "pie").is_empty());
    }

    #[test]
    fn find_matches_title_ignoring_case() {
        let catalog = sample_catalog();
        assert_eq!(catalog.find(" pasta ").unwrap().title, "Pasta");
        assert!(catalog.find("ramen").is_none());
    }

    #[test]
    fn replace_swaps_contents_wholesale() {
        let mut catalog = sample_catalog();
        let raw: Vec<RawDish> = serde_json::from_value(json!([{"title": "Ramen"}])).unwrap();
        catalog.replace(DishCatalog::from_raw(raw).0);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.dishes()[0].title, "Ramen");
    }
}
