use std::collections::HashMap;

use serde::Serialize;

use crate::util::text;

use super::MenuEntry;

/// Deduplicated, quantity-annotated shopping list derived from the menu.
#[derive(Debug, Clone, Serialize)]
pub struct GroceryList {
    pub items: Vec<String>,
}

impl GroceryList {
    /// The output artifact: one item per line.
    pub fn to_text(&self) -> String {
        self.items.join("\n")
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// Expand every entry into quantity repetitions of its ingredient list,
// count occurrences case-insensitively, then render "Name" or "Name (N)"
// lines sorted case-insensitively.
pub(super) fn aggregate(entries: &[MenuEntry]) -> GroceryList {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for entry in entries {
        for ingredient in &entry.dish.ingredients {
            *counts.entry(ingredient.to_lowercase()).or_insert(0) += entry.quantity as usize;
        }
    }

    let mut items: Vec<String> = counts
        .into_iter()
        .map(|(name, count)| {
            let display = text::capitalize_first(&name);
            if count > 1 { format!("{} ({})", display, count) } else { display }
        })
        .collect();
    items.sort_by(|a, b| text::locale_cmp(a, b));
    GroceryList { items }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dishes::types::{Category, Dish};
    use crate::menu::WeeklyMenu;

    fn entry(title: &str, ingredients: &[&str], quantity: u32) -> MenuEntry {
        MenuEntry {
            dish: Dish {
                id: title.to_lowercase(),
                title: title.to_string(),
                ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
                category: Category::Main,
            },
            quantity,
        }
    }

    #[test]
    fn quantity_multiplies_every_ingredient() {
        let list = aggregate(&[entry("A", &["Egg", "Milk"], 2)]);
        assert_eq!(list.items, vec!["Egg (2)", "Milk (2)"]);
    }

    #[test]
    fn single_occurrence_has_no_suffix() {
        let list = aggregate(&[entry("A", &["Egg"], 1)]);
        assert_eq!(list.items, vec!["Egg"]);
    }

    #[test]
    fn dedupe_is_case_insensitive_across_dishes() {
        let list = aggregate(&[
            entry("A", &["Onion"], 1),
            entry("B", &["onion"], 1),
        ]);
        assert_eq!(list.items, vec!["Onion (2)"]);
    }

    #[test]
    fn items_are_sorted_case_insensitively() {
        let list = aggregate(&[entry("A", &["zest", "Apple", "milk"], 1)]);
        assert_eq!(list.items, vec!["Apple", "Milk", "Zest"]);
    }

    #[test]
    fn empty_menu_yields_empty_list_and_text() {
        let menu = WeeklyMenu::default();
        let list = menu.grocery_list();
        assert!(list.items.is_empty());
        assert_eq!(list.to_text(), "");
    }

    #[test]
    fn to_text_is_newline_joined() {
        let list = aggregate(&[entry("A", &["Egg", "Milk"], 1)]);
        assert_eq!(list.to_text(), "Egg\nMilk");
    }

    #[test]
    fn counts_accumulate_across_entries_and_quantities() {
        let list = aggregate(&[
            entry("Omelette", &["Egg", "Butter"], 2),
            entry("Cake", &["egg", "Flour"], 1),
        ]);
        assert_eq!(list.items, vec!["Butter (2)", "Egg (3)", "Flour"]);
    }
}
