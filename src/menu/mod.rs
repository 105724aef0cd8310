use crate::dishes::types::Dish;

mod grocery;

pub use grocery::GroceryList;

#[derive(Debug, Clone)]
pub struct MenuEntry {
    pub dish: Dish,
    pub quantity: u32,
}

/// The weekly menu: an ordered list of (dish, quantity) entries, one per
/// distinct title, insertion order preserved. Lives only for the run.
#[derive(Debug, Default)]
pub struct WeeklyMenu {
    entries: Vec<MenuEntry>,
}

impl WeeklyMenu {
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Menu identity is exact title equality: a repeated add bumps the
    /// existing entry's quantity instead of appending a duplicate.
    pub fn add_or_increment(&mut self, dish: &Dish) {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.dish.title == dish.title) {
            entry.quantity += 1;
        } else {
            self.entries.push(MenuEntry { dish: dish.clone(), quantity: 1 });
        }
    }

    /// Step a quantity by delta, clamped at a floor of 1. Out-of-range
    /// indices are ignored.
    pub fn adjust_quantity(&mut self, index: usize, delta: i32) {
        let Some(entry) = self.entries.get_mut(index) else { return };
        let adjusted = i64::from(entry.quantity) + i64::from(delta);
        entry.quantity = adjusted.max(1) as u32;
    }

    /// In-place delete preserving the order of the remaining entries.
    /// Out-of-range indices are ignored rather than panicking.
    pub fn remove(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }

    pub fn grocery_list(&self) -> GroceryList {
        grocery::aggregate(&self.entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dishes::types::Category;

    fn dish(title: &str, ingredients: &[&str]) -> Dish {
        Dish {
            id: title.to_lowercase(),
            title: title.to_string(),
            ingredients: ingredients.iter().map(|s| s.to_string()).collect(),
            category: Category::Main,
        }
    }

    #[test]
    fn add_same_title_twice_yields_one_entry_quantity_two() {
        let mut menu = WeeklyMenu::default();
        let d = dish("Pasta", &["Penne"]);
        menu.add_or_increment(&d);
        menu.add_or_increment(&d);
        assert_eq!(menu.len(), 1);
        assert_eq!(menu.entries()[0].quantity, 2);
    }

    #[test]
    fn same_title_merges_even_when_ingredients_differ() {
        // title is the identity key; the first-added ingredient set wins
        let mut menu = WeeklyMenu::default();
        menu.add_or_increment(&dish("Soup", &["Leek"]));
        menu.add_or_increment(&dish("Soup", &["Miso"]));
        assert_eq!(menu.len(), 1);
        assert_eq!(menu.entries()[0].quantity, 2);
        assert_eq!(menu.entries()[0].dish.ingredients, vec!["Leek"]);
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut menu = WeeklyMenu::default();
        menu.add_or_increment(&dish("Soup", &[]));
        menu.add_or_increment(&dish("Pasta", &[]));
        menu.add_or_increment(&dish("Soup", &[]));
        let titles: Vec<&str> = menu.entries().iter().map(|e| e.dish.title.as_str()).collect();
        assert_eq!(titles, vec!["Soup", "Pasta"]);
    }

    #[test]
    fn decrement_never_drops_below_one() {
        let mut menu = WeeklyMenu::default();
        menu.add_or_increment(&dish("Soup", &[]));
        menu.adjust_quantity(0, -1);
        assert_eq!(menu.entries()[0].quantity, 1);
        menu.adjust_quantity(0, 1);
        menu.adjust_quantity(0, 1);
        menu.adjust_quantity(0, -1);
        assert_eq!(menu.entries()[0].quantity, 2);
    }

    #[test]
    fn adjust_out_of_range_is_a_no_op() {
        let mut menu = WeeklyMenu::default();
        menu.add_or_increment(&dish("Soup", &[]));
        menu.adjust_quantity(5, 1);
        assert_eq!(menu.entries()[0].quantity, 1);
    }

    #[test]
    fn remove_deletes_in_place_keeping_order() {
        let mut menu = WeeklyMenu::default();
        menu.add_or_increment(&dish("Soup", &[]));
        menu.add_or_increment(&dish("Pasta", &[]));
        menu.add_or_increment(&dish("Toast", &[]));
        menu.remove(1);
        let titles: Vec<&str> = menu.entries().iter().map(|e| e.dish.title.as_str()).collect();
        assert_eq!(titles, vec!["Soup", "Toast"]);
    }

    #[test]
    fn remove_out_of_range_is_a_no_op() {
        let mut menu = WeeklyMenu::default();
        menu.add_or_increment(&dish("Soup", &[]));
        menu.add_or_increment(&dish("Pasta", &[]));
        menu.add_or_increment(&dish("Toast", &[]));
        menu.remove(5);
        assert_eq!(menu.len(), 3);
    }
}
