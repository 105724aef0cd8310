use std::cmp::Ordering;

// Case-insensitive total ordering used for dish titles and grocery lines.
// Approximates the sheet UI's locale collation: compare lowercased forms,
// tie-break on the raw string so the order stays deterministic.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

// Uppercase only the first character, leave the rest untouched.
pub fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

// Split a comma-separated ingredient line into trimmed, non-empty items.
pub fn split_ingredients(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_cmp_ignores_case() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Onion", "onion").is_eq(), false);
        // lowercased forms equal, raw comparison breaks the tie
        assert_eq!(locale_cmp("Onion", "onion"), "Onion".cmp("onion"));
    }

    #[test]
    fn locale_cmp_sorts_mixed_case_titles() {
        let mut titles = vec!["pasta", "Apple pie", "zucchini", "Borscht"];
        titles.sort_by(|a, b| locale_cmp(a, b));
        assert_eq!(titles, vec!["Apple pie", "Borscht", "pasta", "zucchini"]);
    }

    #[test]
    fn capitalize_first_basic() {
        assert_eq!(capitalize_first("onion"), "Onion");
        assert_eq!(capitalize_first("olive oil"), "Olive oil");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn capitalize_first_multibyte() {
        assert_eq!(capitalize_first("époisses"), "Époisses");
    }

    #[test]
    fn split_ingredients_trims_and_drops_empties() {
        assert_eq!(
            split_ingredients(" egg , milk,,  flour "),
            vec!["egg", "milk", "flour"]
        );
        assert!(split_ingredients("  ,  ").is_empty());
        assert!(split_ingredients("").is_empty());
    }
}
