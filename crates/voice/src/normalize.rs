//! Canonical string forms used for comparing item names.

/// Plurals the suffix rules get wrong.
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("tomatoes", "tomato"),
    ("potatoes", "potato"),
    ("mangoes", "mango"),
    ("leaves", "leaf"),
    ("knives", "knife"),
    ("loaves", "loaf"),
    ("halves", "half"),
    ("wives", "wife"),
    ("shelves", "shelf"),
    ("bottles", "bottle"),
    ("cookies", "cookie"),
    ("pies", "pie"),
    ("apples", "apple"),
    ("olives", "olive"),
    ("grapes", "grape"),
    ("oranges", "orange"),
    ("noodles", "noodle"),
    ("pickles", "pickle"),
    ("vegetables", "vegetable"),
    ("cheeses", "cheese"),
    ("sauces", "sauce"),
    ("spices", "spice"),
];

/// Lowercase, replace anything outside `[a-z0-9\s]` with a space, collapse
/// whitespace and trim.
pub fn normalize(text: &str) -> String {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Reduce an English plural to its singular form.
///
/// Irregular forms first, then suffix rules in order: `-ies` → `-y`, `-oes` →
/// `-o`, `-es` (not `-ses`) dropped, `-s` (not `-ss`) dropped.
pub fn singularize(word: &str) -> String {
    if let Some((_, singular)) = IRREGULAR_PLURALS.iter().find(|(plural, _)| *plural == word) {
        return (*singular).to_string();
    }

    let len = word.len();
    if len > 3 && word.ends_with("ies") {
        return format!("{}y", &word[..len - 3]);
    }
    if len > 3 && word.ends_with("oes") {
        return word[..len - 2].to_string();
    }
    if len > 3 && word.ends_with("es") && !word.ends_with("ses") {
        return word[..len - 2].to_string();
    }
    if len > 2 && word.ends_with('s') && !word.ends_with("ss") {
        return word[..len - 1].to_string();
    }
    word.to_string()
}

/// [`normalize`] then singularize every token. Idempotent.
pub fn normalize_name(text: &str) -> String {
    normalize(text)
        .split(' ')
        .filter(|t| !t.is_empty())
        .map(singularize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercase the first letter of every whitespace-separated word.
pub fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalize_strips_punctuation_and_case() {
        assert_eq!(normalize("  Olive-Oil,  EXTRA virgin! "), "olive oil extra virgin");
        assert_eq!(normalize("Crème brûlée"), "cr me br l e");
        assert_eq!(normalize("..."), "");
    }

    #[test]
    fn singularize_irregulars() {
        assert_eq!(singularize("tomatoes"), "tomato");
        assert_eq!(singularize("knives"), "knife");
        assert_eq!(singularize("leaves"), "leaf");
    }

    #[test]
    fn singularize_suffix_rules() {
        assert_eq!(singularize("berries"), "berry");
        assert_eq!(singularize("heroes"), "hero");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("onions"), "onion");
        assert_eq!(singularize("eggs"), "egg");
    }

    #[test]
    fn singularize_leaves_non_plurals_alone() {
        assert_eq!(singularize("glass"), "glass");
        assert_eq!(singularize("rice"), "rice");
        assert_eq!(singularize("as"), "as");
    }

    #[test]
    fn normalize_name_singularizes_each_token() {
        assert_eq!(normalize_name("Cherry Tomatoes"), "cherry tomato");
        assert_eq!(normalize_name("bottles of olives"), "bottle of olive");
    }

    #[test]
    fn title_case_capitalizes_words() {
        assert_eq!(title_case("olive oil"), "Olive Oil");
        assert_eq!(title_case("ginger"), "Ginger");
        assert_eq!(title_case(""), "");
    }

    proptest! {
        /// Property: normalizing a normalized name changes nothing.
        #[test]
        fn normalize_name_is_idempotent(text in "[A-Za-z0-9 ,.'-]{0,40}") {
            let once = normalize_name(&text);
            prop_assert_eq!(normalize_name(&once), once);
        }
    }
}
