use serde::Serialize;

/// Trims surrounding whitespace and lower-cases an ingredient name.
///
/// Never fails. An all-whitespace input yields an empty string, which
/// [`PantrySet`] drops before matching.
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// The user's normalized ingredient tokens.
///
/// Every token is non-empty and lower-case, and appears once, in the order it
/// was first supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PantrySet {
    tokens: Vec<String>,
}

impl PantrySet {
    pub fn from_raw<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::default();
        set.extend(raw);
        set
    }

    /// Adds more raw tokens, e.g. ingredients detected in a photo.
    pub fn extend<I, S>(&mut self, raw: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for item in raw {
            let token = normalize(item.as_ref());
            if token.is_empty() || self.tokens.contains(&token) {
                continue;
            }
            self.tokens.push(token);
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when any token is contained in `recipe_ingredient_name`.
    pub fn covers(&self, recipe_ingredient_name: &str) -> bool {
        let haystack = recipe_ingredient_name.to_lowercase();
        self.tokens.iter().any(|token| haystack.contains(token.as_str()))
    }
}

/// Splits the comma separated text returned by the vision service into
/// ingredient tokens. Empty pieces are dropped.
pub fn split_ingredient_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(normalize)
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  Chicken Breast \t"), "chicken breast");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        for raw in ["  Egg", "RICE ", "crème FRAÎCHE", "", "already fine"] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn pantry_drops_empty_and_duplicate_tokens() {
        let pantry = PantrySet::from_raw(["Chicken", " ", "rice", "CHICKEN ", ""]);
        assert_eq!(pantry.tokens(), &["chicken".to_string(), "rice".to_string()]);
    }

    #[test]
    fn vision_text_split() {
        assert_eq!(
            split_ingredient_list("chicken, rice,, tomato"),
            vec!["chicken", "rice", "tomato"]
        );
        assert!(split_ingredient_list("").is_empty());
        assert!(split_ingredient_list(" , ,").is_empty());
    }
}
