use serde::{Deserialize, Serialize};

use super::normalizer::PantrySet;

/// One ingredient line of a recipe as fetched from upstream.
///
/// `name` is the food token used for matching ("flour"), `original` is the
/// line shown to the user ("2 cups flour").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub original: String,
}

impl RecipeIngredient {
    pub fn new(name: impl Into<String>, original: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            original: original.into(),
        }
    }

    /// Ingredient whose display text is its name.
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            original: name.clone(),
            name,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    pub used: Vec<RecipeIngredient>,
    pub missed: Vec<RecipeIngredient>,
}

/// Partitions a recipe's ingredients into the ones the pantry covers and the
/// ones it lacks.
///
/// A recipe ingredient is used when any pantry token is a substring of its
/// lower-cased name. This is plain containment, so "egg" also covers
/// "eggplant". Both output lists keep the recipe's ingredient order.
pub fn match_ingredients(pantry: &PantrySet, ingredients: &[RecipeIngredient]) -> MatchResult {
    let (used, missed) = ingredients
        .iter()
        .cloned()
        .partition(|ingredient| pantry.covers(&ingredient.name));
    MatchResult { used, missed }
}
