use serde::{Deserialize, Serialize};

use super::matcher::{MatchResult, RecipeIngredient};

/// Recipe metadata as it arrives from a recipe source, before matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeCandidate {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: String,
    // A recipe without an ingredient list is matched as if it had none.
    #[serde(default)]
    pub ingredients: Vec<RecipeIngredient>,
}

/// A recipe annotated with what the user has and lacks. Field names follow
/// the `findByIngredients` shape the web client already reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedRecipe {
    pub id: i64,
    pub title: String,
    pub image: String,
    pub missed_ingredient_count: usize,
    pub missed_ingredients: Vec<RecipeIngredient>,
    pub used_ingredients: Vec<RecipeIngredient>,
}

pub fn assemble(candidate: RecipeCandidate, matched: MatchResult) -> RankedRecipe {
    RankedRecipe {
        id: candidate.id,
        title: candidate.title,
        image: candidate.image,
        missed_ingredient_count: matched.missed.len(),
        missed_ingredients: matched.missed,
        used_ingredients: matched.used,
    }
}
