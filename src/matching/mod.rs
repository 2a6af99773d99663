//! Pantry matching: normalize the user's ingredients, split every recipe into
//! used and missed ingredients, and rank recipes by how little is missing.
//!
//! Everything here is synchronous and free of I/O. Callers that fetch recipes
//! concurrently must hand them over in request order, since ranking ties are
//! broken by input position.

pub mod assembler;
pub mod matcher;
pub mod normalizer;
pub mod ranker;

pub use assembler::{assemble, RankedRecipe, RecipeCandidate};
pub use matcher::{match_ingredients, MatchResult, RecipeIngredient};
pub use normalizer::{normalize, split_ingredient_list, PantrySet};
pub use ranker::rank;

/// Runs every candidate through the matcher and assembler, then ranks them.
pub fn match_and_rank(pantry: &PantrySet, candidates: Vec<RecipeCandidate>) -> Vec<RankedRecipe> {
    let assembled = candidates
        .into_iter()
        .map(|candidate| {
            let matched = match_ingredients(pantry, &candidate.ingredients);
            assemble(candidate, matched)
        })
        .collect();
    rank(assembled)
}
