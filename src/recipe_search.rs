use std::sync::Arc;

use tracing::{info, warn};

use crate::api_connection::connection::ApiConnectionError;
use crate::api_connection::RecipeSource;
use crate::fallback::fallback_recipes;
use crate::matching::{match_and_rank, PantrySet, RankedRecipe};

/// Where the ranked recipes came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultOrigin {
    Upstream,
    Fallback,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub recipes: Vec<RankedRecipe>,
    pub origin: ResultOrigin,
}

/// Glue between a [`RecipeSource`] and the matching pipeline.
#[derive(Clone)]
pub struct RecipeSearch {
    source: Arc<dyn RecipeSource>,
}

impl RecipeSearch {
    pub fn new(source: Arc<dyn RecipeSource>) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &Arc<dyn RecipeSource> {
        &self.source
    }

    /// Fetches candidates for `pantry` and ranks them. A spent quota swaps in
    /// the canned recipes; every other upstream failure is returned.
    pub async fn search(&self, pantry: &PantrySet) -> Result<SearchOutcome, ApiConnectionError> {
        let (candidates, origin) = match self.source.find_by_ingredients(pantry).await {
            Ok(candidates) => (candidates, ResultOrigin::Upstream),
            Err(ApiConnectionError::QuotaExceeded) => {
                warn!("Quota exceeded, serving fallback data");
                (fallback_recipes(), ResultOrigin::Fallback)
            }
            Err(e) => return Err(e),
        };

        let recipes = match_and_rank(pantry, candidates);
        info!(
            pantry_size = pantry.len(),
            results = recipes.len(),
            ?origin,
            "recipe search complete"
        );
        Ok(SearchOutcome { recipes, origin })
    }
}
