//! Clients for the services the pantry matcher depends on: the recipe search
//! API and the photo-to-ingredients vision model.

pub mod connection;
pub mod credentials;
pub mod endpoints;
pub mod spoonacular;
pub mod vision;

use async_trait::async_trait;

use crate::matching::{PantrySet, RecipeCandidate};
use connection::ApiConnectionError;
use endpoints::RecipeInformation;

/// Finds recipes for a set of pantry ingredients.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Candidates in the source's own relevance order.
    async fn find_by_ingredients(
        &self,
        pantry: &PantrySet,
    ) -> Result<Vec<RecipeCandidate>, ApiConnectionError>;

    async fn recipe_information(&self, id: i64) -> Result<RecipeInformation, ApiConnectionError>;
}

/// Turns a photo into the model's raw comma separated ingredient text.
#[async_trait]
pub trait IngredientVision: Send + Sync {
    async fn describe_ingredients(
        &self,
        image: &[u8],
        mime_type: &str,
    ) -> Result<String, ApiConnectionError>;
}
