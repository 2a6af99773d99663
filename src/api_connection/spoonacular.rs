use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::connection::{build_http_client, check_status, ApiConnectionError};
use super::credentials::CredentialSlot;
use super::endpoints::{
    FoundRecipe, RecipeInformation, RANKING_MINIMIZE_MISSING, RESULTS_PER_SEARCH,
};
use super::RecipeSource;
use crate::matching::{PantrySet, RecipeCandidate};

pub const SPOONACULAR_API_KEY_ENV_VAR: &str = "SPOONACULAR_API_KEY";

pub struct SpoonacularClient {
    http: Client,
    base_url: String,
    credential: CredentialSlot,
}

impl SpoonacularClient {
    pub fn new(base_url: &str, credential: CredentialSlot) -> Self {
        Self {
            http: build_http_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
            credential,
        }
    }
}

#[async_trait]
impl RecipeSource for SpoonacularClient {
    async fn find_by_ingredients(
        &self,
        pantry: &PantrySet,
    ) -> Result<Vec<RecipeCandidate>, ApiConnectionError> {
        let api_key = self.credential.secret()?;
        let url = format!("{}/recipes/findByIngredients", self.base_url);
        let ingredients = pantry.tokens().join(",");
        let number = RESULTS_PER_SEARCH.to_string();
        let ranking = RANKING_MINIMIZE_MISSING.to_string();
        debug!(%ingredients, "querying findByIngredients");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("apiKey", api_key),
                ("ingredients", ingredients.as_str()),
                ("number", number.as_str()),
                ("ranking", ranking.as_str()),
                // Don't assume salt, water and the like are on hand.
                ("ignorePantry", "true"),
            ])
            .send()
            .await?;
        let found = check_status(response).await?.json::<Vec<FoundRecipe>>().await?;
        Ok(found.into_iter().map(RecipeCandidate::from).collect())
    }

    async fn recipe_information(&self, id: i64) -> Result<RecipeInformation, ApiConnectionError> {
        let api_key = self.credential.secret()?;
        let url = format!("{}/recipes/{}/information", self.base_url, id);

        let response = self
            .http
            .get(&url)
            .query(&[("apiKey", api_key)])
            .send()
            .await?;
        Ok(check_status(response).await?.json::<RecipeInformation>().await?)
    }
}
