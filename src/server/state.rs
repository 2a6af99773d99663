use std::sync::Arc;

use crate::api_connection::spoonacular::SpoonacularClient;
use crate::api_connection::vision::Provider;
use crate::api_connection::{IngredientVision, RecipeSource};
use crate::config::Config;
use crate::recipe_search::RecipeSearch;
use crate::subscribers::SubscriberRegistry;

pub struct State {
    pub search: RecipeSearch,
    pub vision: Arc<dyn IngredientVision>,
    pub subscribers: SubscriberRegistry,
}

impl State {
    pub fn new(source: Arc<dyn RecipeSource>, vision: Arc<dyn IngredientVision>) -> Arc<Self> {
        Arc::new(Self {
            search: RecipeSearch::new(source),
            vision,
            subscribers: SubscriberRegistry::new(),
        })
    }

    /// Wires the real upstream clients from configuration.
    pub fn from_config(config: &Config) -> Arc<Self> {
        let source = SpoonacularClient::new(
            &config.spoonacular_base_url,
            config.spoonacular_key.clone(),
        );
        let vision = Provider::openrouter(
            &config.openrouter_base_url,
            &config.vision_model,
            config.openrouter_key.clone(),
            config.site.clone(),
        );
        Self::new(Arc::new(source), Arc::new(vision))
    }
}
