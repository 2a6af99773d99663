#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::Mutex;

use pantry_match::api_connection::connection::ApiConnectionError;
use pantry_match::api_connection::endpoints::RecipeInformation;
use pantry_match::api_connection::{IngredientVision, RecipeSource};
use pantry_match::matching::{PantrySet, RecipeCandidate, RecipeIngredient};

pub fn candidate(id: i64, names: &[&str]) -> RecipeCandidate {
    RecipeCandidate {
        id,
        title: format!("Recipe {id}"),
        image: format!("https://img.example/{id}.jpg"),
        ingredients: names.iter().map(|n| RecipeIngredient::from_name(*n)).collect(),
    }
}

pub enum SourceBehaviour {
    Recipes(Vec<RecipeCandidate>),
    QuotaExceeded,
    Unavailable,
}

/// Recipe source that replays a fixed answer and records the pantries it saw.
pub struct FakeRecipeSource {
    behaviour: SourceBehaviour,
    pub seen: Mutex<Vec<Vec<String>>>,
}

impl FakeRecipeSource {
    pub fn new(behaviour: SourceBehaviour) -> Self {
        Self {
            behaviour,
            seen: Mutex::new(Vec::new()),
        }
    }
}

fn unavailable() -> ApiConnectionError {
    ApiConnectionError::ApiError {
        status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
        error_body: "down".to_string(),
    }
}

#[async_trait]
impl RecipeSource for FakeRecipeSource {
    async fn find_by_ingredients(
        &self,
        pantry: &PantrySet,
    ) -> Result<Vec<RecipeCandidate>, ApiConnectionError> {
        self.seen.lock().unwrap().push(pantry.tokens().to_vec());
        match &self.behaviour {
            SourceBehaviour::Recipes(recipes) => Ok(recipes.clone()),
            SourceBehaviour::QuotaExceeded => Err(ApiConnectionError::QuotaExceeded),
            SourceBehaviour::Unavailable => Err(unavailable()),
        }
    }

    async fn recipe_information(&self, id: i64) -> Result<RecipeInformation, ApiConnectionError> {
        match &self.behaviour {
            SourceBehaviour::Recipes(recipes) => recipes
                .iter()
                .find(|r| r.id == id)
                .map(|r| RecipeInformation {
                    id: r.id,
                    title: r.title.clone(),
                    image: r.image.clone(),
                    ready_in_minutes: Some(25),
                    servings: Some(2),
                    summary: String::new(),
                    instructions: None,
                    extended_ingredients: Vec::new(),
                    extra: Default::default(),
                })
                .ok_or(ApiConnectionError::ApiError {
                    status: reqwest::StatusCode::NOT_FOUND,
                    error_body: "not found".to_string(),
                }),
            _ => Err(unavailable()),
        }
    }
}

/// Vision service with a scripted answer.
pub enum FakeVision {
    Answer(String),
    Unreadable,
    Unavailable,
}

#[async_trait]
impl IngredientVision for FakeVision {
    async fn describe_ingredients(
        &self,
        _image: &[u8],
        _mime_type: &str,
    ) -> Result<String, ApiConnectionError> {
        match self {
            FakeVision::Answer(text) => Ok(text.clone()),
            FakeVision::Unreadable => Err(ApiConnectionError::MalformedResponse(
                "expected value at line 1 column 1".to_string(),
            )),
            FakeVision::Unavailable => Err(unavailable()),
        }
    }
}
