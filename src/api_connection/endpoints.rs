use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::matching::{RecipeCandidate, RecipeIngredient};

pub const SPOONACULAR_BASE_URL: &str = "https://api.spoonacular.com";
pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_VISION_MODEL: &str = "google/gemini-2.0-flash-001";

/// Recipes requested per search, sized for the client's grid view.
pub const RESULTS_PER_SEARCH: u32 = 9;
/// `ranking=1` asks upstream to minimize missing ingredients.
pub const RANKING_MINIMIZE_MISSING: u8 = 1;

// --- OpenRouter chat completions -------------------------------------------

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ImageUrl {
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatMessage {
    pub role: String,
    pub content: MessageContent,
}

#[derive(Debug, Serialize, Clone)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionResponseMessage {
    pub role: String,
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionChoice {
    pub message: ChatCompletionResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
    #[serde(default)]
    pub index: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub choices: Vec<ChatCompletionChoice>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, or an empty string when there is none.
    pub fn first_text(&self) -> &str {
        self.choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .unwrap_or("")
    }
}

// --- Spoonacular --------------------------------------------------------------

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SpoonacularIngredient {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub original: String,
}

impl From<SpoonacularIngredient> for RecipeIngredient {
    fn from(ingredient: SpoonacularIngredient) -> Self {
        RecipeIngredient::new(ingredient.name, ingredient.original)
    }
}

/// One entry of `GET /recipes/findByIngredients`.
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FoundRecipe {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: String,
    // Upstream may send these as null as well as omit them.
    #[serde(default)]
    pub used_ingredients: Option<Vec<SpoonacularIngredient>>,
    #[serde(default)]
    pub missed_ingredients: Option<Vec<SpoonacularIngredient>>,
}

impl From<FoundRecipe> for RecipeCandidate {
    /// Upstream already split the list against its own notion of the pantry;
    /// both halves are merged back so the local matcher decides.
    fn from(found: FoundRecipe) -> Self {
        let ingredients = found
            .used_ingredients
            .unwrap_or_default()
            .into_iter()
            .chain(found.missed_ingredients.unwrap_or_default())
            .map(RecipeIngredient::from)
            .collect();
        RecipeCandidate {
            id: found.id,
            title: found.title,
            image: found.image,
            ingredients,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ExtendedIngredient {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub original: String,
}

/// `GET /recipes/{id}/information`. Fields the client does not read are kept
/// in `extra` and passed through untouched.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInformation {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub instructions: Option<String>,
    #[serde(default)]
    pub extended_ingredients: Vec<ExtendedIngredient>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn found_recipe_merges_used_and_missed() {
        let body = r#"{
            "id": 73420,
            "title": "Apple Or Peach Strudel",
            "image": "https://img.spoonacular.com/recipes/73420-312x231.jpg",
            "usedIngredientCount": 1,
            "missedIngredientCount": 2,
            "usedIngredients": [{"id": 9003, "name": "apples", "original": "6 large apples"}],
            "missedIngredients": [
                {"id": 18371, "name": "baking powder", "original": "1 tsp baking powder"},
                {"id": 2010, "name": "cinnamon", "original": "1 tsp cinnamon"}
            ],
            "unusedIngredients": []
        }"#;
        let found: FoundRecipe = serde_json::from_str(body).unwrap();
        let candidate = RecipeCandidate::from(found);
        let names: Vec<&str> = candidate.ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["apples", "baking powder", "cinnamon"]);
        assert_eq!(candidate.ingredients[0].original, "6 large apples");
    }

    #[test]
    fn null_ingredient_lists_count_as_empty() {
        let body = r#"[
            {"id": 1, "title": "Mystery", "usedIngredients": null, "missedIngredients": null},
            {"id": 2, "title": "Half", "missedIngredients": [{"name": "salt", "original": "salt"}]}
        ]"#;
        let found: Vec<FoundRecipe> = serde_json::from_str(body).unwrap();
        let candidates: Vec<RecipeCandidate> = found.into_iter().map(RecipeCandidate::from).collect();
        assert!(candidates[0].ingredients.is_empty());
        assert_eq!(candidates[1].ingredients, vec![RecipeIngredient::from_name("salt")]);
    }

    #[test]
    fn recipe_information_passes_unknown_fields_through() {
        let body = r#"{
            "id": 1, "title": "Soup", "readyInMinutes": 30, "servings": 2,
            "summary": "<b>Nice</b>", "instructions": null,
            "extendedIngredients": [{"id": 11, "name": "leek", "original": "1 leek"}],
            "vegan": true
        }"#;
        let info: RecipeInformation = serde_json::from_str(body).unwrap();
        assert_eq!(info.ready_in_minutes, Some(30));
        assert_eq!(info.extra.get("vegan"), Some(&Value::Bool(true)));

        let back = serde_json::to_value(&info).unwrap();
        assert_eq!(back["vegan"], true);
        assert_eq!(back["extendedIngredients"][0]["original"], "1 leek");
    }

    #[test]
    fn vision_message_serializes_as_content_parts() {
        let message = ChatMessage {
            role: "user".to_string(),
            content: MessageContent::Parts(vec![
                ContentPart::Text { text: "list it".to_string() },
                ContentPart::ImageUrl {
                    image_url: ImageUrl { url: "data:image/png;base64,AAAA".to_string() },
                },
            ]),
        };
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value["content"][0]["type"], "text");
        assert_eq!(value["content"][1]["type"], "image_url");
        assert_eq!(value["content"][1]["image_url"]["url"], "data:image/png;base64,AAAA");
    }

    #[test]
    fn empty_completion_has_empty_text() {
        let response: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert_eq!(response.first_text(), "");
    }
}
