use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use tracing::debug;

use super::connection::{build_http_client, check_status, ApiConnectionError};
use super::credentials::CredentialSlot;
use super::endpoints::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ContentPart, ImageUrl,
    MessageContent,
};
use super::IngredientVision;

pub const OPENROUTER_API_KEY_ENV_VAR: &str = "OPENROUTER_API_KEY";

pub const INGREDIENT_PROMPT: &str = "Identify the food ingredients visible in this photo of a fridge or pantry. \
Respond ONLY with a comma separated list of ingredient names in lower case, for example: \
chicken, rice, tomato. Do not add quantities, brands or any other text. \
If no food is visible, respond with an empty string.";

/// Attribution headers OpenRouter shows on its dashboard.
#[derive(Clone, Debug)]
pub struct SiteInfo {
    pub site_url: String,
    pub app_name: String,
}

#[derive(Clone, Debug)]
pub enum Provider {
    OpenRouter {
        http: Client,
        base_url: String,
        model: String,
        credential: CredentialSlot,
        site: SiteInfo,
    },
}

impl Provider {
    pub fn openrouter(base_url: &str, model: &str, credential: CredentialSlot, site: SiteInfo) -> Self {
        Self::OpenRouter {
            http: build_http_client(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            credential,
            site,
        }
    }

    pub fn model(&self) -> &str {
        match self {
            Provider::OpenRouter { model, .. } => model.as_str(),
        }
    }

    pub async fn call_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ApiConnectionError> {
        match self {
            Provider::OpenRouter {
                http,
                base_url,
                credential,
                site,
                ..
            } => {
                let api_key = credential.secret()?;
                let url = format!("{}/chat/completions", base_url);

                let response = http
                    .post(url)
                    .bearer_auth(api_key)
                    .header("HTTP-Referer", site.site_url.as_str())
                    .header("X-Title", site.app_name.as_str())
                    .json(&request)
                    .send()
                    .await?;

                let body = check_status(response).await?.text().await?;
                serde_json::from_str::<ChatCompletionResponse>(&body)
                    .map_err(|e| ApiConnectionError::MalformedResponse(e.to_string()))
            }
        }
    }
}

/// Builds the chat request that carries the photo as a data URL.
pub fn build_ingredient_request(model: &str, image: &[u8], mime_type: &str) -> ChatCompletionRequest {
    let data_url = format!("data:{};base64,{}", mime_type, STANDARD.encode(image));
    ChatCompletionRequest {
        model: model.to_string(),
        messages: vec![ChatMessage {
            role: "user".to_string(),
            content: MessageContent::Parts(vec![
                ContentPart::Text {
                    text: INGREDIENT_PROMPT.to_string(),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl { url: data_url },
                },
            ]),
        }],
        temperature: Some(0.0),
        max_tokens: Some(200),
    }
}

#[async_trait]
impl IngredientVision for Provider {
    async fn describe_ingredients(
        &self,
        image: &[u8],
        mime_type: &str,
    ) -> Result<String, ApiConnectionError> {
        let request = build_ingredient_request(self.model(), image, mime_type);
        debug!(bytes = image.len(), mime_type, "sending photo to vision model");
        let response = self.call_chat_completion(request).await?;
        Ok(response.first_text().to_string())
    }
}
