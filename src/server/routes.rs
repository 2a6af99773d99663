use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        multipart::MultipartRejection, Multipart, Path, Query, State as AxumState,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info, warn};

use super::error::AppError;
use super::state::State;
use crate::matching::{split_ingredient_list, PantrySet};
use crate::api_connection::connection::ApiConnectionError;
use crate::subscribers::{SubscribeRequest, Subscription};

pub const HEALTH_MESSAGE: &str = "Iron Chef Server is Online";
const IMAGE_FIELD: &str = "image";
/// Upload cap for fridge photos; phone pictures routinely exceed axum's 2 MB default.
pub const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;

pub async fn health_handler() -> &'static str {
    HEALTH_MESSAGE
}

#[derive(Deserialize)]
pub struct RecipeQuery {
    ingredients: Option<String>,
}

pub async fn search_handler(
    AxumState(state): AxumState<Arc<State>>,
    query: Result<Query<RecipeQuery>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(query) = query?;
    let raw = query.ingredients.unwrap_or_default();
    let pantry = PantrySet::from_raw(raw.split(','));
    if pantry.is_empty() {
        return Err(AppError::MissingIngredients);
    }

    let outcome = state.search.search(&pantry).await.map_err(|e| {
        error!("API Error: {}", e);
        AppError::RecipeSearch(e)
    })?;
    Ok(Json(outcome.recipes))
}

pub async fn details_handler(
    AxumState(state): AxumState<Arc<State>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(id) = id?;
    let details = state
        .search
        .source()
        .recipe_information(id)
        .await
        .map_err(|e| {
            error!("API Error (Details): {}", e);
            AppError::RecipeDetails(e)
        })?;
    Ok(Json(details))
}

pub async fn image_handler(
    AxumState(state): AxumState<Arc<State>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    let mut multipart = multipart?;
    let mut upload = None;
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let mime_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field.bytes().await?;
        upload = Some((bytes, mime_type));
        break;
    }

    let (bytes, mime_type) = upload.ok_or(AppError::MissingImage)?;
    if bytes.is_empty() {
        return Err(AppError::MissingImage);
    }

    let text = match state.vision.describe_ingredients(&bytes, &mime_type).await {
        Ok(text) => text,
        // Unparseable model output just means nothing was recognised.
        Err(ApiConnectionError::MalformedResponse(detail)) => {
            warn!("Vision response unreadable, no ingredients detected: {}", detail);
            String::new()
        }
        Err(e) => {
            error!("Vision Error: {}", e);
            return Err(AppError::ImageAnalysis(e));
        }
    };

    let detected = PantrySet::from_raw(split_ingredient_list(&text));
    info!(detected = detected.len(), "image analyzed");
    Ok(Json(json!({ "ingredients": detected.tokens() })))
}

pub async fn subscribe_handler(
    AxumState(state): AxumState<Arc<State>>,
    payload: Result<Json<SubscribeRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload?;
    let email = payload.into_valid_email().ok_or(AppError::InvalidEmail)?;
    let response = match state.subscribers.subscribe(email).await {
        Subscription::Created(subscriber) => {
            info!(id = subscriber.id, "new subscriber");
            (StatusCode::CREATED, Json(json!({ "subscriber": subscriber })))
        }
        Subscription::AlreadySubscribed(subscriber) => {
            (StatusCode::OK, Json(json!({ "subscriber": subscriber })))
        }
    };
    Ok(response)
}

pub async fn subscribers_handler(AxumState(state): AxumState<Arc<State>>) -> impl IntoResponse {
    let subscribers = state.subscribers.list().await;
    Json(json!({ "subscribers": subscribers }))
}
