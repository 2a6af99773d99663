use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        rejection::{JsonRejection, PathRejection, QueryRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::api_connection::connection::ApiConnectionError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Ingredients are required")]
    MissingIngredients,

    #[error("An image file is required")]
    MissingImage,

    #[error("Malformed upload: {0}")]
    MalformedUpload(#[from] MultipartError),

    #[error("A valid email is required")]
    InvalidEmail,

    #[error("{}", .0.body_text())]
    JsonBody(#[from] JsonRejection),

    #[error("{}", .0.body_text())]
    PathParams(#[from] PathRejection),

    #[error("{}", .0.body_text())]
    QueryParams(#[from] QueryRejection),

    #[error("{}", .0.body_text())]
    MultipartForm(#[from] MultipartRejection),

    #[error("Failed to fetch recipes")]
    RecipeSearch(#[source] ApiConnectionError),

    #[error("Failed to fetch recipe details")]
    RecipeDetails(#[source] ApiConnectionError),

    #[error("Failed to analyze image")]
    ImageAnalysis(#[source] ApiConnectionError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::MissingIngredients | AppError::MissingImage | AppError::InvalidEmail => {
                StatusCode::BAD_REQUEST
            }
            // Oversized uploads come back as 413 here.
            AppError::MalformedUpload(e) => e.status(),
            AppError::JsonBody(rejection) => rejection.status(),
            AppError::PathParams(rejection) => rejection.status(),
            AppError::QueryParams(rejection) => rejection.status(),
            AppError::MultipartForm(rejection) => rejection.status(),
            AppError::RecipeSearch(_) | AppError::RecipeDetails(_) | AppError::ImageAnalysis(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
