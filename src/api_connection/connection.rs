use reqwest::{Client, Response, StatusCode};
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ApiConnectionError {
    MissingApiKey(String),
    ExpiredCredential(String),
    NetworkError(reqwest::Error),
    SerializationError(serde_json::Error),
    /// Upstream answered 402: the daily request quota is used up.
    QuotaExceeded,
    ApiError {
        status: StatusCode,
        error_body: String,
    },
    MalformedResponse(String),
}

impl fmt::Display for ApiConnectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiConnectionError::MissingApiKey(key_name) => {
                write!(f, "API key not found in environment: {}", key_name)
            }
            ApiConnectionError::ExpiredCredential(expired_at) => {
                write!(f, "Credential expired at {}", expired_at)
            }
            ApiConnectionError::NetworkError(err) => write!(f, "Network error: {}", err),
            ApiConnectionError::SerializationError(err) => {
                write!(f, "Serialization error: {}", err)
            }
            ApiConnectionError::QuotaExceeded => write!(f, "Upstream quota exceeded"),
            ApiConnectionError::ApiError { status, error_body } => {
                write!(f, "API error {}: {}", status, error_body)
            }
            ApiConnectionError::MalformedResponse(detail) => {
                write!(f, "Malformed upstream response: {}", detail)
            }
        }
    }
}

impl Error for ApiConnectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ApiConnectionError::NetworkError(err) => Some(err),
            ApiConnectionError::SerializationError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ApiConnectionError {
    fn from(err: reqwest::Error) -> Self {
        ApiConnectionError::NetworkError(err)
    }
}

impl From<serde_json::Error> for ApiConnectionError {
    fn from(err: serde_json::Error) -> Self {
        ApiConnectionError::SerializationError(err)
    }
}

pub fn build_http_client() -> Client {
    Client::new()
}

/// Passes successful responses through and turns everything else into an
/// `ApiConnectionError`, keeping the upstream body for the logs.
pub async fn check_status(response: Response) -> Result<Response, ApiConnectionError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    if status == StatusCode::PAYMENT_REQUIRED {
        return Err(ApiConnectionError::QuotaExceeded);
    }
    let error_body = response
        .text()
        .await
        .unwrap_or_else(|_| "Failed to read error body".to_string());
    Err(ApiConnectionError::ApiError { status, error_body })
}
