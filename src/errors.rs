use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::extract::ExtractError;

pub type WebResult<T> = std::result::Result<T, WebError>;

#[derive(thiserror::Error, Debug)]
pub enum WebError {
    /// The request body failed validation. The message is safe to show clients.
    #[error("{0}")]
    Validation(String),
    /// The generative API call failed or returned nothing usable.
    #[error("Generation failed: {0:#}")]
    Generation(#[source] anyhow::Error),
    /// The model answered, but no usable payload could be pulled out of it.
    #[error("Extraction failed: {0}")]
    Extraction(#[from] ExtractError),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            // Everything else is logged in full but reported opaquely:
            // upstream error bodies must never reach the client.
            WebError::Generation(_) | WebError::Extraction(_) => {
                tracing::error!("{:#}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Generation failed" })),
                )
                    .into_response()
            }
        }
    }
}
