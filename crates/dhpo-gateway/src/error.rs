//! Error responses of the HTTP surface.
//!
//! Only two classes of failure exist here: the caller sent something
//! unusable (400) or DHPO could not be reached or understood (502).
//! Business-level failures reported by DHPO, negative result codes and
//! populated error messages, are not errors at this layer. They pass
//! through inside a 200 body exactly as the service returned them.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use dhpo_core::ValidationError;
use dhpo_soap::SoapError;
use serde::Serialize;
use thiserror::Error;

/// Anything a handler can fail with.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Query or multipart input could not be bound.
    #[error("{0}")]
    Parse(String),

    /// An enumerated parameter is outside its domain.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The upload is missing a usable file part.
    #[error("{0}")]
    Upload(String),

    /// Talking to DHPO failed.
    #[error(transparent)]
    Backend(#[from] SoapError),
}

/// JSON body of every error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl GatewayError {
    fn status(&self) -> StatusCode {
        match self {
            GatewayError::Parse(_) | GatewayError::Validation(_) | GatewayError::Upload(_) => {
                StatusCode::BAD_REQUEST
            }
            GatewayError::Backend(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            GatewayError::Parse(_) => "invalid_request",
            GatewayError::Validation(_) => "invalid_parameter",
            GatewayError::Upload(_) => "invalid_upload",
            GatewayError::Backend(_) => "dhpo_unavailable",
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        if let GatewayError::Backend(source) = &self {
            tracing::error!(%source, "DHPO call failed");
        }

        let details = match &self {
            GatewayError::Validation(source) => Some(format!("{:?}", source)),
            _ => None,
        };
        let body = ErrorResponse {
            error: self.kind().to_string(),
            message: self.to_string(),
            details,
        };
        (self.status(), Json(body)).into_response()
    }
}
