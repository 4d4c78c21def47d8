//! HTTP-facing errors.

use crate::api::ErrorBody;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error};
use tictactoe_engine::ConfigError;
use tracing::warn;

/// Error returned by a handler; rendered as `400 {"error": "..."}`.
#[derive(Debug, Display, Error)]
pub enum ApiError {
    /// The requested game could not be built.
    #[display("{}", _0)]
    Config(ConfigError),
    /// The request body was not valid JSON for the endpoint.
    #[display("Malformed request body: {}", message)]
    BadRequest {
        /// Parser message.
        message: String,
    },
}

impl ApiError {
    /// Creates a malformed-body error.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self, "Rejecting request");
        let message = match &self {
            Self::Config(err) => err.kind.to_string(),
            Self::BadRequest { .. } => self.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(ErrorBody { error: message })).into_response()
    }
}
