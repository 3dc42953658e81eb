use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::error;
use crate::errors::OstrichError;

impl IntoResponse for OstrichError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self {
            OstrichError::Validation(_) => StatusCode::BAD_REQUEST,
            OstrichError::Authentication(_) => StatusCode::UNAUTHORIZED,
            OstrichError::Permission(_) => StatusCode::FORBIDDEN,
            OstrichError::NotFound(_) => StatusCode::NOT_FOUND,
            OstrichError::Conflict(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Internal carries an already-masked public message; anything else
        // on the server side must not leak its detail.
        let message = if self.is_client_error() || matches!(self, OstrichError::Internal(_)) {
            self.to_string()
        } else {
            error!(error = %self, "Unhandled server error");
            "Internal server error".to_string()
        };

        (status, Json(json!({"error": message}))).into_response()
    }
}
