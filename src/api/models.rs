use axum::{
    async_trait,
    extract::{FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::errors::OstrichError;

/// Like `axum::Json`, but a malformed body becomes a 400 `{error}` response.
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = OstrichError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => {
                debug!(rejection = %rejection, "Rejected request body");
                Err(OstrichError::Validation("Invalid request body".into()))
            }
        }
    }
}

/// Treat a missing or empty field as a client error with `message`.
pub fn require<'a>(value: &'a Option<String>, message: &str) -> Result<&'a str, OstrichError> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(OstrichError::Validation(message.to_string())),
    }
}

/// Like [`require`] for fields read as raw JSON: anything other than a
/// non-empty string counts as missing.
pub fn require_text<'a>(value: &'a Option<Value>, message: &str) -> Result<&'a str, OstrichError> {
    match value {
        Some(Value::String(v)) if !v.is_empty() => Ok(v.as_str()),
        _ => Err(OstrichError::Validation(message.to_string())),
    }
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
}

#[derive(Deserialize)]
pub struct TargetRequest {
    pub target: Option<Value>,
}

#[derive(Deserialize)]
pub struct PortScanRequest {
    pub target: Option<Value>,
    /// Checked by `parse_ports` so a wrong shape gets a specific message.
    pub ports: Option<Value>,
}

#[derive(Deserialize)]
pub struct DomainRequest {
    pub domain: Option<Value>,
}

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: Option<String>,
}
