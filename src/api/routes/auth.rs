use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use tracing::info;
use crate::api::auth::CurrentUser;
use crate::api::models::{require, ApiJson, LoginRequest, RegisterRequest};
use crate::api::AppState;
use crate::auth::create_user;
use crate::errors::OstrichError;
use crate::models::user::ROLE_USER;

const CREDENTIALS_REQUIRED: &str = "Username and password are required";

pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<impl IntoResponse, OstrichError> {
    let username = require(&req.username, CREDENTIALS_REQUIRED)?;
    let password = require(&req.password, CREDENTIALS_REQUIRED)?;

    let outcome = state.sessions.login(&state.db, username, password).await
        .map_err(|e| e.mask("Authentication failed"))?
        .ok_or_else(|| OstrichError::Authentication("Invalid username or password".into()))?;

    let user = outcome.user;
    Ok((
        [(header::SET_COOKIE, outcome.cookie)],
        Json(json!({
            "success": true,
            "user": {
                "id": user.id,
                "username": user.username,
                "role": user.role,
            },
        })),
    ))
}

pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<impl IntoResponse, OstrichError> {
    let username = require(&req.username, CREDENTIALS_REQUIRED)?;
    let password = require(&req.password, CREDENTIALS_REQUIRED)?;

    let user = create_user(
        &state.db,
        username,
        password,
        req.email.as_deref(),
        ROLE_USER,
        state.sessions.bcrypt_cost(),
    ).await.map_err(|e| e.mask("Registration failed"))?;

    // New accounts start out logged in.
    let outcome = state.sessions.login(&state.db, username, password).await
        .map_err(|e| e.mask("Registration failed"))?
        .ok_or_else(|| OstrichError::Internal("Registration failed".into()))?;

    Ok((
        [(header::SET_COOKIE, outcome.cookie)],
        Json(json!({
            "success": true,
            "user": {
                "id": user.id,
                "username": user.username,
                "email": user.email,
                "role": user.role,
            },
        })),
    ))
}

pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    info!("Session cookie cleared");
    (
        [(header::SET_COOKIE, state.sessions.logout())],
        Json(json!({"success": true})),
    )
}

pub async fn current_user(CurrentUser(user): CurrentUser) -> Json<serde_json::Value> {
    Json(json!({
        "success": true,
        "user": {
            "id": user.id,
            "username": user.username,
            "email": user.email,
            "role": user.role,
        },
    }))
}
