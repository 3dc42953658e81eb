use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};

use crate::api::AppState;
use crate::errors::OstrichError;
use crate::models::user::User;

/// The user behind a valid session cookie. Rejects with 401 otherwise.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = OstrichError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        state
            .sessions
            .current_user(&state.db, &parts.headers)
            .map_err(|e| e.mask("Failed to get user information"))?
            .map(CurrentUser)
            .ok_or_else(|| OstrichError::Authentication("Not authenticated".into()))
    }
}

/// A logged-in user whose stored role is `admin`. Rejects with 403 for
/// other roles.
pub struct AdminUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for AdminUser {
    type Rejection = OstrichError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let CurrentUser(user) = CurrentUser::from_request_parts(parts, state).await?;
        if !user.is_admin() {
            return Err(OstrichError::Permission("Admin privileges required".into()));
        }
        Ok(AdminUser(user))
    }
}
