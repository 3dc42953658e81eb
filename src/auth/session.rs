//! Login, logout and current-user resolution on top of signed tokens and
//! the session cookie. The server keeps no session state: a token lives
//! until it expires or the browser drops the cookie.

use axum::http::{HeaderMap, HeaderValue};
use tracing::info;

use super::cookie::CookieSettings;
use super::credentials::authenticate_user;
use super::token::TokenSigner;
use crate::config::AuthConfig;
use crate::db::Database;
use crate::errors::OstrichError;
use crate::models::user::User;

/// A successful login: the user and the `Set-Cookie` value to send back.
pub struct LoginOutcome {
    pub user: User,
    pub cookie: HeaderValue,
}

#[derive(Clone)]
pub struct SessionManager {
    signer: TokenSigner,
    cookies: CookieSettings,
    bcrypt_cost: u32,
}

impl SessionManager {
    pub fn new(signer: TokenSigner, cookies: CookieSettings, bcrypt_cost: u32) -> Self {
        Self { signer, cookies, bcrypt_cost }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        let signer = TokenSigner::new(&config.resolved_secret(), config.token_ttl_hours);
        let cookies = CookieSettings::new(config.secure_cookie, signer.ttl_seconds());
        Self::new(signer, cookies, config.bcrypt_cost)
    }

    pub fn signer(&self) -> &TokenSigner {
        &self.signer
    }

    pub fn cookies(&self) -> &CookieSettings {
        &self.cookies
    }

    pub fn bcrypt_cost(&self) -> u32 {
        self.bcrypt_cost
    }

    /// Authenticate and, on success, issue a token wrapped in a cookie.
    pub async fn login(
        &self,
        db: &Database,
        username: &str,
        password: &str,
    ) -> Result<Option<LoginOutcome>, OstrichError> {
        let Some(user) = authenticate_user(db, username, password).await? else {
            return Ok(None);
        };

        let token = self.signer.issue(&user)?;
        let cookie = self.cookies.session_cookie(&token)?;
        info!(user_id = user.id, username = %user.username, "User logged in");
        Ok(Some(LoginOutcome { user, cookie }))
    }

    /// The cookie value that ends the session in the browser.
    pub fn logout(&self) -> HeaderValue {
        self.cookies.clear_cookie()
    }

    /// Resolve the user behind the request's session cookie. The user row is
    /// re-read so deleted users lose access immediately.
    pub fn current_user(
        &self,
        db: &Database,
        headers: &HeaderMap,
    ) -> Result<Option<User>, OstrichError> {
        let Some(token) = self.cookies.read_token(headers) else {
            return Ok(None);
        };
        let Some(claims) = self.signer.verify(&token) else {
            return Ok(None);
        };
        db.get_user_by_id(claims.id)
    }

    pub fn is_authenticated(
        &self,
        db: &Database,
        headers: &HeaderMap,
    ) -> Result<bool, OstrichError> {
        Ok(self.current_user(db, headers)?.is_some())
    }

    pub fn is_admin(&self, db: &Database, headers: &HeaderMap) -> Result<bool, OstrichError> {
        Ok(self.current_user(db, headers)?.map_or(false, |u| u.is_admin()))
    }
}
