//! Session cookie handling.

use axum::http::{header, HeaderMap, HeaderValue};

use crate::errors::OstrichError;

pub const SESSION_COOKIE: &str = "auth_token";

/// Attributes of the session cookie. The cookie is always HTTP-only,
/// same-site strict and scoped to the whole site.
#[derive(Debug, Clone)]
pub struct CookieSettings {
    pub name: String,
    pub secure: bool,
    pub max_age_secs: i64,
}

impl CookieSettings {
    pub fn new(secure: bool, max_age_secs: i64) -> Self {
        Self {
            name: SESSION_COOKIE.to_string(),
            secure,
            max_age_secs,
        }
    }

    fn attributes(&self) -> String {
        let mut attrs = String::from("HttpOnly; SameSite=Strict; Path=/");
        if self.secure {
            attrs.push_str("; Secure");
        }
        attrs
    }

    /// `Set-Cookie` value carrying a freshly issued token.
    pub fn session_cookie(&self, token: &str) -> Result<HeaderValue, OstrichError> {
        let value = format!(
            "{}={}; {}; Max-Age={}",
            self.name,
            token,
            self.attributes(),
            self.max_age_secs
        );
        HeaderValue::from_str(&value)
            .map_err(|e| OstrichError::Internal(format!("Invalid cookie value: {}", e)))
    }

    /// `Set-Cookie` value that makes the browser drop the session cookie.
    pub fn clear_cookie(&self) -> HeaderValue {
        let value = format!(
            "{}=; {}; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT",
            self.name,
            self.attributes()
        );
        HeaderValue::from_str(&value)
            .unwrap_or_else(|_| HeaderValue::from_static("auth_token=; Max-Age=0"))
    }

    /// Pull the session token out of the request's `Cookie` headers.
    pub fn read_token(&self, headers: &HeaderMap) -> Option<String> {
        headers
            .get_all(header::COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| *name == self.name)
            .map(|(_, value)| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}
