use serde::{Deserialize, Serialize};

/// Development signing secret, used when neither the config file nor the
/// environment supply one.
pub const DEFAULT_JWT_SECRET: &str = "ostrich_secret_key_change_in_production";

/// Longest accepted session lifetime (one week).
pub const MAX_TOKEN_TTL_HOURS: i64 = 7 * 24;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct OstrichConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub simulation: SimulationConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: "./data/ostrich.db".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Overridden by `OSTRICH_JWT_SECRET` / `JWT_SECRET`.
    pub jwt_secret: Option<String>,
    pub token_ttl_hours: i64,
    /// Adds the `Secure` attribute to the session cookie.
    pub secure_cookie: bool,
    pub bcrypt_cost: u32,
    /// Accounts created at startup when their username is not taken.
    pub seed_users: Vec<SeedUser>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_hours: 8,
            secure_cookie: false,
            bcrypt_cost: 10,
            seed_users: vec![
                SeedUser {
                    username: "admin".to_string(),
                    password: "admin123".to_string(),
                    email: Some("admin@ostrich.local".to_string()),
                    role: "admin".to_string(),
                },
                SeedUser {
                    username: "sunny.admin".to_string(),
                    password: "sunny123".to_string(),
                    email: Some("sunny.admin@ostrich.local".to_string()),
                    role: "admin".to_string(),
                },
            ],
        }
    }
}

/// Environment variables consulted for the signing secret, in order.
pub const SECRET_ENV_VARS: [&str; 2] = ["OSTRICH_JWT_SECRET", "JWT_SECRET"];

impl AuthConfig {
    /// Resolve the signing secret: environment first, then config, then the
    /// built-in development secret.
    pub fn resolved_secret(&self) -> String {
        self.resolve_secret_with(|name| std::env::var(name).ok())
    }

    /// Empty values are skipped at every step.
    pub fn resolve_secret_with(&self, lookup: impl Fn(&str) -> Option<String>) -> String {
        SECRET_ENV_VARS
            .iter()
            .filter_map(|name| lookup(*name))
            .chain(self.jwt_secret.clone())
            .find(|secret| !secret.is_empty())
            .unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SeedUser {
    pub username: String,
    pub password: String,
    pub email: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    "user".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Chance that any single probed port reports open.
    pub port_open_probability: f64,
    pub vuln_scan_delay_ms: u64,
    pub webapp_scan_delay_ms: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            port_open_probability: 0.7,
            vuln_scan_delay_ms: 5000,
            webapp_scan_delay_ms: 8000,
        }
    }
}
