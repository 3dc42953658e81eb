use std::path::Path;
use crate::errors::OstrichError;
use super::types::{OstrichConfig, DEFAULT_JWT_SECRET, MAX_TOKEN_TTL_HOURS};
use tracing::warn;

const MAX_CONFIG_BYTES: u64 = 1_048_576;

pub async fn parse_config(path: &Path) -> Result<OstrichConfig, OstrichError> {
    if !path.exists() {
        return Err(OstrichError::Config(format!("Config file not found: {}", path.display())));
    }

    let metadata = tokio::fs::metadata(path).await?;
    if metadata.len() > MAX_CONFIG_BYTES {
        return Err(OstrichError::Config("Config file exceeds 1MB limit".into()));
    }

    let content = tokio::fs::read_to_string(path).await?;
    let config: OstrichConfig = if content.trim().is_empty() {
        OstrichConfig::default()
    } else {
        serde_yaml::from_str(&content)?
    };

    validate_config(&config)?;

    Ok(config)
}

/// Load the config file when one is given, otherwise validated defaults.
pub async fn load_config(path: Option<&Path>) -> Result<OstrichConfig, OstrichError> {
    match path {
        Some(path) => parse_config(path).await,
        None => {
            let config = OstrichConfig::default();
            validate_config(&config)?;
            Ok(config)
        }
    }
}

/// Reject semantically invalid settings.
pub fn validate_config(config: &OstrichConfig) -> Result<(), OstrichError> {
    let auth = &config.auth;
    if !(1..=MAX_TOKEN_TTL_HOURS).contains(&auth.token_ttl_hours) {
        return Err(OstrichError::Config(format!(
            "auth.token_ttl_hours must be between 1 and {}, got {}",
            MAX_TOKEN_TTL_HOURS, auth.token_ttl_hours
        )));
    }

    if !(4..=31).contains(&auth.bcrypt_cost) {
        return Err(OstrichError::Config(format!(
            "auth.bcrypt_cost must be between 4 and 31, got {}",
            auth.bcrypt_cost
        )));
    }

    if matches!(&auth.jwt_secret, Some(secret) if secret.is_empty()) {
        return Err(OstrichError::Config("auth.jwt_secret must not be empty".into()));
    }

    for seed in &auth.seed_users {
        if seed.username.is_empty() || seed.password.is_empty() {
            return Err(OstrichError::Config("Seed users need a username and a password".into()));
        }
    }

    let probability = config.simulation.port_open_probability;
    if !(0.0..=1.0).contains(&probability) {
        return Err(OstrichError::Config(format!(
            "simulation.port_open_probability must be within 0..=1, got {}",
            probability
        )));
    }

    if auth.resolved_secret() == DEFAULT_JWT_SECRET {
        warn!("Using the built-in development JWT secret; set OSTRICH_JWT_SECRET in production");
    }

    Ok(())
}
