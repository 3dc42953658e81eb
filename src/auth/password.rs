//! Password hashing. bcrypt is CPU-bound, so both directions run on the
//! blocking pool.

use crate::errors::OstrichError;

/// Hash a password using bcrypt at the given cost.
pub async fn hash_password(password: &str, cost: u32) -> Result<String, OstrichError> {
    let password = password.to_string();
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost))
        .await
        .map_err(|e| OstrichError::Internal(format!("Hashing task failed: {}", e)))??;
    Ok(hashed)
}

/// Verify a password against a stored hash. A malformed stored hash counts
/// as a mismatch.
pub async fn verify_password(password: &str, hash: &str) -> Result<bool, OstrichError> {
    let password = password.to_string();
    let hash = hash.to_string();
    let matched = tokio::task::spawn_blocking(move || {
        bcrypt::verify(password, &hash).unwrap_or(false)
    })
    .await
    .map_err(|e| OstrichError::Internal(format!("Verification task failed: {}", e)))?;
    Ok(matched)
}
