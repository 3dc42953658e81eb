//! Credential store operations layered over the `users` table.

use tracing::{info, warn};

use super::password::{hash_password, verify_password};
use crate::config::SeedUser;
use crate::db::Database;
use crate::errors::OstrichError;
use crate::models::user::User;

/// Hash the password and create the user. Empty emails are stored as NULL.
pub async fn create_user(
    db: &Database,
    username: &str,
    password: &str,
    email: Option<&str>,
    role: &str,
    bcrypt_cost: u32,
) -> Result<User, OstrichError> {
    let hashed = hash_password(password, bcrypt_cost).await?;
    let email = email.map(str::trim).filter(|e| !e.is_empty());
    let user = db.insert_user(username, &hashed, email, role)?;
    info!(user_id = user.id, username = %user.username, role = %user.role, "User created");
    Ok(user)
}

/// Check a username/password pair. On success `last_login` is stamped and
/// the user is returned; unknown users and wrong passwords yield `None`.
pub async fn authenticate_user(
    db: &Database,
    username: &str,
    password: &str,
) -> Result<Option<User>, OstrichError> {
    let Some(credentials) = db.get_credentials(username)? else {
        return Ok(None);
    };

    if !verify_password(password, &credentials.password_hash).await? {
        warn!(username = %username, "Failed login attempt");
        return Ok(None);
    }

    let mut user = credentials.user;
    user.last_login = Some(db.record_login(user.id)?);
    Ok(Some(user))
}

/// Create every seed account whose username is not taken yet.
pub async fn seed_users(
    db: &Database,
    seeds: &[SeedUser],
    bcrypt_cost: u32,
) -> Result<usize, OstrichError> {
    let mut created = 0;
    for seed in seeds {
        if db.get_user_by_username(&seed.username)?.is_some() {
            continue;
        }
        create_user(
            db,
            &seed.username,
            &seed.password,
            seed.email.as_deref(),
            &seed.role,
            bcrypt_cost,
        )
        .await?;
        created += 1;
    }
    if created > 0 {
        info!(count = created, "Created default users");
    }
    Ok(created)
}
