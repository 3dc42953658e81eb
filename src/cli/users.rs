use std::path::Path;
use crate::auth::create_user;
use crate::cli::commands::CreateUserArgs;
use crate::config::load_config;
use crate::db::Database;
use crate::errors::OstrichError;
use crate::models::user::{ROLE_ADMIN, ROLE_USER};

pub async fn handle_create_user(args: CreateUserArgs) -> Result<(), OstrichError> {
    if args.role != ROLE_USER && args.role != ROLE_ADMIN {
        return Err(OstrichError::Validation(format!(
            "Unknown role '{}', expected '{}' or '{}'",
            args.role, ROLE_USER, ROLE_ADMIN
        )));
    }
    if args.password.is_empty() {
        return Err(OstrichError::Validation("Password must not be empty".into()));
    }

    let config = load_config(args.config.as_deref().map(Path::new)).await?;
    let db_path = args.db.unwrap_or(config.database.path);
    let db = Database::new(&db_path)?;

    let user = create_user(
        &db,
        &args.username,
        &args.password,
        args.email.as_deref(),
        &args.role,
        config.auth.bcrypt_cost,
    ).await?;

    println!("Created user '{}' (id {}, role {})", user.username, user.id, user.role);
    Ok(())
}
