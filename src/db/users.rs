use chrono::Utc;
use crate::errors::OstrichError;
use crate::models::user::{User, UserCredentials};
use super::Database;

const USER_COLUMNS: &str = "id, username, email, role, created_at, last_login";

fn user_from_row(row: &rusqlite::Row) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        email: row.get(2)?,
        role: row.get(3)?,
        created_at: row.get(4)?,
        last_login: row.get(5)?,
    })
}

fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}

impl Database {
    /// Insert a user whose password is already hashed. A duplicate username
    /// or email yields `OstrichError::Conflict`.
    pub fn insert_user(
        &self,
        username: &str,
        password_hash: &str,
        email: Option<&str>,
        role: &str,
    ) -> Result<User, OstrichError> {
        let conn = self.lock()?;
        let created_at = Utc::now().to_rfc3339();
        conn.execute(
            "INSERT INTO users (username, password, email, role, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![username, password_hash, email, role, created_at],
        ).map_err(|e| {
            if is_unique_violation(&e) {
                OstrichError::Conflict("Username or email already exists".into())
            } else {
                OstrichError::Database(format!("Failed to create user: {}", e))
            }
        })?;

        Ok(User {
            id: conn.last_insert_rowid(),
            username: username.to_string(),
            email: email.map(str::to_string),
            role: role.to_string(),
            created_at,
            last_login: None,
        })
    }

    pub fn get_user_by_id(&self, id: i64) -> Result<Option<User>, OstrichError> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(&format!("SELECT {} FROM users WHERE id = ?1", USER_COLUMNS))
            .map_err(|e| OstrichError::Database(format!("Query failed: {}", e)))?;

        match stmt.query_row(rusqlite::params![id], user_from_row) {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(OstrichError::Database(format!("Query error: {}", e))),
        }
    }

    pub fn get_user_by_username(&self, username: &str) -> Result<Option<User>, OstrichError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(&format!("SELECT {} FROM users WHERE username = ?1", USER_COLUMNS))
            .map_err(|e| OstrichError::Database(format!("Query failed: {}", e)))?;

        match stmt.query_row(rusqlite::params![username], user_from_row) {
            Ok(user) => Ok(Some(user)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(OstrichError::Database(format!("Query error: {}", e))),
        }
    }

    /// Fetch a user together with the stored password hash.
    pub fn get_credentials(&self, username: &str) -> Result<Option<UserCredentials>, OstrichError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(&format!(
                "SELECT {}, password FROM users WHERE username = ?1",
                USER_COLUMNS
            ))
            .map_err(|e| OstrichError::Database(format!("Query failed: {}", e)))?;

        let result = stmt.query_row(rusqlite::params![username], |row: &rusqlite::Row| {
            Ok(UserCredentials {
                user: user_from_row(row)?,
                password_hash: row.get(6)?,
            })
        });

        match result {
            Ok(credentials) => Ok(Some(credentials)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(OstrichError::Database(format!("Query error: {}", e))),
        }
    }

    /// Stamp `last_login` with the current time and return the new value.
    pub fn record_login(&self, id: i64) -> Result<String, OstrichError> {
        let conn = self.lock()?;
        let now = Utc::now().to_rfc3339();
        conn.execute(
            "UPDATE users SET last_login = ?2 WHERE id = ?1",
            rusqlite::params![id, now],
        ).map_err(|e| OstrichError::Database(format!("Update failed: {}", e)))?;
        Ok(now)
    }

    pub fn count_users(&self) -> Result<i64, OstrichError> {
        let conn = self.lock()?;
        let count = conn
            .query_row("SELECT COUNT(*) FROM users", [], |row: &rusqlite::Row| row.get(0))
            .map_err(|e| OstrichError::Database(format!("Query error: {}", e)))?;
        Ok(count)
    }
}
