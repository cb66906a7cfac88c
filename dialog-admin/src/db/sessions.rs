//! Session database operations
//!
//! Sessions are issued by the main Dialog application and shared through
//! the sessions table; this service only resolves tokens to identities.

use chrono::{DateTime, Utc};
use dialog_common::{Error, Result};
use sqlx::{Pool, Sqlite};

/// Caller identity resolved from a session token
#[derive(Debug, Clone)]
pub struct SessionIdentity {
    pub user_guid: String,
    pub username: String,
    pub role: String,
}

/// Look up the identity behind a session token
///
/// **Returns:** None for unknown or expired tokens
pub async fn find_identity(db: &Pool<Sqlite>, token: &str) -> Result<Option<SessionIdentity>> {
    let row: Option<(String, String, String, String)> = sqlx::query_as(
        r#"
        SELECT u.guid, u.username, u.role, s.expires_at
        FROM sessions s
        JOIN users u ON u.guid = s.user_guid
        WHERE s.token = ?
        "#,
    )
    .bind(token)
    .fetch_optional(db)
    .await
    .map_err(Error::Database)?;

    match row {
        Some((user_guid, username, role, expires_at)) => {
            let expires_at = DateTime::parse_from_rfc3339(&expires_at)
                .map_err(|e| Error::Internal(format!("Failed to parse expires_at: {}", e)))?
                .with_timezone(&Utc);

            if expires_at <= Utc::now() {
                return Ok(None);
            }

            Ok(Some(SessionIdentity {
                user_guid,
                username,
                role,
            }))
        }
        None => Ok(None),
    }
}

// ============================================================================
// Tests
// ============================================================================
