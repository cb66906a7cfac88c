//! Database initialization
//!
//! Opens (or creates on first run) the shared dialog.db and brings the
//! schema up idempotently. All table creation uses CREATE TABLE IF NOT
//! EXISTS so startup is safe against an existing database.

use crate::Result;
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
use std::path::Path;
use tracing::info;

/// Well-known guid of the seeded Anonymous user
pub const ANONYMOUS_USER_GUID: &str = "00000000-0000-0000-0000-000000000001";

/// Initialize database connection and create tables if needed
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Use sqlite options to create database if it doesn't exist
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());
    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect(&db_url)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    // Enable foreign keys
    sqlx::query("PRAGMA foreign_keys = ON").execute(&pool).await?;

    // WAL mode allows concurrent readers with one writer
    sqlx::query("PRAGMA journal_mode = WAL").execute(&pool).await?;

    // Set busy timeout
    sqlx::query("PRAGMA busy_timeout = 5000").execute(&pool).await?;

    create_tables(&pool).await?;

    Ok(pool)
}

/// Create all tables used by the admin service (idempotent)
pub async fn create_tables(pool: &SqlitePool) -> Result<()> {
    create_users_table(pool).await?;
    create_sessions_table(pool).await?;
    create_settings_table(pool).await?;
    Ok(())
}

/// Create the users table
///
/// `role` holds the caller's role value; the admin interface requires
/// `dialog_admin`. User creation and role assignment happen outside this
/// service.
pub async fn create_users_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            guid TEXT PRIMARY KEY,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            password_salt TEXT NOT NULL,
            role TEXT NOT NULL DEFAULT 'user',
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Create Anonymous user if it doesn't exist
    sqlx::query(
        r#"
        INSERT OR IGNORE INTO users (guid, username, password_hash, password_salt, role)
        VALUES (?, 'Anonymous', '', '', 'user')
        "#,
    )
    .bind(ANONYMOUS_USER_GUID)
    .execute(pool)
    .await?;

    Ok(())
}

/// Create the sessions table
///
/// Sessions are issued elsewhere; this service only validates them.
/// `expires_at` is RFC 3339 text.
pub async fn create_sessions_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS sessions (
            token TEXT PRIMARY KEY,
            user_guid TEXT NOT NULL REFERENCES users(guid),
            created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
            expires_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Create the settings table
///
/// Stores application configuration key-value pairs. Auto-responder keys
/// are not seeded here: absence is meaningful and read-side defaults apply.
pub async fn create_settings_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT,
            updated_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
