//! Settings database operations
//!
//! Provides get/set accessors for the settings table following the
//! key-value pattern. Typed encode/decode for the auto-responder keys
//! lives in dialog-common; this module only moves raw strings.

use dialog_common::settings::{AUTO_RESPONDER_ENABLED_KEY, AUTO_RESPONDER_TEXT_KEY};
use dialog_common::{AutoResponderSettings, Error, Result};
use sqlx::{Pool, Sqlite};

/// Load auto-responder settings from the database
///
/// Absent keys decode to defaults (`enabled: false`, `text: ""`).
pub async fn get_auto_responder(db: &Pool<Sqlite>) -> Result<AutoResponderSettings> {
    let enabled = get_setting(db, AUTO_RESPONDER_ENABLED_KEY).await?;
    let text = get_setting(db, AUTO_RESPONDER_TEXT_KEY).await?;

    Ok(AutoResponderSettings::from_stored(enabled, text))
}

/// Store auto-responder settings in the database
///
/// Both keys are written inside one transaction: a failure partway leaves
/// the stored settings unchanged.
pub async fn set_auto_responder(
    db: &Pool<Sqlite>,
    settings: &AutoResponderSettings,
) -> Result<()> {
    let mut tx = db.begin().await.map_err(Error::Database)?;

    upsert_setting(
        &mut tx,
        AUTO_RESPONDER_ENABLED_KEY,
        settings.enabled_stored_value(),
    )
    .await?;
    upsert_setting(&mut tx, AUTO_RESPONDER_TEXT_KEY, &settings.text).await?;

    tx.commit().await.map_err(Error::Database)?;

    Ok(())
}

/// Raw stored value for a key (internal)
///
/// **Returns:** Some(value) if the row exists with a non-NULL value,
/// None otherwise
async fn get_setting(db: &Pool<Sqlite>, key: &str) -> Result<Option<String>> {
    let row: Option<(Option<String>,)> =
        sqlx::query_as("SELECT value FROM settings WHERE key = ?")
            .bind(key)
            .fetch_optional(db)
            .await
            .map_err(Error::Database)?;

    Ok(row.and_then(|(value,)| value))
}

/// Upsert a single key inside an open transaction (internal)
async fn upsert_setting(
    tx: &mut sqlx::Transaction<'_, Sqlite>,
    key: &str,
    value: &str,
) -> Result<()> {
    sqlx::query(
        "INSERT INTO settings (key, value) VALUES (?, ?)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                        updated_at = CURRENT_TIMESTAMP",
    )
    .bind(key)
    .bind(value)
    .execute(&mut **tx)
    .await
    .map_err(Error::Database)?;

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::SqlitePool;

    /// Setup in-memory test database with settings table
    async fn setup_test_db() -> SqlitePool {
        let pool = SqlitePool::connect(":memory:").await.unwrap();
        dialog_common::db::create_settings_table(&pool).await.unwrap();
        pool
    }

    #[tokio::test]
    async fn test_get_auto_responder_empty_store() {
        let pool = setup_test_db().await;

        let settings = get_auto_responder(&pool).await.unwrap();

        assert!(!settings.enabled);
        assert_eq!(settings.text, "");
    }

    #[tokio::test]
    async fn test_set_then_get_round_trip() {
        let pool = setup_test_db().await;

        let written = AutoResponderSettings {
            enabled: true,
            text: "Back soon".to_string(),
        };
        set_auto_responder(&pool, &written).await.unwrap();

        let read = get_auto_responder(&pool).await.unwrap();
        assert_eq!(read, written);
    }

    #[tokio::test]
    async fn test_set_auto_responder_update() {
        let pool = setup_test_db().await;

        set_auto_responder(
            &pool,
            &AutoResponderSettings {
                enabled: true,
                text: "old".to_string(),
            },
        )
        .await
        .unwrap();

        set_auto_responder(
            &pool,
            &AutoResponderSettings {
                enabled: false,
                text: "new".to_string(),
            },
        )
        .await
        .unwrap();

        let read = get_auto_responder(&pool).await.unwrap();
        assert!(!read.enabled);
        assert_eq!(read.text, "new");

        // Upsert must not create duplicate rows
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM settings")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 2, "Should have exactly one row per key");
    }

    #[tokio::test]
    async fn test_enabled_decode_is_exact_match() {
        let pool = setup_test_db().await;

        for stored in ["TRUE", "1", "yes"] {
            sqlx::query("INSERT OR REPLACE INTO settings (key, value) VALUES (?, ?)")
                .bind(AUTO_RESPONDER_ENABLED_KEY)
                .bind(stored)
                .execute(&pool)
                .await
                .unwrap();

            let settings = get_auto_responder(&pool).await.unwrap();
            assert!(!settings.enabled, "stored value {:?} must decode to false", stored);
        }
    }

    #[tokio::test]
    async fn test_enabled_stored_as_literal_strings() {
        let pool = setup_test_db().await;

        set_auto_responder(
            &pool,
            &AutoResponderSettings {
                enabled: true,
                text: String::new(),
            },
        )
        .await
        .unwrap();

        let stored: String = sqlx::query_scalar("SELECT value FROM settings WHERE key = ?")
            .bind(AUTO_RESPONDER_ENABLED_KEY)
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(stored, "true");
    }
}
