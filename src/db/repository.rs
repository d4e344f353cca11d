//! Key/value preference storage.

use chrono::Utc;
use serde::Serialize;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;

/// Storage key of the dark-mode flag.
pub const DARK_MODE_KEY: &str = "darkMode";

/// A stored preference value with its last write time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DarkModePreference {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Database repository for preferences.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn get_preference(&self, key: &str) -> Result<Option<(String, String)>, AppError> {
        let row = sqlx::query("SELECT value, updated_at FROM preferences WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| (row.get("value"), row.get("updated_at"))))
    }

    pub async fn set_preference(&self, key: &str, value: &str) -> Result<String, AppError> {
        let now = Utc::now().to_rfc3339();
        sqlx::query(
            "INSERT INTO preferences (key, value, updated_at) VALUES (?, ?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        )
        .bind(key)
        .bind(value)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        tracing::debug!("Stored preference {} = {}", key, value);
        Ok(now)
    }

    /// Anything but the literal `"true"` reads as disabled.
    pub async fn get_dark_mode(&self) -> Result<DarkModePreference, AppError> {
        let stored = self.get_preference(DARK_MODE_KEY).await?;
        Ok(match stored {
            Some((value, updated_at)) => DarkModePreference {
                enabled: value == "true",
                updated_at: Some(updated_at),
            },
            None => DarkModePreference {
                enabled: false,
                updated_at: None,
            },
        })
    }

    pub async fn set_dark_mode(&self, enabled: bool) -> Result<DarkModePreference, AppError> {
        let value = if enabled { "true" } else { "false" };
        let updated_at = self.set_preference(DARK_MODE_KEY, value).await?;
        Ok(DarkModePreference {
            enabled,
            updated_at: Some(updated_at),
        })
    }
}
