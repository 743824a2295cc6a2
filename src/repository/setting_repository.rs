use anyhow::Result;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;
use tracing::debug;

use crate::domain::setting::Setting;

#[derive(Clone)]
pub struct SettingRepository {
    pool: Arc<SqlitePool>,
}

impl SettingRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    pub async fn create(&self, setting: &Setting) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO settings (key, value) VALUES (?, ?)")
            .bind(&setting.key)
            .bind(&setting.value)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    pub async fn find(&self, key: &str) -> Result<Option<Setting>> {
        let row = sqlx::query("SELECT key, value FROM settings WHERE key = ?")
            .bind(key)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(|row| Setting {
            key: row.get("key"),
            value: row.get("value"),
        }))
    }

    pub async fn list_all(&self) -> Result<Vec<Setting>> {
        let rows = sqlx::query("SELECT key, value FROM settings ORDER BY key")
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| Setting {
                key: row.get("key"),
                value: row.get("value"),
            })
            .collect())
    }

    /// Rewrites the value of an existing row. Returns false when no row
    /// matched the key.
    pub async fn update(&self, setting: &Setting) -> Result<bool> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE settings SET value = ? WHERE key = ?")
            .bind(&setting.value)
            .bind(&setting.key)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn remove(&self, key: &str) -> Result<bool> {
        let result = sqlx::query("DELETE FROM settings WHERE key = ?")
            .bind(key)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes every row in its own transaction. Safe to call on an empty
    /// table.
    pub async fn clear(&self) -> Result<u64> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM settings").execute(&mut *tx).await?;

        tx.commit().await?;
        debug!("cleared {} settings rows", result.rows_affected());
        Ok(result.rows_affected())
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM settings")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
