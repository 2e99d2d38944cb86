use crate::domain::ports::{dismissal_key, DismissalStore};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

pub struct SqliteDismissalStore {
    pool: SqlitePool,
}

impl SqliteDismissalStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DismissalStore for SqliteDismissalStore {
    async fn is_dismissed(&self, client_id: &str, event_id: &str) -> Result<bool, AppError> {
        let found: Option<(String,)> = sqlx::query_as(
            "SELECT dismissal_key FROM banner_dismissals WHERE client_id = ? AND dismissal_key = ?",
        )
            .bind(client_id)
            .bind(dismissal_key(event_id))
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(found.is_some())
    }

    async fn dismiss(&self, client_id: &str, event_id: &str) -> Result<(), AppError> {
        sqlx::query(
            "INSERT INTO banner_dismissals (client_id, dismissal_key, dismissed_at) VALUES (?, ?, ?)
            ON CONFLICT(client_id, dismissal_key) DO NOTHING",
        )
            .bind(client_id)
            .bind(dismissal_key(event_id))
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        Ok(())
    }
}
