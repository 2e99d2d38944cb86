use crate::domain::{models::event::EventConfig, ports::EventStore};
use crate::error::AppError;
use crate::infra::repositories::event_row::{ConfigRows, EventRow, StoreConfigRow};
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteEventStore {
    pool: SqlitePool,
}

impl SqliteEventStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventStore for SqliteEventStore {
    async fn load(&self) -> Result<EventConfig, AppError> {
        let store = sqlx::query_as::<_, StoreConfigRow>(
            "SELECT default_primary_color, default_accent_color FROM store_config WHERE id = 1",
        )
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let events = sqlx::query_as::<_, EventRow>("SELECT * FROM events ORDER BY position ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let store = store.unwrap_or_else(|| ConfigRows::from_config(&EventConfig::default()).store);
        Ok(ConfigRows { store, events }.into_config())
    }

    async fn save(&self, config: &EventConfig) -> Result<(), AppError> {
        let rows = ConfigRows::from_config(config);
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        sqlx::query(
            r#"INSERT INTO store_config (id, default_primary_color, default_accent_color)
            VALUES (1, ?, ?)
            ON CONFLICT(id) DO UPDATE SET
                default_primary_color = excluded.default_primary_color,
                default_accent_color = excluded.default_accent_color"#,
        )
            .bind(&rows.store.default_primary_color)
            .bind(&rows.store.default_accent_color)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM events").execute(&mut *tx).await?;

        for row in &rows.events {
            sqlx::query(
                r#"INSERT INTO events (
                    id, position, name, is_active, start_date, end_date,
                    primary_color, accent_color, light_bg, banner_bg,
                    banner_text, banner_link, banner_dismissible, discount_percent,
                    hero_headline, hero_tagline, hero_image, featured_products
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)"#,
            )
                .bind(&row.id)
                .bind(row.position)
                .bind(&row.name)
                .bind(row.is_active)
                .bind(&row.start_date)
                .bind(&row.end_date)
                .bind(&row.primary_color)
                .bind(&row.accent_color)
                .bind(&row.light_bg)
                .bind(&row.banner_bg)
                .bind(&row.banner_text)
                .bind(&row.banner_link)
                .bind(row.banner_dismissible)
                .bind(row.discount_percent)
                .bind(&row.hero_headline)
                .bind(&row.hero_tagline)
                .bind(&row.hero_image)
                .bind(&row.featured_products)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await.map_err(AppError::Database)
    }
}
