use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::{postgres::{PgPoolOptions, PgConnectOptions}, sqlite::{SqlitePoolOptions, SqliteJournalMode, SqliteConnectOptions}};
use sqlx::{PgPool, SqlitePool, ConnectOptions};
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::state::AppState;
use crate::domain::ports::{DismissalStore, EventStore};
use crate::domain::services::{admin_auth::AdminAuth, checkout::CheckoutService, engine::EventEngine};
use crate::infra::catalog::load_catalog;
use crate::infra::repositories::{
    file_event_store::FileEventStore, kv_event_store::KvEventStore,
    memory_dismissal_store::MemoryDismissalStore,
    postgres_dismissal_store::PostgresDismissalStore, postgres_event_store::PostgresEventStore,
    sqlite_dismissal_store::SqliteDismissalStore, sqlite_event_store::SqliteEventStore,
};

pub async fn bootstrap_state(config: &Config) -> AppState {
    let url = &config.event_store_url;

    let (event_store, dismissal_store): (Arc<dyn EventStore>, Arc<dyn DismissalStore>) =
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            info!("Initializing PostgreSQL connection...");

            let mut opts: PgConnectOptions = url.parse().expect("Invalid Postgres URL");
            opts = opts.log_statements(LevelFilter::Debug)
                .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

            let pool = PgPoolOptions::new()
                .max_connections(10)
                .connect_with(opts)
                .await
                .expect("Failed to connect to Postgres");

            run_postgres_migrations(&pool).await;

            (
                Arc::new(PostgresEventStore::new(pool.clone())),
                Arc::new(PostgresDismissalStore::new(pool)),
            )
        } else if url.starts_with("sqlite:") {
            info!("Initializing SQLite connection with WAL Mode...");

            let opts = SqliteConnectOptions::from_str(url)
                .expect("Invalid SQLite connection string")
                .create_if_missing(true)
                .journal_mode(SqliteJournalMode::Wal)
                .busy_timeout(Duration::from_secs(5))
                .log_statements(LevelFilter::Debug)
                .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

            let pool = SqlitePoolOptions::new()
                .max_connections(5)
                .connect_with(opts)
                .await
                .expect("Failed to connect to SQLite");

            run_sqlite_migrations(&pool).await;

            (
                Arc::new(SqliteEventStore::new(pool.clone())),
                Arc::new(SqliteDismissalStore::new(pool)),
            )
        } else if url.starts_with("http://") || url.starts_with("https://") {
            info!("Using key-value config service at {}", url);
            (
                Arc::new(KvEventStore::new(
                    url.clone(),
                    config.event_store_write_url.clone(),
                    config.event_store_token.clone(),
                )),
                Arc::new(MemoryDismissalStore::new()),
            )
        } else {
            let path = url.strip_prefix("file://").unwrap_or(url);
            info!("Using events file {}", path);
            (
                Arc::new(FileEventStore::new(path)),
                Arc::new(MemoryDismissalStore::new()),
            )
        };

    assemble_state(config, event_store, dismissal_store)
}

/// Wires services around already-built stores.
pub fn assemble_state(
    config: &Config,
    event_store: Arc<dyn EventStore>,
    dismissal_store: Arc<dyn DismissalStore>,
) -> AppState {
    let catalog = load_catalog().expect("Failed to load product catalog");
    let checkout = CheckoutService::new(config.store_name.clone(), config.whatsapp_number.clone())
        .expect("Failed to load order template");

    AppState {
        config: config.clone(),
        engine: Arc::new(EventEngine::new(event_store, config.timezone)),
        dismissal_store,
        catalog: Arc::new(catalog),
        admin_auth: Arc::new(AdminAuth::new(&config.admin_pin)),
        checkout: Arc::new(checkout),
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
