use std::io::ErrorKind;
use std::path::PathBuf;
use crate::domain::{models::event::EventConfig, ports::EventStore};
use crate::error::AppError;
use async_trait::async_trait;
use tracing::info;

/// Document shipped with the build, used until the first save.
pub const SEED_EVENTS: &str = include_str!("../../../data/events.json");

pub struct FileEventStore {
    path: PathBuf,
}

impl FileEventStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn seed() -> Result<EventConfig, AppError> {
        serde_json::from_str(SEED_EVENTS)
            .map_err(|e| AppError::Store(format!("Invalid seed events document: {}", e)))
    }
}

#[async_trait]
impl EventStore for FileEventStore {
    async fn load(&self) -> Result<EventConfig, AppError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!("{} not found, using seed events", self.path.display());
                return Self::seed();
            }
            Err(e) => return Err(AppError::Store(format!("Failed to read {}: {}", self.path.display(), e))),
        };

        serde_json::from_str(&raw)
            .map_err(|e| AppError::Store(format!("Invalid events document in {}: {}", self.path.display(), e)))
    }

    async fn save(&self, config: &EventConfig) -> Result<(), AppError> {
        let body = serde_json::to_string_pretty(config)
            .map_err(|e| AppError::Store(format!("Failed to encode events: {}", e)))?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| AppError::Store(format!("Failed to create {}: {}", dir.display(), e)))?;
        }

        // Written beside the target so the rename stays on one filesystem.
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, body)
            .await
            .map_err(|e| AppError::Store(format!("Failed to write {}: {}", tmp.display(), e)))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| AppError::Store(format!("Failed to replace {}: {}", self.path.display(), e)))
    }
}
