use crate::domain::models::event::EventConfig;
use crate::error::AppError;
use async_trait::async_trait;

/// Persists the promotional events document as a whole.
///
/// Writes replace the entire document; there is no version check, so the
/// last writer wins when two admins edit concurrently.
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn load(&self) -> Result<EventConfig, AppError>;
    async fn save(&self, config: &EventConfig) -> Result<(), AppError>;
}

/// Per-client banner dismissal flags, independent of the event store.
#[async_trait]
pub trait DismissalStore: Send + Sync {
    async fn is_dismissed(&self, client_id: &str, event_id: &str) -> Result<bool, AppError>;
    async fn dismiss(&self, client_id: &str, event_id: &str) -> Result<(), AppError>;
}

pub fn dismissal_key(event_id: &str) -> String {
    format!("banner_dismissed_{}", event_id)
}
