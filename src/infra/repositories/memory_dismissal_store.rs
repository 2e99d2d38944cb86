use std::collections::HashSet;
use crate::domain::ports::{dismissal_key, DismissalStore};
use crate::error::AppError;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Dismissals kept for the life of the process. Used when events live in a
/// file or the key-value service and there is no database to hold them.
#[derive(Default)]
pub struct MemoryDismissalStore {
    flags: RwLock<HashSet<(String, String)>>,
}

impl MemoryDismissalStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DismissalStore for MemoryDismissalStore {
    async fn is_dismissed(&self, client_id: &str, event_id: &str) -> Result<bool, AppError> {
        let key = (client_id.to_string(), dismissal_key(event_id));
        Ok(self.flags.read().await.contains(&key))
    }

    async fn dismiss(&self, client_id: &str, event_id: &str) -> Result<(), AppError> {
        self.flags
            .write()
            .await
            .insert((client_id.to_string(), dismissal_key(event_id)));
        Ok(())
    }
}
