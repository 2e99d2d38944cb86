use std::sync::Arc;
use std::time::Duration;
use chrono::Utc;
use tokio::time::sleep;
use tracing::{debug, info, info_span, Instrument};
use crate::state::AppState;

/// Reloads the events document on a fixed period so edits made elsewhere,
/// and day boundaries, reach the storefront without a restart.
pub async fn start_background_worker(state: Arc<AppState>) {
    let period = Duration::from_secs(state.config.event_refresh_secs.max(1));
    info!("Starting event refresh worker, period {:?}", period);

    loop {
        sleep(period).await;

        let engine = state.engine.clone();
        async move {
            let resolved = engine.refresh(Utc::now()).await;
            debug!(
                event_id = resolved.current_event.as_ref().map(|e| e.id.as_str()).unwrap_or("none"),
                "Event refresh complete"
            );
        }
            .instrument(info_span!("event_refresh"))
            .await;
    }
}
