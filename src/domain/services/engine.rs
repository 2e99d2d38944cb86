use std::sync::Arc;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use tokio::sync::{watch, Mutex, RwLock};
use tracing::{info, warn};
use crate::domain::models::event::EventConfig;
use crate::domain::models::theme::StorefrontState;
use crate::domain::ports::EventStore;
use crate::domain::services::resolver::resolve_current_event;
use crate::domain::services::theme::ThemeState;
use crate::error::AppError;

/// Holds the last loaded events document and keeps the published
/// storefront state in step with it.
pub struct EventEngine {
    store: Arc<dyn EventStore>,
    tz: Tz,
    config: RwLock<EventConfig>,
    theme: ThemeState,
    writes: Mutex<()>,
}

impl EventEngine {
    pub fn new(store: Arc<dyn EventStore>, tz: Tz) -> Self {
        Self {
            store,
            tz,
            config: RwLock::new(EventConfig::default()),
            theme: ThemeState::new(),
            writes: Mutex::new(()),
        }
    }

    pub fn timezone(&self) -> Tz {
        self.tz
    }

    /// Reloads from the store. A failed load degrades to an empty document,
    /// which shows the site as if no promotion were running.
    pub async fn refresh(&self, now: DateTime<Utc>) -> StorefrontState {
        let loaded = match self.store.load().await {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load events, falling back to baseline theme: {}", e);
                EventConfig::default()
            }
        };

        *self.config.write().await = loaded;
        self.reconcile(now).await
    }

    /// Re-resolves the current event against the cached document.
    pub async fn reconcile(&self, now: DateTime<Utc>) -> StorefrontState {
        let config = self.config.read().await;
        let current = resolve_current_event(&config.events, now, self.tz);

        if self.theme.apply(current, &config.default_theme) {
            match current {
                Some(event) => info!(event_id = %event.id, "Current event is now '{}'", event.name),
                None => info!("No event is current, baseline theme applied"),
            }
        }
        self.theme.current()
    }

    /// Installs `config` in memory, then persists it. When the save fails
    /// the in-memory document is kept until the next reload.
    pub async fn replace(&self, config: EventConfig, now: DateTime<Utc>) -> Result<(), AppError> {
        let _writes = self.writes.lock().await;
        self.install_and_save(config, now).await
    }

    /// Read-modify-write against the stored document. The edit starts from a
    /// fresh `load`, never from the cache, which may be the empty fallback
    /// after a failed reload. A load failure aborts the write.
    pub async fn edit<T, F>(&self, now: DateTime<Utc>, apply: F) -> Result<(T, EventConfig), AppError>
    where
        F: FnOnce(&mut EventConfig) -> Result<T, AppError>,
    {
        let _writes = self.writes.lock().await;
        let mut config = self.store.load().await?;
        let outcome = apply(&mut config)?;
        self.install_and_save(config.clone(), now).await?;
        Ok((outcome, config))
    }

    async fn install_and_save(&self, config: EventConfig, now: DateTime<Utc>) -> Result<(), AppError> {
        *self.config.write().await = config.clone();
        self.reconcile(now).await;
        self.store.save(&config).await
    }

    pub async fn config(&self) -> EventConfig {
        self.config.read().await.clone()
    }

    pub fn current(&self) -> StorefrontState {
        self.theme.current()
    }

    pub fn subscribe(&self) -> watch::Receiver<StorefrontState> {
        self.theme.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{Duration, TimeZone};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Mutex;
    use crate::domain::models::event::{DefaultTheme, Event, EventBanner, EventTheme};

    struct StubStore {
        doc: Mutex<Option<EventConfig>>,
        fail_save: bool,
        fail_load: AtomicBool,
    }

    impl StubStore {
        fn holding(doc: Option<EventConfig>, fail_save: bool) -> Arc<Self> {
            Arc::new(Self { doc: Mutex::new(doc), fail_save, fail_load: AtomicBool::new(false) })
        }

        fn ids(&self) -> Vec<String> {
            self.doc
                .lock()
                .unwrap()
                .as_ref()
                .map(|c| c.events.iter().map(|e| e.id.clone()).collect())
                .unwrap_or_default()
        }
    }

    #[async_trait]
    impl EventStore for StubStore {
        async fn load(&self) -> Result<EventConfig, AppError> {
            if self.fail_load.load(Ordering::SeqCst) {
                return Err(AppError::Store("connection reset".into()));
            }
            self.doc
                .lock()
                .unwrap()
                .clone()
                .ok_or_else(|| AppError::Store("unreachable".into()))
        }

        async fn save(&self, config: &EventConfig) -> Result<(), AppError> {
            if self.fail_save {
                return Err(AppError::Store("write rejected".into()));
            }
            *self.doc.lock().unwrap() = Some(config.clone());
            Ok(())
        }
    }

    fn config_with_event(start: &str, end: &str) -> EventConfig {
        EventConfig {
            events: vec![Event {
                id: "diwali-2024".to_string(),
                name: "Diwali Lights".to_string(),
                is_active: true,
                start_date: start.to_string(),
                end_date: end.to_string(),
                theme: EventTheme {
                    primary_color: "#6A1B9A".to_string(),
                    accent_color: "#FFB300".to_string(),
                    light_bg: None,
                    banner_bg: None,
                },
                banner: EventBanner { text: "Festive offers".to_string(), link: None, dismissible: Some(true) },
                discount_percent: 25,
                hero_override: None,
                featured_products: None,
            }],
            default_theme: DefaultTheme::default(),
        }
    }

    fn noon(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_refresh_resolves_current_event() {
        let store = StubStore::holding(Some(config_with_event("2024-10-28", "2024-11-03")), false);
        let engine = EventEngine::new(store, chrono_tz::UTC);

        let state = engine.refresh(noon(2024, 10, 30)).await;
        assert_eq!(state.current_event.unwrap().id, "diwali-2024");
        assert_eq!(state.discount_percent, 25);
        assert_eq!(state.tokens.primary, "#6A1B9A");

        let later = engine.reconcile(noon(2024, 11, 3) + Duration::hours(12)).await;
        assert!(later.current_event.is_none());
        assert_eq!(later.tokens.primary, "#043927");
    }

    #[tokio::test]
    async fn test_failed_load_degrades_to_baseline() {
        let store = StubStore::holding(None, false);
        let engine = EventEngine::new(store, chrono_tz::UTC);

        let state = engine.refresh(noon(2024, 10, 30)).await;
        assert!(!state.is_event_active());
        assert!(engine.config().await.events.is_empty());
    }

    #[tokio::test]
    async fn test_failed_save_keeps_in_memory_document() {
        let store = StubStore::holding(Some(EventConfig::default()), true);
        let engine = EventEngine::new(store.clone(), chrono_tz::UTC);
        engine.refresh(noon(2024, 10, 30)).await;

        let result = engine.replace(config_with_event("2024-10-28", "2024-11-03"), noon(2024, 10, 30)).await;
        assert!(result.is_err());
        assert_eq!(engine.config().await.events.len(), 1);
        assert!(engine.current().is_event_active());

        // The store never saw the write; the next reload brings the site back in line.
        let state = engine.refresh(noon(2024, 10, 30)).await;
        assert!(!state.is_event_active());
    }

    fn config_with_ids(ids: &[&str]) -> EventConfig {
        let template = config_with_event("2024-10-28", "2024-11-03").events.remove(0);
        EventConfig {
            events: ids
                .iter()
                .map(|id| Event { id: id.to_string(), ..template.clone() })
                .collect(),
            default_theme: DefaultTheme::default(),
        }
    }

    #[tokio::test]
    async fn test_edit_after_failed_reload_keeps_stored_events() {
        let store = StubStore::holding(Some(config_with_ids(&["a", "b", "c"])), false);
        let engine = EventEngine::new(store.clone(), chrono_tz::UTC);
        engine.refresh(noon(2024, 10, 30)).await;

        store.fail_load.store(true, Ordering::SeqCst);
        engine.refresh(noon(2024, 10, 30)).await;
        assert!(engine.config().await.events.is_empty());

        let new_event = config_with_ids(&["new"]).events.remove(0);
        let result = engine
            .edit(noon(2024, 10, 30), |config| {
                config.upsert(new_event.clone());
                Ok(())
            })
            .await;
        assert!(matches!(result, Err(AppError::Store(_))));
        assert_eq!(store.ids(), vec!["a", "b", "c"]);

        store.fail_load.store(false, Ordering::SeqCst);
        let (_, saved) = engine
            .edit(noon(2024, 10, 30), |config| {
                config.upsert(new_event);
                Ok(())
            })
            .await
            .unwrap();
        assert_eq!(saved.events.len(), 4);
        assert_eq!(store.ids(), vec!["a", "b", "c", "new"]);
        assert_eq!(engine.config().await.events.len(), 4);
    }

    #[tokio::test]
    async fn test_rejected_edit_writes_nothing() {
        let store = StubStore::holding(Some(config_with_ids(&["a"])), false);
        let engine = EventEngine::new(store.clone(), chrono_tz::UTC);

        let result: Result<((), EventConfig), AppError> = engine
            .edit(noon(2024, 10, 30), |config| {
                config.events.clear();
                Err(AppError::NotFound("missing".into()))
            })
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(store.ids(), vec!["a"]);
    }
}
