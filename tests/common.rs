use storefront_backend::{
    api::router::create_router,
    state::AppState,
    config::Config,
    domain::models::event::{DefaultTheme, Event, EventBanner, EventConfig, EventTheme},
    infra::factory::bootstrap_state,
};
use std::sync::Arc;
use axum::{
    body::Body,
    http::{Request, header},
    response::Response,
    Router,
};
use chrono::{Duration, Utc};
use tempfile::TempDir;
use tower::ServiceExt;
use serde_json::Value;

pub const TEST_PIN: &str = "4821";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub state: Arc<AppState>,
    pub dir: TempDir,
}

#[allow(dead_code)]
impl TestApp {
    pub async fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let db_url = format!("sqlite://{}", dir.path().join("storefront.db").display());

        let config = Config {
            port: 0,
            event_store_url: db_url,
            event_store_write_url: None,
            event_store_token: None,
            admin_pin: TEST_PIN.to_string(),
            timezone: chrono_tz::UTC,
            event_refresh_secs: 60,
            whatsapp_number: "919526689880".to_string(),
            store_name: "Hamper World".to_string(),
        };

        let state = Arc::new(bootstrap_state(&config).await);
        state.engine.refresh(Utc::now()).await;

        let router = create_router(state.clone());

        Self { router, state, dir }
    }

    /// Installs `events` directly, bypassing the admin API.
    pub async fn seed(&self, events: Vec<Event>) {
        let config = EventConfig { events, default_theme: DefaultTheme::default() };
        self.state
            .engine
            .replace(config, Utc::now())
            .await
            .expect("Failed to seed events");
    }

    pub async fn send(&self, method: &str, uri: &str, body: Option<Value>, cookie: Option<&str>) -> Response {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let body = match body {
            Some(json) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        self.router.clone().oneshot(builder.body(body).unwrap()).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.send("GET", uri, None, None).await
    }

    /// Logs in with the test PIN and returns a `Cookie` header value.
    pub async fn login(&self) -> String {
        let response = self
            .send("POST", "/api/admin/login", Some(serde_json::json!({ "pin": TEST_PIN })), None)
            .await;

        if !response.status().is_success() {
            panic!("Login failed in test helper: status {}", response.status());
        }

        let token = cookie_value(&response, "admin_session").expect("No admin_session cookie returned");
        format!("admin_session={}", token)
    }
}

/// Value of a cookie set by `response`, if any.
#[allow(dead_code)]
pub fn cookie_value(response: &Response, name: &str) -> Option<String> {
    let prefix = format!("{}=", name);
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|h| h.to_str().ok())
        .find(|c| c.starts_with(&prefix))
        .map(|c| c[prefix.len()..].split(';').next().unwrap_or_default().to_string())
}

#[allow(dead_code)]
pub async fn parse_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// An active event whose window spans today, `offset_days` shifted.
#[allow(dead_code)]
pub fn event_around_today(id: &str, offset_days: i64, discount_percent: i32) -> Event {
    let today = Utc::now().date_naive() + Duration::days(offset_days);
    Event {
        id: id.to_string(),
        name: format!("Event {}", id),
        is_active: true,
        start_date: (today - Duration::days(1)).format("%Y-%m-%d").to_string(),
        end_date: (today + Duration::days(1)).format("%Y-%m-%d").to_string(),
        theme: EventTheme {
            primary_color: "#8B1538".to_string(),
            accent_color: "#E8A0BF".to_string(),
            light_bg: None,
            banner_bg: None,
        },
        banner: EventBanner {
            text: "Festive offers".to_string(),
            link: Some("/collection/featured".to_string()),
            dismissible: Some(true),
        },
        discount_percent,
        hero_override: None,
        featured_products: None,
    }
}
