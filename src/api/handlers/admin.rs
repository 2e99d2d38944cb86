use axum::{extract::{State, Path}, response::IntoResponse, Json, http::StatusCode};
use crate::state::AppState;
use crate::api::dtos::{
    requests::LoginRequest,
    responses::{admin_events, SessionResponse, WriteResponse},
};
use crate::api::extractors::admin::{AdminSession, ADMIN_COOKIE};
use crate::domain::models::event::{Event, EventBanner, EventConfig, EventTheme, HeroOverride};
use crate::domain::services::admin_auth::SESSION_TTL_HOURS;
use crate::domain::services::resolver::{event_status, resolve_current_event};
use crate::domain::services::validation::{validate_event, validate_unique_ids};
use crate::error::AppError;
use chrono::{Duration as ChronoDuration, Utc};
use std::sync::Arc;
use time::Duration;
use tower_cookies::{Cookies, Cookie};
use tower_cookies::cookie::SameSite;
use tracing::{info, warn};

pub async fn login(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let token = match state.admin_auth.login(payload.pin.trim()).await {
        Ok(token) => token,
        Err(e) => {
            warn!("Rejected admin login attempt");
            return Err(e);
        }
    };

    let mut cookie = Cookie::new(ADMIN_COOKIE, token);
    cookie.set_http_only(true);
    cookie.set_same_site(SameSite::Strict);
    cookie.set_path("/");
    cookie.set_max_age(Duration::hours(SESSION_TTL_HOURS));
    cookies.add(cookie);

    info!("Admin logged in");

    Ok(Json(SessionResponse { authenticated: true }))
}

pub async fn logout(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    if let Some(cookie) = cookies.get(ADMIN_COOKIE) {
        state.admin_auth.logout(cookie.value()).await;
    }

    cookies.remove(Cookie::build((ADMIN_COOKIE, "")).path("/").into());

    info!("Admin logged out");

    Ok(StatusCode::OK)
}

pub async fn session(
    State(state): State<Arc<AppState>>,
    cookies: Cookies,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = match cookies.get(ADMIN_COOKIE) {
        Some(cookie) => state.admin_auth.is_valid(cookie.value()).await,
        None => false,
    };
    Ok(Json(SessionResponse { authenticated }))
}

/// Events with their live/scheduled/inactive status as of now.
pub async fn list_events(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
) -> Result<impl IntoResponse, AppError> {
    let config = state.engine.config().await;
    let tz = state.engine.timezone();
    let now = Utc::now();

    let statuses = config.events.iter().map(|e| event_status(e, now, tz)).collect();
    let current = resolve_current_event(&config.events, now, tz).map(|e| e.id.clone());

    Ok(Json(admin_events(config, statuses, current)))
}

/// Draft for the "new event" form.
pub async fn event_template(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
) -> Result<impl IntoResponse, AppError> {
    let now = Utc::now();
    let today = now.with_timezone(&state.engine.timezone()).date_naive();

    Ok(Json(Event {
        id: format!("event-{}", now.timestamp_millis()),
        name: "New Event".to_string(),
        is_active: false,
        start_date: today.format("%Y-%m-%d").to_string(),
        end_date: (today + ChronoDuration::days(7)).format("%Y-%m-%d").to_string(),
        theme: EventTheme {
            primary_color: "#1a1a2e".to_string(),
            accent_color: "#c9a962".to_string(),
            light_bg: None,
            banner_bg: Some("linear-gradient(135deg, #1a1a2e 0%, #c9a962 100%)".to_string()),
        },
        banner: EventBanner {
            text: "🎉 Special Offer!".to_string(),
            link: Some("/collection/all".to_string()),
            dismissible: Some(true),
        },
        discount_percent: 10,
        hero_override: Some(HeroOverride::default()),
        featured_products: None,
    }))
}

pub async fn upsert_event(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
    Path(id): Path<String>,
    Json(mut payload): Json<Event>,
) -> Result<impl IntoResponse, AppError> {
    payload.id = id;
    validate_event(&payload)?;

    let (existed, config) = state
        .engine
        .edit(Utc::now(), |config| {
            let existed = config.find(&payload.id).is_some();
            config.upsert(payload);
            validate_unique_ids(&config.events)?;
            Ok(existed)
        })
        .await?;

    let message = if existed { "Event updated" } else { "Event created" };
    Ok(written(message, config))
}

pub async fn toggle_event(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (now_active, config) = state
        .engine
        .edit(Utc::now(), |config| {
            config
                .toggle_active(&id)
                .map(|e| e.is_active)
                .ok_or_else(|| AppError::NotFound(format!("Event '{}' not found", id)))
        })
        .await?;

    let message = if now_active { "Event activated" } else { "Event deactivated" };
    Ok(written(message, config))
}

pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let (_, config) = state
        .engine
        .edit(Utc::now(), |config| {
            config
                .remove(&id)
                .ok_or_else(|| AppError::NotFound(format!("Event '{}' not found", id)))
        })
        .await?;

    Ok(written("Event deleted", config))
}

fn written(message: &str, config: EventConfig) -> Json<WriteResponse<EventConfig>> {
    info!("{}", message);
    Json(WriteResponse::ok(message, config))
}
