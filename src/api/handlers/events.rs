use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::responses::WriteResponse;
use crate::api::extractors::admin::AdminSession;
use crate::domain::models::event::EventConfig;
use crate::domain::services::validation::validate_config;
use crate::error::AppError;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

/// Last loaded events document.
pub async fn get_events(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.engine.config().await))
}

/// Replaces the whole document.
pub async fn put_events(
    State(state): State<Arc<AppState>>,
    _admin: AdminSession,
    Json(payload): Json<EventConfig>,
) -> Result<impl IntoResponse, AppError> {
    validate_config(&payload)?;

    info!("Replacing events document ({} events)", payload.events.len());
    state.engine.replace(payload.clone(), Utc::now()).await?;

    Ok(Json(WriteResponse::ok("Events updated successfully", payload)))
}
