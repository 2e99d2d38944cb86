use axum::{extract::State, response::IntoResponse, Json, http::StatusCode};
use crate::state::AppState;
use crate::api::dtos::responses::StorefrontResponse;
use crate::api::extractors::client::ClientId;
use crate::error::AppError;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

/// Theme tokens, banner and hero for this visitor right now.
pub async fn get_storefront(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
) -> Result<impl IntoResponse, AppError> {
    let resolved = state.engine.reconcile(Utc::now()).await;

    let dismissed = match &resolved.current_event {
        Some(event) if event.banner.is_dismissible() => {
            state.dismissal_store.is_dismissed(&client_id, &event.id).await?
        }
        _ => false,
    };

    Ok(Json(StorefrontResponse::build(resolved, dismissed)))
}

pub async fn dismiss_banner(
    State(state): State<Arc<AppState>>,
    ClientId(client_id): ClientId,
) -> Result<impl IntoResponse, AppError> {
    let resolved = state.engine.reconcile(Utc::now()).await;
    let event = resolved
        .current_event
        .ok_or_else(|| AppError::NotFound("No event is running".into()))?;

    if !event.banner.is_dismissible() {
        return Err(AppError::Validation(format!("Banner for '{}' cannot be dismissed", event.id)));
    }

    state.dismissal_store.dismiss(&client_id, &event.id).await?;
    info!(event_id = %event.id, "Banner dismissed");

    Ok(StatusCode::NO_CONTENT)
}
