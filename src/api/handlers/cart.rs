use axum::{extract::State, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::CheckoutRequest;
use crate::error::AppError;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;

/// Prices the submitted lines and returns the WhatsApp hand-off link.
pub async fn checkout(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CheckoutRequest>,
) -> Result<impl IntoResponse, AppError> {
    let resolved = state.engine.reconcile(Utc::now()).await;

    let cart = state
        .checkout
        .build_cart(&state.catalog, resolved.current_event.as_ref(), &payload.items)?;
    let handoff = state.checkout.compose(&cart)?;

    info!(
        total_items = handoff.total_items,
        total_price = handoff.total_price,
        "Order hand-off prepared"
    );

    Ok(Json(handoff))
}
