use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::ProductListQuery,
    responses::{CollectionResponse, FeaturedResponse, ProductView},
};
use crate::domain::models::catalog::CollectionKind;
use crate::domain::services::catalog::SIGNATURE_LIMIT;
use crate::error::AppError;
use chrono::Utc;
use std::sync::Arc;

pub async fn get_collection(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    Query(params): Query<ProductListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let kind = CollectionKind::from_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Collection '{}' not found", slug)))?;
    let query = params.into_catalog_query()?;

    let resolved = state.engine.reconcile(Utc::now()).await;
    let current = resolved.current_event.as_ref();

    let products = state
        .catalog
        .collection(kind, &query)
        .map(|p| ProductView::build(p, current, None));

    Ok(Json(CollectionResponse {
        slug,
        title: kind.title().to_string(),
        description: kind.description().to_string(),
        products,
    }))
}

/// The running event's picks, in the order the admin listed them.
pub async fn featured(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let resolved = state.engine.reconcile(Utc::now()).await;

    let Some(event) = resolved.current_event.as_ref() else {
        return Ok(Json(FeaturedResponse { active: false, event_name: None, products: Vec::new() }));
    };

    let ids = event.featured_products.as_deref().unwrap_or_default();
    let products = state
        .catalog
        .featured(ids)
        .into_iter()
        .map(|p| ProductView::build(p, Some(event), None))
        .collect();

    Ok(Json(FeaturedResponse {
        active: true,
        event_name: Some(event.name.clone()),
        products,
    }))
}

pub async fn signature(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let resolved = state.engine.reconcile(Utc::now()).await;
    let current = resolved.current_event.as_ref();

    let products: Vec<ProductView> = state
        .catalog
        .signature(SIGNATURE_LIMIT)
        .into_iter()
        .map(|p| ProductView::build(p, current, None))
        .collect();

    Ok(Json(products))
}
