use axum::{extract::{State, Path, Query}, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::{
    requests::{ProductDetailQuery, ProductListQuery, SuggestQuery},
    responses::ProductView,
};
use crate::domain::models::product::VariantCategory;
use crate::domain::services::catalog::SUGGESTION_LIMIT;
use crate::error::AppError;
use chrono::Utc;
use std::sync::Arc;

pub async fn list_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ProductListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let query = params.into_catalog_query()?;
    let resolved = state.engine.reconcile(Utc::now()).await;
    let current = resolved.current_event.as_ref();

    let page = state
        .catalog
        .search(&query)
        .map(|p| ProductView::build(p, current, None));

    Ok(Json(page))
}

pub async fn get_product(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Query(params): Query<ProductDetailQuery>,
) -> Result<impl IntoResponse, AppError> {
    let category = params
        .category
        .filter(|c| !c.trim().is_empty())
        .map(|c| c.parse::<VariantCategory>())
        .transpose()
        .map_err(AppError::Validation)?;

    let product = state
        .catalog
        .find(&id)
        .ok_or_else(|| AppError::NotFound(format!("Product '{}' not found", id)))?;

    let resolved = state.engine.reconcile(Utc::now()).await;
    Ok(Json(ProductView::build(product, resolved.current_event.as_ref(), category)))
}

pub async fn suggest_products(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SuggestQuery>,
) -> Result<impl IntoResponse, AppError> {
    let resolved = state.engine.reconcile(Utc::now()).await;
    let current = resolved.current_event.as_ref();

    let products: Vec<ProductView> = state
        .catalog
        .suggest(params.q.as_deref().unwrap_or_default(), SUGGESTION_LIMIT)
        .into_iter()
        .map(|p| ProductView::build(p, current, None))
        .collect();

    Ok(Json(products))
}

pub async fn list_sizes(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    Ok(Json(state.catalog.available_sizes()))
}
