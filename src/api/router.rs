use axum::{
    body::Body,
    extract::Request,
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{health, events, admin, storefront, products, collections, cart};
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tower_cookies::CookieManagerLayer;
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Events document
        .route("/api/events", get(events::get_events).put(events::put_events))

        // Admin
        .route("/api/admin/login", post(admin::login))
        .route("/api/admin/logout", post(admin::logout))
        .route("/api/admin/session", get(admin::session))
        .route("/api/admin/events", get(admin::list_events))
        .route("/api/admin/events/template", get(admin::event_template))
        .route("/api/admin/events/{id}", put(admin::upsert_event).delete(admin::delete_event))
        .route("/api/admin/events/{id}/toggle", post(admin::toggle_event))

        // Storefront chrome
        .route("/api/storefront", get(storefront::get_storefront))
        .route("/api/storefront/banner/dismiss", post(storefront::dismiss_banner))

        // Catalog
        .route("/api/products", get(products::list_products))
        .route("/api/products/suggest", get(products::suggest_products))
        .route("/api/products/{id}", get(products::get_product))
        .route("/api/sizes", get(products::list_sizes))
        .route("/api/collections/featured", get(collections::featured))
        .route("/api/collections/signature", get(collections::signature))
        .route("/api/collections/{kind}", get(collections::get_collection))

        // Cart
        .route("/api/cart/checkout", post(cart::checkout))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        client_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}
