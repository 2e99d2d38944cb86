use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
};
use time::Duration;
use tower_cookies::{Cookie, Cookies};
use tower_cookies::cookie::SameSite;
use tracing::Span;
use uuid::Uuid;

pub const CLIENT_COOKIE: &str = "storefront_client";

/// Opaque per-browser id. Issued on first contact and kept for a year.
pub struct ClientId(pub String);

impl<S> FromRequestParts<S> for ClientId
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let cookies = parts.extensions.get::<Cookies>()
            .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;

        let client_id = match cookies.get(CLIENT_COOKIE) {
            Some(cookie) if !cookie.value().is_empty() => cookie.value().to_string(),
            _ => {
                let id = Uuid::new_v4().to_string();
                let mut cookie = Cookie::new(CLIENT_COOKIE, id.clone());
                cookie.set_http_only(true);
                cookie.set_same_site(SameSite::Lax);
                cookie.set_path("/");
                cookie.set_max_age(Duration::days(365));
                cookies.add(cookie);
                id
            }
        };

        Span::current().record("client_id", &client_id);

        Ok(ClientId(client_id))
    }
}
