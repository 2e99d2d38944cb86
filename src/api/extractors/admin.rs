use axum::{
    extract::{FromRequestParts, FromRef},
    http::{request::Parts, StatusCode},
};
use crate::state::AppState;
use std::sync::Arc;
use tower_cookies::Cookies;

pub const ADMIN_COOKIE: &str = "admin_session";

/// Proof that the caller holds a live admin session.
pub struct AdminSession;

impl<S> FromRequestParts<S> for AdminSession
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let cookies = parts.extensions.get::<Cookies>()
            .ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;

        let token = cookies.get(ADMIN_COOKIE)
            .ok_or(StatusCode::UNAUTHORIZED)?
            .value()
            .to_string();

        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);
        if !app_state.admin_auth.is_valid(&token).await {
            return Err(StatusCode::UNAUTHORIZED);
        }

        Ok(AdminSession)
    }
}
