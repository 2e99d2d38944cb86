use std::sync::Arc;
use crate::config::Config;
use crate::domain::ports::DismissalStore;
use crate::domain::services::{
    admin_auth::AdminAuth, catalog::Catalog, checkout::CheckoutService, engine::EventEngine,
};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub engine: Arc<EventEngine>,
    pub dismissal_store: Arc<dyn DismissalStore>,
    pub catalog: Arc<Catalog>,
    pub admin_auth: Arc<AdminAuth>,
    pub checkout: Arc<CheckoutService>,
}
