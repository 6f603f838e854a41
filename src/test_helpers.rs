use std::sync::Arc;

use axum::Router;
use sea_orm::MockDatabase;

use crate::{config::AppConfig, middleware::catch_panic_layer, routes::router, state::AppState};

pub const TEST_APP_SECRET: &str = "test-secret";

/// App router over a mock store. Queries consume `db`'s prepared results
/// in order.
pub fn test_router(db: MockDatabase) -> Router {
    let mut cfg = AppConfig::default();
    cfg.auth.app_secret = TEST_APP_SECRET.to_string();
    let state = AppState::new(cfg, db.into_connection());
    router(Arc::clone(&state)).layer(catch_panic_layer())
}
