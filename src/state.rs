use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::{
    config::AppConfig,
    graphql::{AppSchema, build_schema},
    services::ServiceContext,
};

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub db: DatabaseConnection,
    pub schema: AppSchema,
}

impl AppState {
    pub fn new(config: AppConfig, db: DatabaseConnection) -> Arc<Self> {
        let services = ServiceContext::new(&db, &config.auth);
        Arc::new(Self {
            schema: build_schema(services),
            config,
            db,
        })
    }
}
