use sea_orm::DatabaseConnection;

use crate::{
    config::AuthConfig,
    db::dao::DaoContext,
    services::{
        session_service::{SessionService, SessionSettings},
        user_service::UserService,
    },
};

#[derive(Clone)]
pub struct ServiceContext {
    daos: DaoContext,
    session: SessionSettings,
}

impl ServiceContext {
    pub fn new(db: &DatabaseConnection, auth: &AuthConfig) -> Self {
        Self {
            daos: DaoContext::new(db),
            session: SessionSettings::from_config(auth),
        }
    }

    pub fn user(&self) -> UserService {
        UserService::new(self.daos.user())
    }

    pub fn session(&self) -> SessionService {
        SessionService::new(self.daos.user(), self.session.clone())
    }
}
