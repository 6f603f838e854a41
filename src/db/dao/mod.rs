use sea_orm::DatabaseConnection;

pub mod base;
pub mod error;
pub mod profile;
pub mod user_dao;

pub use base::DaoBase;
pub use error::{DaoLayerError, DaoResult};
pub use profile::{RegistrationEntry, ResultEntry, SeatEntry, UserProfile};
pub use user_dao::{NewUser, UserDao};

#[derive(Clone)]
pub struct DaoContext {
    db: DatabaseConnection,
}

impl DaoContext {
    pub fn new(db: &DatabaseConnection) -> Self {
        Self { db: db.clone() }
    }

    pub fn user(&self) -> UserDao {
        DaoBase::new(&self.db)
    }
}
