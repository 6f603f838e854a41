use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};
use uuid::Uuid;

use super::{DaoBase, DaoLayerError, DaoResult, UserProfile};
use crate::db::entities::{prelude::User, user};

/// Column values for a new user row. The password is already hashed.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub name: Option<String>,
    pub password_hash: String,
    pub role_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
}

#[derive(Clone)]
pub struct UserDao {
    db: DatabaseConnection,
}

impl DaoBase for UserDao {
    type Entity = User;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl UserDao {
    pub async fn find_by_email(&self, email: &str) -> DaoResult<Option<user::Model>> {
        User::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(DaoLayerError::Db)
    }

    pub async fn create_user(&self, new_user: NewUser) -> DaoResult<user::Model> {
        let now = Utc::now().fixed_offset();
        let model = user::ActiveModel {
            id: Set(Uuid::new_v4()),
            email: Set(new_user.email),
            name: Set(new_user.name),
            password_hash: Set(new_user.password_hash),
            role_id: Set(new_user.role_id),
            team_id: Set(new_user.team_id),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        model.insert(&self.db).await.map_err(DaoLayerError::Db)
    }

    /// A page of users, oldest account first, with every relation loaded.
    pub async fn find_profile_page(&self, skip: i64, take: i64) -> DaoResult<Vec<UserProfile>> {
        let users = self
            .find_page(skip, take, |query| {
                query
                    .order_by_asc(user::Column::CreatedAt)
                    .order_by_asc(user::Column::Id)
            })
            .await?;
        self.load_profiles(users).await
    }

    pub async fn find_profile_by_id(&self, id: Uuid) -> DaoResult<Option<UserProfile>> {
        let Some(user) = self.find_by_id(id).await? else {
            return Ok(None);
        };
        Ok(self.load_profiles(vec![user]).await?.into_iter().next())
    }
}
