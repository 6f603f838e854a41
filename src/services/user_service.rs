use uuid::Uuid;

use crate::{
    auth::password::hash_password,
    db::dao::{NewUser, UserDao, UserProfile},
    db::entities::user,
    error::AppError,
};

/// Fields accepted when creating an account. Only the hash of `password`
/// ever reaches the store.
#[derive(Clone)]
pub struct CreateUser {
    pub email: String,
    pub password: String,
    pub name: Option<String>,
    pub role_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
}

#[derive(Clone)]
pub struct UserService {
    user_dao: UserDao,
}

impl UserService {
    pub fn new(user_dao: UserDao) -> Self {
        Self { user_dao }
    }

    /// One page of profiles, ranked inside the page by tournament results.
    pub async fn list_users(&self, take: i64, skip: i64) -> Result<Vec<UserProfile>, AppError> {
        let mut profiles = self.user_dao.find_profile_page(skip, take).await?;
        rank_by_tournament_results(&mut profiles);
        tracing::debug!(take, skip, returned = profiles.len(), "listed users");
        Ok(profiles)
    }

    pub async fn get_user(&self, id: &Uuid) -> Result<Option<UserProfile>, AppError> {
        Ok(self.user_dao.find_profile_by_id(*id).await?)
    }

    pub async fn create_user(&self, input: CreateUser) -> Result<user::Model, AppError> {
        let new_user = prepare_new_user(input)?;
        let user = self.user_dao.create_user(new_user).await?;
        tracing::info!(user_id = %user.id, "user created");
        Ok(user)
    }
}

/// Most tournament results first. The sort is stable, so ties keep the
/// order the store returned them in.
pub fn rank_by_tournament_results(profiles: &mut [UserProfile]) {
    profiles.sort_by(|a, b| b.tournament_results.len().cmp(&a.tournament_results.len()));
}

fn prepare_new_user(input: CreateUser) -> Result<NewUser, AppError> {
    let CreateUser {
        email,
        password,
        name,
        role_id,
        team_id,
    } = input;

    Ok(NewUser {
        email,
        name,
        password_hash: hash_password(&password)?,
        role_id,
        team_id,
    })
}
