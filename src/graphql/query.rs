use async_graphql::{Context, ErrorExtensions, Object, Result};
use uuid::Uuid;

use super::{request_cookies, services, types::User};

#[derive(Default)]
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// One page of users with their relations, most tournament results first.
    async fn get_users(&self, ctx: &Context<'_>, take: i32, skip: i32) -> Result<Vec<User>> {
        let profiles = services(ctx)?
            .user()
            .list_users(i64::from(take), i64::from(skip))
            .await
            .map_err(|err| err.extend())?;
        Ok(profiles.into_iter().map(User::from).collect())
    }

    async fn get_user(&self, ctx: &Context<'_>, id: Uuid) -> Result<Option<User>> {
        let profile = services(ctx)?
            .user()
            .get_user(&id)
            .await
            .map_err(|err| err.extend())?;
        Ok(profile.map(User::from))
    }

    /// The user signed in through the `access-token` cookie.
    async fn viewer(&self, ctx: &Context<'_>) -> Result<Option<User>> {
        let user = services(ctx)?
            .session()
            .viewer(&request_cookies(ctx))
            .await
            .map_err(|err| err.extend())?;
        Ok(user.map(User::from))
    }
}
