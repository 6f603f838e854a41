use async_graphql::{Context, ErrorExtensions, Object, Result};
use axum::http::header::SET_COOKIE;

use super::{
    request_cookies, services,
    types::{CreateUserInput, User},
};
use crate::auth::SessionCookie;

#[derive(Default)]
pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn create_user(&self, ctx: &Context<'_>, input: CreateUserInput) -> Result<User> {
        let user = services(ctx)?
            .user()
            .create_user(input.into())
            .await
            .map_err(|err| err.extend())?;
        Ok(user.into())
    }

    /// Verifies the credentials and sets the `refresh-token` and
    /// `access-token` cookies.
    async fn login_user(
        &self,
        ctx: &Context<'_>,
        email: String,
        #[graphql(secret)] password: String,
    ) -> Result<User> {
        let grant = services(ctx)?
            .session()
            .login(&email, &password)
            .await
            .map_err(|err| err.extend())?;
        set_cookies(ctx, &grant.cookies);
        Ok(grant.user.into())
    }

    async fn refresh_session(&self, ctx: &Context<'_>) -> Result<User> {
        let grant = services(ctx)?
            .session()
            .refresh(&request_cookies(ctx))
            .await
            .map_err(|err| err.extend())?;
        set_cookies(ctx, &grant.cookies);
        Ok(grant.user.into())
    }

    async fn logout_user(&self, ctx: &Context<'_>) -> Result<bool> {
        let cookies = services(ctx)?.session().logout_cookies();
        set_cookies(ctx, &cookies);
        Ok(true)
    }
}

fn set_cookies(ctx: &Context<'_>, cookies: &[SessionCookie]) {
    for cookie in cookies {
        if !ctx.append_http_header(SET_COOKIE, cookie.header_value()) {
            tracing::error!(cookie = cookie.name, "cookie header rejected");
        }
    }
}
