//! GraphQL schema served at `/graphql`.

use async_graphql::{Context, EmptySubscription, Schema};

use crate::{auth::RequestCookies, services::ServiceContext};

pub mod mutation;
pub mod query;
pub mod types;

pub use mutation::MutationRoot;
pub use query::QueryRoot;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(services: ServiceContext) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(services)
        .finish()
}

fn services<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a ServiceContext> {
    ctx.data::<ServiceContext>()
}

/// Cookies of the current HTTP request. Empty when the schema is executed
/// without an HTTP request, as in tests.
fn request_cookies(ctx: &Context<'_>) -> RequestCookies {
    ctx.data_opt::<RequestCookies>().cloned().unwrap_or_default()
}
