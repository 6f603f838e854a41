use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse},
    routing::{get, post},
};

use crate::{auth::RequestCookies, state::AppState};

pub const GRAPHQL_PATH: &str = "/graphql";

pub fn router(state: Arc<AppState>) -> Router {
    let route = if state.config.general.enable_graphiql {
        get(graphiql).post(execute)
    } else {
        post(execute)
    };

    Router::new().route(GRAPHQL_PATH, route).with_state(state)
}

/// Runs one GraphQL request with the caller's session cookies in context.
async fn execute(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    req: GraphQLRequest,
) -> GraphQLResponse {
    let cookies = RequestCookies::from_headers(&headers);
    state.schema.execute(req.into_inner().data(cookies)).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
