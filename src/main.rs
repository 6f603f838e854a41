use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use tower_http::trace::TraceLayer;

use poker_league::{
    config::AppConfig,
    db::connection,
    logging::{init_tracing, log_startup},
    middleware::catch_panic_layer,
    routes::router,
    state::AppState,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env().context("failed to load config")?;
    init_tracing(&cfg.logging);
    log_startup(&cfg);

    let db_cfg = cfg
        .database
        .as_ref()
        .context("database config missing: set APP_DATABASE__URL")?;
    let db = connection::connect(db_cfg).await?;

    let addr: SocketAddr = format!("{}:{}", cfg.general.host, cfg.general.port)
        .parse()
        .context("invalid host/port")?;

    let state = AppState::new(cfg, db);

    let app = Router::new()
        .merge(router(Arc::clone(&state)))
        .layer(catch_panic_layer())
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on http://{}", addr);
    if state.config.general.enable_graphiql {
        tracing::info!("graphiql available at http://{}/graphql", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
