use std::{any::Any, backtrace::Backtrace, panic::PanicHookInfo};

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{AppConfig, LoggingConfig};

/// `RUST_LOG` wins over the configured filter.
pub fn init_tracing(cfg: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cfg.rust_log));
    fmt().with_env_filter(filter).with_target(false).init();
    std::panic::set_hook(Box::new(log_panic));
}

/// One line with the settings that change how the API and its sessions behave.
pub fn log_startup(cfg: &AppConfig) {
    tracing::info!(
        host = %cfg.general.host,
        port = cfg.general.port,
        graphiql = cfg.general.enable_graphiql,
        secure_cookies = cfg.auth.secure_cookies,
        expose_login_failure_reason = cfg.auth.expose_login_failure_reason,
        db_max_connections = cfg.database.as_ref().map(|db| db.max_connections),
        "poker league api configured"
    );
    if !cfg.auth.secure_cookies {
        tracing::warn!("session cookies are sent without the Secure flag");
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}

fn log_panic(info: &PanicHookInfo<'_>) {
    let message = panic_message(info.payload());
    let location = info
        .location()
        .map(|l| format!("{}:{}", l.file(), l.line()))
        .unwrap_or_default();

    tracing::error!(
        panic = %message,
        location = %location,
        backtrace = %Backtrace::capture(),
        "panic"
    );
}
