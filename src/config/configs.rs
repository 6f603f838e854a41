use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub general: GeneralConfig,
    pub logging: LoggingConfig,
    pub database: Option<DatabaseConfig>,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneralConfig {
    pub host: String,
    pub port: u16,
    pub enable_graphiql: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            host: defaults::DEFAULT_HOST.to_string(),
            port: defaults::DEFAULT_PORT,
            enable_graphiql: defaults::DEFAULT_ENABLE_GRAPHIQL,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub rust_log: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            rust_log: defaults::DEFAULT_RUST_LOG.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_db_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_db_min_idle")]
    pub min_idle: u32,
}

/// Secrets and cookie policy for session issuance.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthConfig {
    pub app_secret: String,
    pub secure_cookies: bool,
    /// When set, login failures tell the caller whether the email or the
    /// password was wrong. Off by default to avoid user enumeration.
    pub expose_login_failure_reason: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        let app_secret = if cfg!(debug_assertions) {
            defaults::DEV_APP_SECRET.to_string()
        } else {
            String::new()
        };

        Self {
            app_secret,
            secure_cookies: defaults::DEFAULT_SECURE_COOKIES,
            expose_login_failure_reason: defaults::DEFAULT_EXPOSE_LOGIN_FAILURE_REASON,
        }
    }
}

fn default_db_max_connections() -> u32 {
    defaults::DEFAULT_DB_MAX_CONNECTIONS
}

fn default_db_min_idle() -> u32 {
    defaults::DEFAULT_DB_MIN_IDLE
}
