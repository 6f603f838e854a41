use std::path::Path;

use ::config as config_rs;
use anyhow::{Context, Result};

use super::{AppConfig, validate};

/// `APP_AUTH__APP_SECRET` sets `auth.app_secret`.
pub const ENV_PREFIX: &str = "APP";
pub const ENV_SEPARATOR: &str = "__";

impl AppConfig {
    /// Reads `APP_*` variables, seeded from a `.env` next to the manifest or
    /// in the working directory, and validates the result.
    pub fn from_env() -> Result<Self> {
        let manifest_env = Path::new(env!("CARGO_MANIFEST_DIR")).join(".env");
        let _ = dotenvy::from_filename(manifest_env).or_else(|_| dotenvy::dotenv());

        Self::from_environment(environment())
    }

    fn from_environment(source: config_rs::Environment) -> Result<Self> {
        let cfg: Self = config_rs::Config::builder()
            .add_source(source)
            .build()
            .context("failed to read APP_* variables")?
            .try_deserialize()
            .context("APP_* variables do not match the server config")?;

        validate::validate(&cfg)?;
        Ok(cfg)
    }
}

fn environment() -> config_rs::Environment {
    config_rs::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}
