use anyhow::{Result, bail};

use super::AppConfig;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.general.host.trim().is_empty() {
        errors.push("general.host must not be empty".to_string());
    }

    if let Some(database) = cfg.database.as_ref() {
        if database.url.trim().is_empty() {
            errors.push("database.url must not be empty".to_string());
        }

        if database.min_idle > database.max_connections {
            errors.push(format!(
                "database.min_idle ({}) must be <= database.max_connections ({})",
                database.min_idle, database.max_connections
            ));
        }
    }

    if cfg.auth.app_secret.trim().is_empty() {
        errors.push("auth.app_secret must not be empty".to_string());
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

#[cfg(test)]
mod tests {
    use crate::config::{AppConfig, DatabaseConfig};

    use super::validate;

    #[test]
    fn default_config_with_secret_is_valid() {
        let mut cfg = AppConfig::default();
        cfg.auth.app_secret = "unit-test-secret".to_string();

        assert!(validate(&cfg).is_ok());
    }

    #[test]
    fn collects_every_problem_into_one_message() {
        let mut cfg = AppConfig::default();
        cfg.general.host = "  ".to_string();
        cfg.auth.app_secret = String::new();
        cfg.database = Some(DatabaseConfig {
            url: String::new(),
            max_connections: 2,
            min_idle: 5,
        });

        let message = validate(&cfg).expect_err("config should be rejected").to_string();

        assert!(message.contains("general.host must not be empty"));
        assert!(message.contains("database.url must not be empty"));
        assert!(message.contains("database.min_idle (5) must be <= database.max_connections (2)"));
        assert!(message.contains("auth.app_secret must not be empty"));
    }
}
