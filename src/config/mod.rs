pub mod configs;
pub mod defaults;
pub mod loader;
pub mod validate;

pub use configs::{AppConfig, AuthConfig, DatabaseConfig, GeneralConfig, LoggingConfig};
