pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ENABLE_GRAPHIQL: bool = true;
pub const DEFAULT_RUST_LOG: &str = "info,tower_http=info";
pub const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
pub const DEFAULT_DB_MIN_IDLE: u32 = 2;
pub const DEFAULT_SECURE_COOKIES: bool = false;
pub const DEFAULT_EXPOSE_LOGIN_FAILURE_REASON: bool = false;

// Only used by debug builds; release builds must set APP_AUTH__APP_SECRET.
pub const DEV_APP_SECRET: &str = "poker-league-dev-secret";
