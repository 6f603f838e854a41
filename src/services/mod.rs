pub mod context;
pub mod session_service;
pub mod user_service;

pub use context::ServiceContext;
pub use session_service::{SessionGrant, SessionService, SessionSettings};
pub use user_service::{CreateUser, UserService};
