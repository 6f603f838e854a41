pub mod cookies;
pub mod jwt;
pub mod password;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use cookies::{RequestCookies, SessionCookie};

/// Which session cookie a token was issued for. A token is only accepted
/// where its own kind is expected.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Refresh,
    Access,
}

/// Payload of both session tokens.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    #[serde(rename = "userId")]
    pub user_id: Uuid,
    pub kind: TokenKind,
    pub iat: usize, // issued at (unix)
    pub exp: usize, // expiry (unix)
}
