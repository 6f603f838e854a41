use async_graphql::ErrorExtensions;
use sea_orm::SqlErr;

use crate::db::dao::DaoLayerError;

/// Why an authentication attempt was turned away. Always logged, only
/// shown to callers when the auth config allows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthFailure {
    #[error("No user found")]
    UnknownEmail,
    #[error("Invalid password")]
    WrongPassword,
    #[error("Missing session token")]
    MissingToken,
    #[error("Invalid or expired session token")]
    InvalidToken,
    #[error("Session user no longer exists")]
    UnknownSubject,
}

impl AuthFailure {
    pub fn reason(self) -> &'static str {
        match self {
            AuthFailure::UnknownEmail => "unknown_email",
            AuthFailure::WrongPassword => "wrong_password",
            AuthFailure::MissingToken => "missing_token",
            AuthFailure::InvalidToken => "invalid_token",
            AuthFailure::UnknownSubject => "unknown_subject",
        }
    }

    fn is_credential_check(self) -> bool {
        matches!(self, AuthFailure::UnknownEmail | AuthFailure::WrongPassword)
    }
}

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Authentication {
        failure: AuthFailure,
        message: String,
    },
    Conflict(String),
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    /// Credential failures collapse to one public message unless `expose` is set.
    pub fn authentication(failure: AuthFailure, expose: bool) -> Self {
        let message = if expose || !failure.is_credential_check() {
            failure.to_string()
        } else {
            "Invalid credentials".to_string()
        };
        Self::Authentication { failure, message }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            Self::BadRequest(message)
            | Self::Authentication { message, .. }
            | Self::Conflict(message)
            | Self::Internal(message) => message.as_str(),
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::BadRequest(_) => "BAD_REQUEST",
            Self::Authentication { .. } => "UNAUTHENTICATED",
            Self::Conflict(_) => "CONFLICT",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn auth_failure(&self) -> Option<AuthFailure> {
        match self {
            Self::Authentication { failure, .. } => Some(*failure),
            _ => None,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

impl ErrorExtensions for AppError {
    fn extend(&self) -> async_graphql::Error {
        async_graphql::Error::new(self.message()).extend_with(|_, ext| ext.set("code", self.code()))
    }
}

impl From<DaoLayerError> for AppError {
    fn from(err: DaoLayerError) -> Self {
        match err {
            DaoLayerError::InvalidPagination { .. } => AppError::bad_request(err.to_string()),
            DaoLayerError::Db(ref db_err) => {
                tracing::error!(error = %db_err, "store call failed");
                store_error(db_err.sql_err(), err.to_string())
            }
        }
    }
}

/// Unique-constraint violations are the caller's fault; anything else the
/// store reports is ours.
fn store_error(sql_err: Option<SqlErr>, message: String) -> AppError {
    match sql_err {
        Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict(message),
        _ => AppError::internal(message),
    }
}
