use crate::{
    auth::{
        Claims, RequestCookies, SessionCookie, TokenKind,
        cookies::{ACCESS_TOKEN_COOKIE, ACCESS_TOKEN_TTL, REFRESH_TOKEN_COOKIE, REFRESH_TOKEN_TTL},
        jwt::{JwtKeys, decode_token, encode_token, make_session_claims},
        password::verify_password,
    },
    config::AuthConfig,
    db::dao::{DaoBase, UserDao},
    db::entities::user,
    error::{AppError, AuthFailure},
};

#[derive(Clone)]
pub struct SessionSettings {
    pub keys: JwtKeys,
    pub secure_cookies: bool,
    pub expose_failure_reason: bool,
}

impl SessionSettings {
    pub fn from_config(cfg: &AuthConfig) -> Self {
        Self {
            keys: JwtKeys::from_secret(cfg.app_secret.as_bytes()),
            secure_cookies: cfg.secure_cookies,
            expose_failure_reason: cfg.expose_login_failure_reason,
        }
    }
}

/// Result of a successful login or refresh: the user and the cookies that
/// must be set on the response, refresh token first.
#[derive(Debug)]
pub struct SessionGrant {
    pub user: user::Model,
    pub cookies: Vec<SessionCookie>,
}

#[derive(Clone)]
pub struct SessionService {
    user_dao: UserDao,
    settings: SessionSettings,
}

impl SessionService {
    pub fn new(user_dao: UserDao, settings: SessionSettings) -> Self {
        Self { user_dao, settings }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<SessionGrant, AppError> {
        let Some(user) = self.user_dao.find_by_email(email).await? else {
            return Err(self.reject(AuthFailure::UnknownEmail));
        };

        if !verify_password(password, &user.password_hash)? {
            return Err(self.reject(AuthFailure::WrongPassword));
        }

        let grant = self.issue(user)?;
        tracing::info!(user_id = %grant.user.id, "session issued");
        Ok(grant)
    }

    /// Trades a valid refresh-token cookie for a fresh cookie pair.
    pub async fn refresh(&self, cookies: &RequestCookies) -> Result<SessionGrant, AppError> {
        let token = cookies
            .refresh_token
            .as_deref()
            .ok_or_else(|| self.reject(AuthFailure::MissingToken))?;
        let claims = self.verify(token, TokenKind::Refresh)?;

        let user = self
            .user_dao
            .find_by_id(claims.user_id)
            .await?
            .ok_or_else(|| self.reject(AuthFailure::UnknownSubject))?;

        let grant = self.issue(user)?;
        tracing::info!(user_id = %grant.user.id, "session refreshed");
        Ok(grant)
    }

    /// The user behind the access-token cookie, if one was sent.
    pub async fn viewer(&self, cookies: &RequestCookies) -> Result<Option<user::Model>, AppError> {
        let Some(token) = cookies.access_token.as_deref() else {
            return Ok(None);
        };
        let claims = self.verify(token, TokenKind::Access)?;

        Ok(self.user_dao.find_by_id(claims.user_id).await?)
    }

    pub fn logout_cookies(&self) -> Vec<SessionCookie> {
        let secure = self.settings.secure_cookies;
        vec![
            SessionCookie::cleared(REFRESH_TOKEN_COOKIE, secure),
            SessionCookie::cleared(ACCESS_TOKEN_COOKIE, secure),
        ]
    }

    fn issue(&self, user: user::Model) -> Result<SessionGrant, AppError> {
        let keys = &self.settings.keys;
        let secure = self.settings.secure_cookies;
        let refresh_token = encode_token(
            keys,
            &make_session_claims(&user.id, TokenKind::Refresh, REFRESH_TOKEN_TTL),
        )?;
        let access_token = encode_token(
            keys,
            &make_session_claims(&user.id, TokenKind::Access, ACCESS_TOKEN_TTL),
        )?;

        Ok(SessionGrant {
            user,
            cookies: vec![
                SessionCookie::refresh(refresh_token, secure),
                SessionCookie::access(access_token, secure),
            ],
        })
    }

    /// Signature, expiry and token kind must all check out.
    fn verify(&self, token: &str, expected: TokenKind) -> Result<Claims, AppError> {
        let claims = decode_token(&self.settings.keys, token).map_err(|err| {
            tracing::debug!(error = %err, kind = ?expected, "session token rejected");
            self.reject(AuthFailure::InvalidToken)
        })?;
        if claims.kind != expected {
            tracing::debug!(kind = ?claims.kind, ?expected, "session token of the wrong kind");
            return Err(self.reject(AuthFailure::InvalidToken));
        }
        Ok(claims)
    }

    fn reject(&self, failure: AuthFailure) -> AppError {
        tracing::warn!(reason = failure.reason(), "authentication rejected");
        AppError::authentication(failure, self.settings.expose_failure_reason)
    }
}
