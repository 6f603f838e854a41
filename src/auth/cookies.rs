use std::time::Duration;

use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

pub const REFRESH_TOKEN_COOKIE: &str = "refresh-token";
pub const ACCESS_TOKEN_COOKIE: &str = "access-token";

pub const REFRESH_TOKEN_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);
pub const ACCESS_TOKEN_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// A cookie the server wants the client to store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    pub name: &'static str,
    pub value: String,
    pub max_age: Duration,
    pub http_only: bool,
    pub secure: bool,
}

impl SessionCookie {
    pub fn refresh(token: String, secure: bool) -> Self {
        Self::http_only(REFRESH_TOKEN_COOKIE, token, REFRESH_TOKEN_TTL, secure)
    }

    pub fn access(token: String, secure: bool) -> Self {
        Self::http_only(ACCESS_TOKEN_COOKIE, token, ACCESS_TOKEN_TTL, secure)
    }

    /// Empty value with `Max-Age=0`, telling the browser to drop the cookie.
    pub fn cleared(name: &'static str, secure: bool) -> Self {
        Self::http_only(name, String::new(), Duration::ZERO, secure)
    }

    fn http_only(name: &'static str, value: String, max_age: Duration, secure: bool) -> Self {
        Self {
            name,
            value,
            max_age,
            http_only: true,
            secure,
        }
    }

    fn to_cookie(&self) -> Cookie<'static> {
        Cookie::build((self.name, self.value.clone()))
            .path("/")
            .same_site(SameSite::Lax)
            .http_only(self.http_only)
            .secure(self.secure)
            .max_age(time::Duration::seconds(self.max_age.as_secs() as i64))
            .build()
    }

    /// Renders a `Set-Cookie` header value. `Max-Age` is in seconds.
    pub fn header_value(&self) -> String {
        self.to_cookie().to_string()
    }
}

/// Session tokens sent back by the client in `Cookie` headers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestCookies {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl RequestCookies {
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let jar = CookieJar::from_headers(headers);
        let token = |name: &str| {
            jar.get(name)
                .map(|cookie| cookie.value_trimmed().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            access_token: token(ACCESS_TOKEN_COOKIE),
            refresh_token: token(REFRESH_TOKEN_COOKIE),
        }
    }
}
