use std::env;

/// Environment variable the desktop build reads the access token from.
pub const ACCESS_TOKEN_VAR: &str = "QUIZ_ACCESS_TOKEN";

/// Source of the bearer token attached to question requests.
///
/// The browser build read the token straight out of local storage on every
/// request; an injected provider keeps that lookup swappable, so tests and
/// the desktop shell can supply their own.
pub trait TokenProvider: Send + Sync {
    /// Current access token, if any.
    ///
    /// `None` sends the request unauthenticated; the backend answers 401 and
    /// the screen falls back to its empty question list.
    fn access_token(&self) -> Option<String>;
}

/// Reads `QUIZ_ACCESS_TOKEN` on every call, mirroring the live per-request
/// lookup the browser build did against local storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvTokenProvider;

impl TokenProvider for EnvTokenProvider {
    fn access_token(&self) -> Option<String> {
        env::var(ACCESS_TOKEN_VAR)
            .ok()
            .filter(|token| !token.trim().is_empty())
    }
}

/// Fixed token, or a fixed absence of one.
#[derive(Debug, Clone)]
pub struct StaticTokenProvider {
    token: Option<String>,
}

impl StaticTokenProvider {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Provider that never yields a token.
    #[must_use]
    pub fn anonymous() -> Self {
        Self { token: None }
    }
}

impl TokenProvider for StaticTokenProvider {
    fn access_token(&self) -> Option<String> {
        self.token.clone()
    }
}
