use std::env;
use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use quiz_core::model::{Question, RoleName};

use crate::error::QuestionServiceError;
use crate::token::TokenProvider;

/// Where and how the tutorial-quiz endpoint is called.
#[derive(Clone, Debug)]
pub struct QuestionServiceConfig {
    pub base_url: String,
    /// Role sent with every request. The backend only serves its default
    /// question set so far, so the caller's parsed role is not forwarded yet.
    pub default_role: String,
    /// Number of random questions to ask for per fetch.
    pub question_count: u32,
    pub difficulty: u32,
}

impl Default for QuestionServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".into(),
            default_role: "volunteer".into(),
            question_count: 10,
            difficulty: 1,
        }
    }
}

impl QuestionServiceConfig {
    /// Build a config from `QUIZ_*` environment variables, falling back to
    /// the defaults for anything unset or unparsable.
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("QUIZ_BACKEND_URL").unwrap_or(defaults.base_url),
            default_role: env::var("QUIZ_DEFAULT_ROLE").unwrap_or(defaults.default_role),
            question_count: env_u32("QUIZ_QUESTION_COUNT", defaults.question_count),
            difficulty: env_u32("QUIZ_DIFFICULTY", defaults.difficulty),
        }
    }

    fn endpoint_url(&self) -> String {
        format!(
            "{}/quiz/getRandomQuestion",
            self.base_url.trim_end_matches('/')
        )
    }
}

fn env_u32(key: &str, fallback: u32) -> u32 {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(fallback)
}

/// Supplies the random questions for a quiz walkthrough.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch one batch of questions for the given role.
    ///
    /// # Errors
    ///
    /// Returns `QuestionServiceError` when the request cannot be sent, the
    /// backend answers with a non-success status, or the body does not
    /// deserialize as a question list.
    async fn random_questions(
        &self,
        role: &RoleName,
    ) -> Result<Vec<Question>, QuestionServiceError>;
}

/// reqwest-backed `QuestionSource` for the tutorial-quiz endpoint.
pub struct HttpQuestionService {
    client: Client,
    config: QuestionServiceConfig,
    tokens: Arc<dyn TokenProvider>,
}

impl HttpQuestionService {
    #[must_use]
    pub fn new(config: QuestionServiceConfig, tokens: Arc<dyn TokenProvider>) -> Self {
        Self {
            client: Client::new(),
            config,
            tokens,
        }
    }
}

#[async_trait]
impl QuestionSource for HttpQuestionService {
    async fn random_questions(
        &self,
        role: &RoleName,
    ) -> Result<Vec<Question>, QuestionServiceError> {
        // TODO: forward `role` once the backend serves per-role question
        // sets; until then every request asks for the configured default.
        debug!(requested_role = %role, sent_role = %self.config.default_role, "fetching quiz questions");

        let mut request = self
            .client
            .get(self.config.endpoint_url())
            .query(&[
                ("num", self.config.question_count.to_string()),
                ("role", self.config.default_role.clone()),
                ("difficulty", self.config.difficulty.to_string()),
            ])
            // The browser build sent both of these on its GET; the backend
            // expects them as-is.
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header("Access-Control-Allow-Origin", "*");

        if let Some(token) = self.tokens.access_token() {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(QuestionServiceError::HttpStatus(response.status()));
        }

        Ok(response.json().await?)
    }
}
