#![forbid(unsafe_code)]

pub mod error;
pub mod question_service;
pub mod token;

pub use error::QuestionServiceError;
pub use question_service::{HttpQuestionService, QuestionServiceConfig, QuestionSource};
pub use token::{ACCESS_TOKEN_VAR, EnvTokenProvider, StaticTokenProvider, TokenProvider};
