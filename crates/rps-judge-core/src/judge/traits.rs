//! Judge trait definition.

use crate::protocol::RoundPrompt;
use async_trait::async_trait;
use thiserror::Error;

/// Errors from talking to the judge service
#[derive(Debug, Error)]
pub enum JudgeError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Judge service returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Unexpected response from judge service: {0}")]
    UnexpectedResponse(String),

    #[error("Judge refused the prompt: {0}")]
    Blocked(String),

    #[error("Judge returned no text")]
    EmptyResponse,
}

/// Trait for the text-generation service that decides rounds
///
/// Implementations can be:
/// - MockJudge for testing
/// - GeminiJudge for production
#[async_trait]
pub trait Judge: Send + Sync {
    /// Send one prompt and return the model's raw text reply
    async fn generate(&self, prompt: &RoundPrompt) -> Result<String, JudgeError>;
}
