//! Mock judge for testing.

use crate::judge::traits::{Judge, JudgeError};
use crate::protocol::RoundPrompt;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct MockJudgeState {
    /// Replies handed out in order
    replies: VecDeque<Result<String, JudgeError>>,
    /// Every prompt received
    prompts: Vec<RoundPrompt>,
}

/// In-memory judge with scripted replies
#[derive(Clone, Default)]
pub struct MockJudge {
    state: Arc<Mutex<MockJudgeState>>,
}

impl MockJudge {
    /// Create a mock with no replies queued
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock that answers with `replies` in order
    pub fn with_replies<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let judge = Self::new();
        for reply in replies {
            judge.push_reply(reply);
        }
        judge
    }

    /// Queue a text reply
    pub fn push_reply(&self, reply: impl Into<String>) {
        self.state
            .lock()
            .unwrap()
            .replies
            .push_back(Ok(reply.into()));
    }

    /// Queue a failure
    pub fn push_error(&self, error: JudgeError) {
        self.state.lock().unwrap().replies.push_back(Err(error));
    }

    /// Prompts received so far (for testing)
    pub fn prompts(&self) -> Vec<RoundPrompt> {
        self.state.lock().unwrap().prompts.clone()
    }

    /// Number of calls made
    pub fn calls(&self) -> usize {
        self.state.lock().unwrap().prompts.len()
    }

    /// Replies not yet handed out
    pub fn pending(&self) -> usize {
        self.state.lock().unwrap().replies.len()
    }
}

#[async_trait]
impl Judge for MockJudge {
    async fn generate(&self, prompt: &RoundPrompt) -> Result<String, JudgeError> {
        let mut state = self.state.lock().unwrap();
        state.prompts.push(prompt.clone());
        state
            .replies
            .pop_front()
            .unwrap_or(Err(JudgeError::EmptyResponse))
    }
}
