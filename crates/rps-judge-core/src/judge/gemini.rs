//! HTTP client for the Gemini `generateContent` endpoint.

use crate::config::Config;
use crate::judge::traits::{Judge, JudgeError};
use crate::protocol::RoundPrompt;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

/// Judge backed by Google's Generative Language API
pub struct GeminiJudge {
    /// HTTP client
    client: Client,
    /// API base, e.g. `https://generativelanguage.googleapis.com/v1beta`
    api_url: String,
    /// Model name, e.g. `gemini-3-flash-preview`
    model: String,
    api_key: String,
}

impl GeminiJudge {
    pub const DEFAULT_API_URL: &'static str = "https://generativelanguage.googleapis.com/v1beta";

    /// Create a judge against the public API with no request timeout
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: Self::DEFAULT_API_URL.to_string(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    /// Create a judge from startup configuration
    pub fn from_config(config: &Config) -> Result<Self, JudgeError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| JudgeError::Network(e.to_string()))?;

        Ok(Self {
            client,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Full URL of the generation call
    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.api_url, self.model)
    }

    /// Request body: rules as the system instruction, round context as the
    /// single user turn, and a request for a JSON reply
    pub fn request_body(prompt: &RoundPrompt) -> Value {
        json!({
            "systemInstruction": {
                "parts": [{ "text": prompt.system }]
            },
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt.user }]
            }],
            "generationConfig": {
                "responseMimeType": "application/json"
            }
        })
    }

    /// Pull the text out of a successful response body.
    ///
    /// Text parts of the first candidate are concatenated in order.
    pub fn extract_text(body: &Value) -> Result<String, JudgeError> {
        let candidate = body
            .get("candidates")
            .and_then(|c| c.as_array())
            .and_then(|c| c.first());

        let Some(candidate) = candidate else {
            let reason = body
                .pointer("/promptFeedback/blockReason")
                .and_then(|r| r.as_str());
            return Err(match reason {
                Some(reason) => JudgeError::Blocked(reason.to_string()),
                None => JudgeError::EmptyResponse,
            });
        };

        let text: String = candidate
            .pointer("/content/parts")
            .and_then(|p| p.as_array())
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part.get("text").and_then(|t| t.as_str()))
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(JudgeError::EmptyResponse);
        }
        Ok(text)
    }

    /// Turn an HTTP status and raw response body into the model's text.
    ///
    /// An `error` object wins over the status; a non-2xx status without one
    /// reports the raw body.
    pub fn interpret(status: u16, raw: &str) -> Result<String, JudgeError> {
        let success = (200..300).contains(&status);

        let body: Value = match serde_json::from_str(raw) {
            Ok(body) => body,
            Err(_) if !success => {
                return Err(JudgeError::Api {
                    status,
                    message: raw.to_string(),
                })
            }
            Err(e) => return Err(JudgeError::UnexpectedResponse(e.to_string())),
        };

        if let Some(error) = Self::api_error(status, &body) {
            return Err(error);
        }
        if !success {
            return Err(JudgeError::Api {
                status,
                message: raw.to_string(),
            });
        }

        Self::extract_text(&body)
    }

    fn api_error(status: u16, body: &Value) -> Option<JudgeError> {
        let error = body.get("error")?;
        let message = error
            .get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown error");
        let status = error
            .get("code")
            .and_then(|c| c.as_u64())
            .and_then(|c| u16::try_from(c).ok())
            .unwrap_or(status);
        Some(JudgeError::Api {
            status,
            message: message.to_string(),
        })
    }
}

#[async_trait]
impl Judge for GeminiJudge {
    async fn generate(&self, prompt: &RoundPrompt) -> Result<String, JudgeError> {
        let request = Self::request_body(prompt);
        debug!(model = %self.model, "generateContent -> {}", request);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| JudgeError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let raw = response
            .text()
            .await
            .map_err(|e| JudgeError::Network(e.to_string()))?;
        debug!(model = %self.model, status, "generateContent <- {}", raw);

        Self::interpret(status, &raw)
    }
}
