//! Startup configuration.
//!
//! Everything is read once from the process environment before the first
//! round and never changes afterwards.

use crate::judge::GeminiJudge;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const API_KEY_VAR: &str = "GEMINI_API_KEY";
pub const MODEL_VAR: &str = "RPS_JUDGE_MODEL";
pub const API_URL_VAR: &str = "RPS_JUDGE_API_URL";
pub const PROMPT_VAR: &str = "RPS_JUDGE_PROMPT";
pub const TIMEOUT_VAR: &str = "RPS_JUDGE_TIMEOUT_SECS";

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_PROMPT_PATH: &str = "judge_prompt.txt";

/// Errors loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("Invalid {var}: {value:?}")]
    InvalidValue { var: &'static str, value: String },

    #[error("Cannot read judge rules from {}: {source}", path.display())]
    Rules {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Judge configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_url: String,
    /// Rules text handed to the judge as its system instruction
    pub prompt_path: PathBuf,
    /// Per-request timeout; `None` waits as long as the service takes
    pub timeout: Option<Duration>,
}

impl Config {
    /// Read from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read through an arbitrary lookup (for testing)
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let api_key = non_empty(API_KEY_VAR).ok_or(ConfigError::MissingApiKey)?;

        let timeout = match non_empty(TIMEOUT_VAR) {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                    var: TIMEOUT_VAR,
                    value: raw.clone(),
                })?;
                if secs == 0 {
                    return Err(ConfigError::InvalidValue {
                        var: TIMEOUT_VAR,
                        value: raw,
                    });
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            api_key,
            model: non_empty(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            api_url: non_empty(API_URL_VAR)
                .unwrap_or_else(|| GeminiJudge::DEFAULT_API_URL.to_string()),
            prompt_path: non_empty(PROMPT_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PROMPT_PATH)),
            timeout,
        })
    }

    /// Load the rules text
    pub fn load_rules(&self) -> Result<String, ConfigError> {
        std::fs::read_to_string(&self.prompt_path).map_err(|source| ConfigError::Rules {
            path: self.prompt_path.clone(),
            source,
        })
    }
}
