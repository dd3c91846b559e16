//! Parsed judge replies.

use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

/// The judge's reply could not be read as a round result
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Malformed adjudication response: {0}")]
pub struct MalformedResponse(pub String);

/// Who took the round
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Winner {
    User,
    Bot,
    /// Draw, missing field or anything the judge made up. None of these score.
    NoWinner,
}

impl Winner {
    /// Interpret a `round_winner` value
    pub fn from_field(value: Option<&str>) -> Self {
        match value {
            Some("user") => Winner::User,
            Some("bot") => Winner::Bot,
            _ => Winner::NoWinner,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::User => write!(f, "user"),
            Winner::Bot => write!(f, "bot"),
            Winner::NoWinner => write!(f, "no winner"),
        }
    }
}

/// The fields of a round result that change the scoreboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub winner: Winner,
    pub bomb_consumed: bool,
}

/// A judged round: the judge's JSON object, kept verbatim for display, plus
/// the verdict extracted from it.
#[derive(Clone, Debug, PartialEq)]
pub struct RoundResult {
    fields: Map<String, Value>,
    verdict: Verdict,
}

impl RoundResult {
    pub const WINNER_FIELD: &'static str = "round_winner";
    pub const BOMB_FIELD: &'static str = "bomb_consumed";

    /// Parse the raw text returned by the judge.
    ///
    /// The reply must be a JSON object, optionally wrapped in a Markdown code
    /// fence. `round_winner` must be a string and `bomb_consumed` a boolean
    /// when present; `null` counts as absent.
    pub fn parse(text: &str) -> Result<Self, MalformedResponse> {
        let body = strip_code_fence(text);

        let value: Value = serde_json::from_str(body)
            .map_err(|e| MalformedResponse(format!("not valid JSON ({})", e)))?;

        let fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(MalformedResponse(format!(
                    "expected a JSON object, got {}",
                    json_kind(&other)
                )))
            }
        };

        Self::from_fields(fields)
    }

    /// Build from an already-decoded object
    pub fn from_fields(fields: Map<String, Value>) -> Result<Self, MalformedResponse> {
        let winner = match fields.get(Self::WINNER_FIELD) {
            None | Some(Value::Null) => Winner::NoWinner,
            Some(Value::String(s)) => Winner::from_field(Some(s)),
            Some(other) => {
                return Err(MalformedResponse(format!(
                    "{} must be a string, got {}",
                    Self::WINNER_FIELD,
                    json_kind(other)
                )))
            }
        };

        let bomb_consumed = match fields.get(Self::BOMB_FIELD) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(other) => {
                return Err(MalformedResponse(format!(
                    "{} must be a boolean, got {}",
                    Self::BOMB_FIELD,
                    json_kind(other)
                )))
            }
        };

        Ok(Self {
            fields,
            verdict: Verdict {
                winner,
                bomb_consumed,
            },
        })
    }

    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    /// Two-space indented JSON for the console
    pub fn to_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.fields).unwrap_or_else(|_| format!("{:?}", self.fields))
    }
}

/// Models like to answer with ```json fences even when told not to
fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // An info string ("json") is a single bare word right after the opening fence
    let info_len = inner
        .find(|c: char| !c.is_ascii_alphanumeric() && c != '-' && c != '_')
        .unwrap_or(inner.len());
    inner[info_len..].trim()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
