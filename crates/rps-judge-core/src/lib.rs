//! RPS Judge Core Library
//!
//! This crate provides the game state, move sampling, prompt rendering and
//! adjudicator client for a rock-paper-scissors-plus game whose rounds are
//! judged by a remote text-generation model.

pub mod config;
pub mod games;
pub mod judge;
pub mod protocol;
pub mod referee;
pub mod session;

pub use config::{Config, ConfigError};
pub use games::{GameState, Move, MoveSampler, RandomMoves, ScriptedMoves};
pub use judge::{GeminiJudge, Judge, JudgeError, MockJudge};
pub use protocol::{RoundPrompt, RoundResult, Verdict, Winner};
pub use referee::{Referee, RoundError, RoundOutcome};
pub use session::{Session, SessionError, SessionId};
