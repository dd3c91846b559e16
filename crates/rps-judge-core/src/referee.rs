//! Round adjudication.

use crate::games::{GameState, Move, MoveSampler};
use crate::judge::{Judge, JudgeError};
use crate::protocol::{MalformedResponse, RoundPrompt, RoundResult};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors from playing a round
#[derive(Debug, Error)]
pub enum RoundError {
    #[error(transparent)]
    Malformed(#[from] MalformedResponse),

    #[error("Judge unavailable: {0}")]
    Judge(#[from] JudgeError),
}

/// A judged round
#[derive(Clone, Debug, PartialEq)]
pub struct RoundOutcome {
    /// Number of the round that was played
    pub round: u32,
    pub bot_move: Move,
    pub result: RoundResult,
}

/// Plays rounds: picks the bot's move, asks the judge, scores the reply
pub struct Referee<J, S> {
    rules: String,
    judge: J,
    sampler: S,
}

impl<J: Judge, S: MoveSampler> Referee<J, S> {
    pub fn new(rules: impl Into<String>, judge: J, sampler: S) -> Self {
        Self {
            rules: rules.into(),
            judge,
            sampler,
        }
    }

    pub fn judge(&self) -> &J {
        &self.judge
    }

    /// Play one round against `user_input`.
    ///
    /// `state` is updated only when the judge's reply parses; on error it is
    /// left exactly as it was.
    pub async fn play_round(
        &mut self,
        state: &mut GameState,
        user_input: &str,
    ) -> Result<RoundOutcome, RoundError> {
        let bot_move = self.sampler.next_move();
        let prompt = RoundPrompt::render(&self.rules, state, bot_move, user_input);
        debug!(round = state.round, %bot_move, "Judging round");

        let reply = self.judge.generate(&prompt).await?;

        let result = RoundResult::parse(&reply).map_err(|e| {
            warn!(round = state.round, "{}; raw reply: {:?}", e, reply);
            e
        })?;

        let round = state.round;
        state.apply(result.verdict());
        info!(
            round,
            %bot_move,
            winner = %result.verdict().winner,
            bomb_consumed = result.verdict().bomb_consumed,
            score = %state.scoreline(),
            "Round judged"
        );

        Ok(RoundOutcome {
            round,
            bot_move,
            result,
        })
    }
}
