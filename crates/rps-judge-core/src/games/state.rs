//! Session scoreboard.

use crate::protocol::{Verdict, Winner};

/// Scoreboard for one session.
///
/// Changes only through [`GameState::apply`], once per judged round: `round`
/// goes up by one, `bomb_used` never goes back to false and scores never
/// decrease.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameState {
    /// Round about to be played, starting at 1
    pub round: u32,
    /// Whether the human has spent their single bomb
    pub bomb_used: bool,
    pub user_score: u32,
    pub bot_score: u32,
}

impl GameState {
    pub fn new() -> Self {
        Self {
            round: 1,
            bomb_used: false,
            user_score: 0,
            bot_score: 0,
        }
    }

    /// Apply a judged round
    pub fn apply(&mut self, verdict: &Verdict) {
        if verdict.bomb_consumed {
            self.bomb_used = true;
        }

        match verdict.winner {
            Winner::User => self.user_score += 1,
            Winner::Bot => self.bot_score += 1,
            Winner::NoWinner => {}
        }

        self.round += 1;
    }

    /// Number of rounds judged so far
    pub fn rounds_played(&self) -> u32 {
        self.round.saturating_sub(1)
    }

    /// `User: <n> | Bot: <n>`
    pub fn scoreline(&self) -> String {
        format!("User: {} | Bot: {}", self.user_score, self.bot_score)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
