//! Prompt rendering.

use crate::games::{GameState, Move};

/// A rendered request for the judge
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundPrompt {
    /// Static rules text, identical for every round
    pub system: String,
    /// Round context followed by the player's words
    pub user: String,
}

impl RoundPrompt {
    /// Render the prompt for the round `state` is about to play.
    ///
    /// The player's input is placed inside double quotes exactly as typed so
    /// the judge can tell it apart from the context lines above it.
    pub fn render(rules: &str, state: &GameState, bot_move: Move, user_input: &str) -> Self {
        let user = format!(
            "\nRound Number: {}\nUser bomb already used: {}\nBot move: {}\n\nUser input:\n\"{}\"\n",
            state.round,
            if state.bomb_used { "True" } else { "False" },
            bot_move,
            user_input,
        );

        Self {
            system: rules.to_string(),
            user,
        }
    }
}
