//! Moves and game state.

mod moves;
mod state;

pub use moves::{Move, MoveSampler, RandomMoves, ScriptedMoves};
pub use state::GameState;
