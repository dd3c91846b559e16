//! Rock-Paper-Scissors-Plus moves and the bot's move source.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A move the bot can play
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
    Bomb,
}

impl Move {
    /// Every move, in a fixed order
    pub const ALL: [Move; 4] = [Move::Rock, Move::Paper, Move::Scissors, Move::Bomb];

    /// Lowercase name, as shown to the judge
    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
            Move::Bomb => "bomb",
        }
    }

    /// Draw a move uniformly at random
    pub fn random<R: Rng>(rng: &mut R) -> Move {
        Move::ALL[rng.gen_range(0..Move::ALL.len())]
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Source of the bot's moves.
///
/// The referee asks for exactly one move per round. Tests substitute
/// `ScriptedMoves` to make rounds deterministic.
pub trait MoveSampler {
    fn next_move(&mut self) -> Move;
}

/// Uniformly random moves
pub struct RandomMoves<R = ThreadRng> {
    rng: R,
}

impl RandomMoves<ThreadRng> {
    /// Sample from the thread-local RNG
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for RandomMoves<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomMoves<StdRng> {
    /// Reproducible sequence from a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> MoveSampler for RandomMoves<R> {
    fn next_move(&mut self) -> Move {
        Move::random(&mut self.rng)
    }
}

/// Replays a fixed sequence of moves, wrapping around at the end
#[derive(Clone, Debug)]
pub struct ScriptedMoves {
    moves: Vec<Move>,
    next: usize,
}

impl ScriptedMoves {
    /// Panics if `moves` is empty
    pub fn new(moves: impl Into<Vec<Move>>) -> Self {
        let moves = moves.into();
        assert!(!moves.is_empty(), "ScriptedMoves needs at least one move");
        Self { moves, next: 0 }
    }
}

impl MoveSampler for ScriptedMoves {
    fn next_move(&mut self) -> Move {
        let mv = self.moves[self.next % self.moves.len()];
        self.next += 1;
        mv
    }
}
