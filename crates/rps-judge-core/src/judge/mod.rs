//! Adjudicator client abstraction.

mod gemini;
mod mock;
mod traits;

pub use gemini::GeminiJudge;
pub use mock::MockJudge;
pub use traits::{Judge, JudgeError};
