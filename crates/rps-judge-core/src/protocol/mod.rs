//! What goes to the judge and what comes back.

mod prompt;
mod result;

pub use prompt::RoundPrompt;
pub use result::{MalformedResponse, RoundResult, Verdict, Winner};
