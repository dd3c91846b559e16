//! Console game loop.

use crate::games::{GameState, MoveSampler};
use crate::judge::{Judge, JudgeError};
use crate::referee::{Referee, RoundError};
use std::fmt;
use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, info_span, Instrument};
use uuid::Uuid;

pub const BANNER: &str = "Rock-Paper-Scissors Plus - AI Judge (type 'quit' to exit)";
pub const QUIT_COMMAND: &str = "quit";

/// Errors that end a session early
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Judge unavailable: {0}")]
    Judge(#[from] JudgeError),
}

/// Unique session identifier, attached to every log line of a session
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Create a new random session ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionId({})", self.0)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a line typed by the player ends the session
pub fn is_quit(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(QUIT_COMMAND)
}

/// One game, from banner to final score
pub struct Session<J, S> {
    id: SessionId,
    referee: Referee<J, S>,
    state: GameState,
}

impl<J: Judge, S: MoveSampler> Session<J, S> {
    pub fn new(referee: Referee<J, S>) -> Self {
        Self {
            id: SessionId::new(),
            referee,
            state: GameState::new(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Read moves from `reader` until `quit` or end of input, writing
    /// prompts and results to `writer`. Returns the final scoreboard.
    ///
    /// A judge reply that cannot be read is reported and the round is played
    /// again. A judge that cannot be reached ends the session with an error
    /// after the score is printed.
    pub async fn run<R, W>(&mut self, reader: R, writer: W) -> Result<GameState, SessionError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let span = info_span!("session", id = %self.id);
        self.play(reader, writer).instrument(span).await
    }

    async fn play<R, W>(&mut self, mut reader: R, mut writer: W) -> Result<GameState, SessionError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Session started");
        writer.write_all(format!("{}\n\n", BANNER).as_bytes()).await?;

        let mut fatal = None;
        let mut buf = Vec::new();
        loop {
            writer.write_all(b"Your move: ").await?;
            writer.flush().await?;

            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                // End of input counts as quitting
                writer.write_all(b"\n").await?;
                break;
            }
            // Free text for the judge; bytes from a non-UTF-8 terminal are replaced, not fatal
            let line = String::from_utf8_lossy(&buf);
            let input = line.trim_end_matches('\n').trim_end_matches('\r');
            if is_quit(input) {
                break;
            }

            match self.referee.play_round(&mut self.state, input).await {
                Ok(outcome) => {
                    let report = format!(
                        "\n-----ROUND RESULT-----\n{}\n----------------------\n\n",
                        outcome.result.to_pretty()
                    );
                    writer.write_all(report.as_bytes()).await?;
                }
                Err(RoundError::Malformed(e)) => {
                    let notice = format!(
                        "\nJudge returned an unreadable verdict: {}; round {} will be replayed.\n\n",
                        e.0, self.state.round
                    );
                    writer.write_all(notice.as_bytes()).await?;
                }
                Err(RoundError::Judge(e)) => {
                    fatal = Some(e);
                    break;
                }
            }
        }

        let summary = format!("Final Score: \n{}\n", self.state.scoreline());
        writer.write_all(summary.as_bytes()).await?;
        writer.flush().await?;
        info!(
            rounds = self.state.rounds_played(),
            score = %self.state.scoreline(),
            "Session ended"
        );

        match fatal {
            Some(e) => Err(SessionError::Judge(e)),
            None => Ok(self.state),
        }
    }
}
