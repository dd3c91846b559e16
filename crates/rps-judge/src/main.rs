//! RPS Judge
//!
//! Console rock-paper-scissors-plus. Every round is judged by a
//! text-generation model; see `judge_prompt.txt` for the rules it is given.

use rps_judge_core::{Config, GeminiJudge, RandomMoves, Referee, Session};
use std::process::ExitCode;
use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Logs go to stderr so they never interleave with the game on stdout
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;
    let rules = config.load_rules()?;
    let judge = GeminiJudge::from_config(&config)?;
    info!(
        model = judge.model(),
        rules = %config.prompt_path.display(),
        "Judge configured"
    );

    let referee = Referee::new(rules, judge, RandomMoves::new());
    let mut session = Session::new(referee);

    let stdin = BufReader::new(tokio::io::stdin());
    let stdout = tokio::io::stdout();
    session.run(stdin, stdout).await?;

    Ok(())
}
