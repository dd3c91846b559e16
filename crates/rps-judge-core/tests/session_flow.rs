//! Integration tests for whole console sessions.
//!
//! These drive `Session::run` with in-memory input and a scripted judge.

use rps_judge_core::{
    games::{GameState, Move, ScriptedMoves},
    judge::{JudgeError, MockJudge},
    referee::Referee,
    session::{Session, SessionError},
};

const USER_WINS: &str = r#"{"round":1,"user_move":"rock","bot_move":"scissors","round_winner":"user","bomb_consumed":false,"explanation":"Rock crushes scissors."}"#;
const BOT_WINS_BOMB_SPENT: &str = r#"{"round":2,"user_move":"bomb","bot_move":"bomb","round_winner":"bot","bomb_consumed":true}"#;
const DRAW: &str = r#"{"round":3,"user_move":"paper","bot_move":"paper","round_winner":"draw","bomb_consumed":false}"#;

fn session(judge: &MockJudge) -> Session<MockJudge, ScriptedMoves> {
    let referee = Referee::new(
        "RULES",
        judge.clone(),
        ScriptedMoves::new([Move::Scissors, Move::Bomb, Move::Paper]),
    );
    Session::new(referee)
}

async fn play(
    session: &mut Session<MockJudge, ScriptedMoves>,
    input: &str,
) -> (Result<GameState, SessionError>, String) {
    play_bytes(session, input.as_bytes()).await
}

async fn play_bytes(
    session: &mut Session<MockJudge, ScriptedMoves>,
    input: &[u8],
) -> (Result<GameState, SessionError>, String) {
    let mut output = Vec::new();
    let result = session.run(input, &mut output).await;
    (result, String::from_utf8(output).unwrap())
}

/// Three rounds covering user win, bot win with bomb, and a draw
#[tokio::test]
async fn test_full_session_scores() {
    let judge = MockJudge::with_replies([USER_WINS, BOT_WINS_BOMB_SPENT, DRAW]);
    let mut session = session(&judge);

    let (result, output) = play(&mut session, "rock\nbomb\npaper\nquit\n").await;
    let state = result.unwrap();

    assert_eq!(
        state,
        GameState {
            round: 4,
            bomb_used: true,
            user_score: 1,
            bot_score: 1,
        }
    );
    assert_eq!(judge.calls(), 3);

    assert!(output.starts_with(
        "Rock-Paper-Scissors Plus - AI Judge (type 'quit' to exit)\n\nYour move: "
    ));
    assert_eq!(output.matches("-----ROUND RESULT-----").count(), 3);
    assert!(output.contains("\"explanation\": \"Rock crushes scissors.\""));
    assert!(output.ends_with("Final Score: \nUser: 1 | Bot: 1\n"));
}

/// The state each prompt was rendered from follows the scoreboard
#[tokio::test]
async fn test_prompts_follow_state() {
    let judge = MockJudge::with_replies([USER_WINS, BOT_WINS_BOMB_SPENT, DRAW]);
    let mut session = session(&judge);

    play(&mut session, "rock\nbomb\npaper\nquit\n").await.0.unwrap();

    let prompts = judge.prompts();
    let expected = [
        ("Round Number: 1", "User bomb already used: False", "Bot move: scissors"),
        ("Round Number: 2", "User bomb already used: False", "Bot move: bomb"),
        ("Round Number: 3", "User bomb already used: True", "Bot move: paper"),
    ];
    for (prompt, (round, bomb, bot)) in prompts.iter().zip(expected) {
        assert!(prompt.user.contains(round), "{}", prompt.user);
        assert!(prompt.user.contains(bomb), "{}", prompt.user);
        assert!(prompt.user.contains(bot), "{}", prompt.user);
    }
}

/// Quit in any case, with padding, never reaches the judge
#[tokio::test]
async fn test_quit_variants_skip_judge() {
    for input in ["quit\n", "  QUIT  \n", "QuIt\r\n", ""] {
        let judge = MockJudge::with_replies([USER_WINS]);
        let mut session = session(&judge);

        let (result, output) = play(&mut session, input).await;

        assert_eq!(result.unwrap(), GameState::new(), "{:?}", input);
        assert_eq!(judge.calls(), 0, "{:?}", input);
        assert!(output.ends_with("User: 0 | Bot: 0\n"));
    }
}

/// Input after quit is never read
#[tokio::test]
async fn test_nothing_after_quit() {
    let judge = MockJudge::with_replies([USER_WINS, USER_WINS]);
    let mut session = session(&judge);

    let state = play(&mut session, "rock\nquit\nrock\n").await.0.unwrap();

    assert_eq!(state.round, 2);
    assert_eq!(judge.calls(), 1);
}

/// The player's line reaches the judge as typed
#[tokio::test]
async fn test_raw_input_forwarded() {
    let judge = MockJudge::with_replies([USER_WINS]);
    let mut session = session(&judge);

    play(&mut session, "  I pick Rock, obviously  \r\nquit\n").await.0.unwrap();

    let prompts = judge.prompts();
    assert!(prompts[0]
        .user
        .ends_with("User input:\n\"  I pick Rock, obviously  \"\n"));
}

/// A Latin-1 line is judged like any other and the session carries on to quit
#[tokio::test]
async fn test_non_utf8_input_is_judged() {
    let judge = MockJudge::with_replies([USER_WINS, DRAW]);
    let mut session = session(&judge);

    let (result, output) = play_bytes(&mut session, b"rock\ncaf\xe9\nquit\n").await;
    let state = result.unwrap();

    assert_eq!(state.round, 3);
    assert_eq!(judge.calls(), 2);
    assert!(judge.prompts()[1].user.contains("\"caf\u{FFFD}\""));
    assert!(output.ends_with("Final Score: \nUser: 1 | Bot: 0\n"));
}

/// A reply that is not JSON is reported and the same round is replayed
#[tokio::test]
async fn test_malformed_reply_replays_round() {
    let judge = MockJudge::with_replies(["The user clearly wins!", USER_WINS]);
    let mut session = session(&judge);

    let (result, output) = play(&mut session, "rock\nrock\nquit\n").await;
    let state = result.unwrap();

    assert_eq!(state.round, 2);
    assert_eq!(state.user_score, 1);
    assert!(output.contains("Judge returned an unreadable verdict"));
    assert!(output.contains("round 1 will be replayed."));

    let prompts = judge.prompts();
    assert_eq!(prompts.len(), 2);
    assert!(prompts[1].user.contains("Round Number: 1"));
}

/// A tie scores nobody but still moves the round on
#[tokio::test]
async fn test_missing_winner_is_a_tie() {
    let judge = MockJudge::with_replies([r#"{"explanation":"Both played paper."}"#]);
    let mut session = session(&judge);

    let state = play(&mut session, "paper\nquit\n").await.0.unwrap();

    assert_eq!(
        state,
        GameState {
            round: 2,
            bomb_used: false,
            user_score: 0,
            bot_score: 0,
        }
    );
}

/// An unreachable judge ends the session after printing the score
#[tokio::test]
async fn test_judge_failure_ends_session() {
    let judge = MockJudge::with_replies([USER_WINS]);
    judge.push_error(JudgeError::Network("connection reset".to_string()));
    let mut session = session(&judge);

    let (result, output) = play(&mut session, "rock\nrock\nrock\nquit\n").await;

    assert!(matches!(
        result,
        Err(SessionError::Judge(JudgeError::Network(_)))
    ));
    assert_eq!(judge.calls(), 2);
    assert_eq!(session.state().round, 2);
    assert!(output.ends_with("Final Score: \nUser: 1 | Bot: 0\n"));
}

/// After N judged rounds the round counter is 1 + N
#[tokio::test]
async fn test_round_counter_tracks_judged_rounds() {
    let rounds = 12;
    let judge = MockJudge::new();
    for i in 0..rounds {
        let winner = ["user", "bot", "draw"][i % 3];
        judge.push_reply(format!(r#"{{"round_winner":"{}"}}"#, winner));
    }
    let mut session = session(&judge);

    let input = "rock\n".repeat(rounds) + "quit\n";
    let state = play(&mut session, &input).await.0.unwrap();

    assert_eq!(state.round, 1 + rounds as u32);
    assert_eq!(state.user_score, 4);
    assert_eq!(state.bot_score, 4);
    assert!(!state.bomb_used);
}
