//! Tests for interactive and scripted play against in-memory streams.

use noughts_console::{BoardRenderer, ConsoleConfig, run_interactive, run_replay};
use noughts_engine::{GameEngine, GameStatus, Mark, Position};

fn play(script: &str) -> (GameEngine, GameStatus, String) {
    let mut game = GameEngine::new();
    let mut output = Vec::new();
    let status = run_interactive(
        &mut game,
        &BoardRenderer::default(),
        script.as_bytes(),
        &mut output,
    )
    .expect("session runs");
    (game, status, String::from_utf8(output).expect("utf-8 output"))
}

fn moves(list: &[&str]) -> Vec<String> {
    list.iter().map(|m| m.to_string()).collect()
}

#[test]
fn test_interactive_game_to_a_win() {
    let (game, status, output) = play("0 0\n1 0\n0 1\n1 1\n0 2\n");
    assert_eq!(status, GameStatus::CrossWon);
    assert_eq!(game.history().len(), 5);
    assert!(output.contains("x|x|x"));
    assert!(output.trim_end().ends_with("Cross (x) wins!"));
}

#[test]
fn test_marks_alternate_without_being_named() {
    let (game, _, _) = play("center\n1\n");
    assert_eq!(game.board().cell(Position::Center).mark(), Some(Mark::Cross));
    assert_eq!(game.board().cell(Position::TopLeft).mark(), Some(Mark::Naught));
}

#[test]
fn test_refused_moves_are_reported_and_retried() {
    let (game, status, output) = play("1 1\n1 1\n3 3\nnonsense\n0 0\n");
    assert_eq!(status, GameStatus::CrossTurn);
    assert_eq!(game.history().len(), 2);
    assert!(output.contains("Illegal move: Center (1, 1) is already occupied"));
    assert!(output.contains("Illegal move: Coordinates (3, 3) are off the board"));
    assert!(output.contains("Can't read \"nonsense\" as a move"));
}

#[test]
fn test_quit_and_end_of_input_leave_game_running() {
    let (game, status, _) = play("0 0\nquit\n1 1\n");
    assert_eq!(status, GameStatus::NaughtTurn);
    assert_eq!(game.history().len(), 1);

    let (_, status, _) = play("");
    assert_eq!(status, GameStatus::CrossTurn);
}

#[test]
fn test_help_lists_move_forms() {
    let (_, _, output) = play("help\n");
    assert!(output.contains("<row> <col>"));
}

#[test]
fn test_replay_draw() {
    let mut output = Vec::new();
    let game = run_replay(
        &moves(&["0,0", "1,0", "0,1", "1,1", "1,2", "0,2", "2,0", "2,2", "2,1"]),
        &BoardRenderer::default(),
        &mut output,
    )
    .expect("legal replay");

    assert_eq!(game.status(), GameStatus::Draw);
    let output = String::from_utf8(output).expect("utf-8 output");
    assert!(output.starts_with("x|x|o\n-----\no|o|x\n-----\nx|x|o"));
    assert!(output.contains("It's a draw."));
}

#[test]
fn test_replay_uses_configured_glyphs() {
    let config = ConsoleConfig::from_toml("cross_glyph = \"X\"\nnaught_glyph = \"O\"")
        .expect("valid");
    let mut output = Vec::new();
    run_replay(&moves(&["1,1", "0,0"]), &BoardRenderer::new(&config), &mut output)
        .expect("legal replay");

    let output = String::from_utf8(output).expect("utf-8 output");
    assert!(output.starts_with("O| | \n-----\n |X| "));
}

#[test]
fn test_replay_rejects_illegal_move() {
    let mut output = Vec::new();
    let err = run_replay(&moves(&["0,0", "0,0"]), &BoardRenderer::default(), &mut output)
        .unwrap_err();
    assert!(err.to_string().contains("Move 2 (0,0) refused"));
    assert!(output.is_empty());
}

#[test]
fn test_replay_rejects_moves_after_game_end() {
    let mut output = Vec::new();
    let err = run_replay(
        &moves(&["0,0", "1,0", "0,1", "1,1", "0,2", "2,2"]),
        &BoardRenderer::default(),
        &mut output,
    )
    .unwrap_err();
    assert!(err.to_string().contains("after the game ended"));
}

#[test]
fn test_replay_rejects_unparseable_move() {
    let mut output = Vec::new();
    let err = run_replay(&moves(&["middle"]), &BoardRenderer::default(), &mut output)
        .unwrap_err();
    assert!(err.to_string().contains("is not `row,col`"));
}
