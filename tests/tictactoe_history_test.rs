//! Tests for the snapshot history and win/draw detection.

use tictactoe_replay::{GameStatus, History, Move, MoveError, Player, Position, Square};

#[test]
fn test_win_detection_with_line() {
    let history = History::replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomLeft,
        Position::TopRight, // X wins top row
    ])
    .expect("Valid replay");

    let win = history.winning_line().expect("X should have won");
    assert_eq!(win.player, Player::X);
    assert_eq!(
        win.line,
        [Position::TopLeft, Position::TopCenter, Position::TopRight]
    );
    assert_eq!(history.status(), GameStatus::Won(win));
    assert_eq!(history.status().to_string(), "Winner: X");
}

#[test]
fn test_no_moves_after_win() {
    let mut history = History::replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomLeft,
        Position::TopRight,
    ])
    .expect("Valid replay");

    assert_eq!(history.play(Position::BottomRight), Err(MoveError::GameOver));
    assert_eq!(history.len(), 6);
}

#[test]
fn test_draw_detection() {
    let history = History::replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopRight,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight, // Draw
    ])
    .expect("Valid replay");

    assert_eq!(history.status(), GameStatus::Draw);
    assert_eq!(history.status().to_string(), "Game ended in a draw!");
    assert_eq!(history.winning_line(), None);
}

#[test]
fn test_rewinding_a_won_game_reopens_play() {
    let mut history = History::replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomLeft,
        Position::TopRight,
    ])
    .expect("Valid replay");

    history.jump_to(4).unwrap();
    assert_eq!(history.winning_line(), None);
    assert_eq!(history.status(), GameStatus::InProgress { next: Player::X });

    // X blocks nothing this time; the old winning move is discarded.
    history.play(Position::BottomRight).unwrap();
    assert_eq!(history.len(), 6);
    assert!(history.current_board().is_empty(Position::TopRight));
    assert_eq!(history.winning_line(), None);
}

#[test]
fn test_jump_keeps_snapshots_intact() {
    let mut history =
        History::replay(&[Position::Center, Position::TopLeft, Position::BottomRight]).unwrap();
    let snapshots = history.snapshots().to_vec();

    history.jump_to(0).unwrap();
    assert_eq!(history.snapshots(), snapshots.as_slice());
    assert_eq!(history.current_board().mark_count(), 0);
    assert_eq!(history.next_player(), Player::X);

    history.jump_to(2).unwrap();
    assert_eq!(
        history.current_board().get(Position::TopLeft),
        Square::Occupied(Player::O)
    );
}

#[test]
fn test_moves_recovered_from_snapshots() {
    let history =
        History::replay(&[Position::Center, Position::TopLeft, Position::BottomRight]).unwrap();
    assert_eq!(
        history.moves(),
        vec![
            Move::new(Player::X, Position::Center),
            Move::new(Player::O, Position::TopLeft),
            Move::new(Player::X, Position::BottomRight),
        ]
    );
    let descriptions: Vec<String> = history
        .entries()
        .iter()
        .map(|e| e.description().clone())
        .collect();
    assert_eq!(descriptions, ["Game start", "Move #1", "Move #2", "Move #3"]);
}

#[test]
fn test_replay_stops_at_illegal_move() {
    let result = History::replay(&[Position::Center, Position::Center]);
    assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
}

fn drawn_game() -> History {
    History::replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopRight,
        Position::TopCenter,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ])
    .expect("Valid replay")
}

#[test]
fn test_move_on_drawn_board_reports_occupied_square() {
    let mut history = drawn_game();
    assert_eq!(history.status(), GameStatus::Draw);

    assert_eq!(
        history.play(Position::Center),
        Err(MoveError::SquareOccupied(Position::Center))
    );
    assert_eq!(history.len(), 10);
    assert_eq!(history.current_move(), 9);
}

#[test]
fn test_transcript_of_finished_game() {
    let history = History::replay(&[
        Position::Center,
        Position::TopLeft,
        Position::TopCenter,
        Position::BottomRight,
        Position::BottomCenter, // X wins middle column
    ])
    .expect("Valid replay");

    let transcript = history.transcript();
    assert!(transcript.starts_with("Game start\n1|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9\n\n"));
    assert!(transcript.contains("Move #1 (X -> Center)\n1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9\n"));
    assert!(transcript.contains("Move #5 (X -> Bottom-center)\nO|X|3\n-+-+-\n4|X|6\n-+-+-\n7|X|O\n"));
    assert!(transcript.ends_with("Winner: X\n"));
}
