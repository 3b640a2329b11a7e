use std::io::Cursor;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    Board, BoardError, CellState, CliPlayer, Coordinate, Player, ShotResult, TurnError,
};

#[test]
fn test_targets_are_one_based() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut board = Board::new(true);
    let mut out = Vec::new();
    let mut player = CliPlayer::new(Cursor::new("6 1\n"), &mut out);

    assert_eq!(player.take_shot(&mut rng, &mut board).unwrap(), ShotResult::Miss);
    assert_eq!(board.cell(Coordinate::new(5, 0).unwrap()), CellState::Miss);
}

#[test]
fn test_malformed_input_reprompts() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut board = Board::new(true);
    let mut out = Vec::new();
    {
        let mut player = CliPlayer::new(Cursor::new("hello\n1,2\n\n2 3\n"), &mut out);
        player.take_shot(&mut rng, &mut board).unwrap();
    }
    assert_eq!(board.cell(Coordinate::new(1, 2).unwrap()), CellState::Miss);

    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("Enter target x y: ").count(), 4);
    assert_eq!(text.matches("Invalid format").count(), 3);
}

#[test]
fn test_board_errors_are_returned() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut board = Board::new(true);
    let mut player = CliPlayer::new(Cursor::new("0 1\n7 7\n1 1\n1 1\n"), std::io::sink());

    for expected in [BoardError::OutOfRange, BoardError::OutOfRange] {
        match player.take_shot(&mut rng, &mut board) {
            Err(TurnError::Board(e)) => assert_eq!(e, expected),
            other => panic!("unexpected {:?}", other),
        }
    }
    player.take_shot(&mut rng, &mut board).unwrap();
    let err = player.take_shot(&mut rng, &mut board).unwrap_err();
    assert!(err.is_retryable());
    assert!(matches!(err, TurnError::Board(BoardError::AlreadyShot)));
}

#[test]
fn test_end_of_input() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut board = Board::new(true);
    let mut player = CliPlayer::new(Cursor::new(""), std::io::sink());
    let err = player.take_shot(&mut rng, &mut board).unwrap_err();
    assert!(matches!(err, TurnError::InputClosed));
    assert!(!err.is_retryable());
}
