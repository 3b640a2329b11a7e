use seabattle::{Board, BoardError, CellState, Coordinate, Orientation, ShotResult, Vessel};

fn at(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y).unwrap()
}

#[test]
fn test_single_vessel_scenario() {
    let mut board = Board::new(false);
    board
        .place_vessel(Vessel::intact(1, at(2, 2), Orientation::Horizontal).unwrap())
        .unwrap();
    assert_eq!(board.afloat_count(), 1);

    let result = board.resolve_shot(at(2, 2)).unwrap();
    assert!(result.is_hit());
    assert_eq!(result, ShotResult::Sunk);
    assert_eq!(board.afloat_count(), 0);

    assert_eq!(
        board.resolve_shot(at(2, 2)).unwrap_err(),
        BoardError::AlreadyShot
    );

    let result = board.resolve_shot(at(0, 0)).unwrap();
    assert!(!result.is_hit());
    assert_eq!(board.cell(at(0, 0)), CellState::Miss);
}

#[test]
fn test_touching_vessels_are_rejected() {
    let mut board = Board::new(false);
    board
        .place_vessel(Vessel::intact(3, at(0, 0), Orientation::Horizontal).unwrap())
        .unwrap();
    let before = board.clone();

    // overlapping, edge-adjacent and diagonal-adjacent candidates
    for (len, x, y, o) in [
        (2, 1, 0, Orientation::Vertical),
        (1, 3, 0, Orientation::Horizontal),
        (2, 3, 1, Orientation::Horizontal),
        (1, 0, 1, Orientation::Vertical),
    ] {
        let v = Vessel::intact(len, at(x, y), o).unwrap();
        assert_eq!(board.place_vessel(v), Err(BoardError::CellBusy));
        assert_eq!(board, before);
    }

    // one cell of water between hulls is enough
    board
        .place_vessel(Vessel::intact(2, at(4, 0), Orientation::Vertical).unwrap())
        .unwrap();
    assert_eq!(board.vessels().len(), 2);
}

#[test]
fn test_sinking_reveals_every_contour_cell() {
    let mut board = Board::new(true);
    let vessel = Vessel::intact(3, at(1, 2), Orientation::Horizontal).unwrap();
    board.place_vessel(vessel.clone()).unwrap();
    board
        .place_vessel(Vessel::intact(1, at(5, 5), Orientation::Horizontal).unwrap())
        .unwrap();

    let contour: Vec<Coordinate> = Coordinate::all()
        .filter(|&c| board.cell(c) == CellState::Contour)
        .filter(|&c| vessel.occupied_cells().any(|v| v.neighbors().any(|n| n == c)))
        .collect();
    assert_eq!(contour.len(), 12);

    assert_eq!(board.resolve_shot(at(1, 2)), Ok(ShotResult::Hit));
    assert_eq!(board.resolve_shot(at(2, 2)), Ok(ShotResult::Hit));
    assert_eq!(board.afloat_count(), 2);
    assert_eq!(board.resolve_shot(at(3, 2)), Ok(ShotResult::Sunk));
    assert_eq!(board.afloat_count(), 1);

    for c in contour {
        assert_eq!(board.cell(c), CellState::VisibleContour, "{}", c);
    }
    // the other vessel keeps its hidden contour
    assert_eq!(board.cell(at(4, 4)), CellState::Contour);
    assert_eq!(board.render(false)[4][4], CellState::Empty);
}

#[test]
fn test_shots_on_contour_are_misses() {
    let mut board = Board::new(false);
    board
        .place_vessel(Vessel::intact(2, at(2, 2), Orientation::Vertical).unwrap())
        .unwrap();
    assert_eq!(board.cell(at(1, 2)), CellState::Contour);
    assert_eq!(board.resolve_shot(at(1, 2)), Ok(ShotResult::Miss));
    assert_eq!(board.cell(at(1, 2)), CellState::Miss);
    assert_eq!(board.afloat_count(), 1);
}

#[test]
fn test_owner_view_of_unhidden_board_shows_everything() {
    let mut board = Board::new(false);
    board
        .place_vessel(Vessel::intact(1, at(0, 0), Orientation::Horizontal).unwrap())
        .unwrap();
    let view = board.render(false);
    assert_eq!(view[0][0], CellState::Occupied);
    assert_eq!(view[1][1], CellState::Contour);
}
