use seabattle::{BoardError, Coordinate, Orientation, Vessel, FIELD_SIZE};

fn at(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y).unwrap()
}

#[test]
fn test_occupied_cells_follow_orientation() -> Result<(), BoardError> {
    let h = Vessel::intact(3, at(1, 4), Orientation::Horizontal)?;
    let cells: Vec<_> = h.occupied_cells().collect();
    assert_eq!(cells, vec![at(1, 4), at(2, 4), at(3, 4)]);

    let v = Vessel::intact(2, at(5, 0), Orientation::Vertical)?;
    let cells: Vec<_> = v.occupied_cells().collect();
    assert_eq!(cells, vec![at(5, 0), at(5, 1)]);
    assert!(v.contains(at(5, 1)));
    assert!(!v.contains(at(5, 2)));
    Ok(())
}

#[test]
fn test_length_limits() {
    assert_eq!(
        Vessel::intact(4, at(0, 0), Orientation::Horizontal).unwrap_err(),
        BoardError::OutOfRange
    );
    assert_eq!(
        Vessel::intact(0, at(0, 0), Orientation::Horizontal).unwrap_err(),
        BoardError::InvalidValue
    );
}

#[test]
fn test_run_must_stay_on_grid() {
    let last = FIELD_SIZE as i32 - 1;
    assert!(Vessel::intact(3, at(last - 2, 0), Orientation::Horizontal).is_ok());
    assert_eq!(
        Vessel::intact(3, at(last - 1, 0), Orientation::Horizontal).unwrap_err(),
        BoardError::OutOfRange
    );
    assert_eq!(
        Vessel::intact(2, at(0, last), Orientation::Vertical).unwrap_err(),
        BoardError::OutOfRange
    );
    assert!(Vessel::intact(2, at(0, last), Orientation::Horizontal).is_ok());
}

#[test]
fn test_health_bounds() {
    assert_eq!(
        Vessel::new(2, at(0, 0), Orientation::Vertical, 3).unwrap_err(),
        BoardError::InvalidValue
    );
    let damaged = Vessel::new(2, at(0, 0), Orientation::Vertical, 1).unwrap();
    assert_eq!(damaged.health(), 1);
    assert!(!damaged.is_sunk());
    assert!(Vessel::new(2, at(0, 0), Orientation::Vertical, 0)
        .unwrap()
        .is_sunk());
}
