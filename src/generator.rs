//! Random fleet placement.

use log::debug;
use rand::Rng;

use crate::board::Board;
use crate::common::BoardError;
use crate::config::{FIELD_SIZE, FLEET, FLEET_SIZE, MAX_PLACEMENT_FAILURES};
use crate::coord::Coordinate;
use crate::ship::{Orientation, Vessel};

/// Build a board carrying the full fleet at random positions.
///
/// Each attempt places the fleet longest hull first. After more than
/// `MAX_PLACEMENT_FAILURES` rejected placements the attempt is dropped and
/// a fresh board is started.
pub fn generate_random_board<R: Rng + ?Sized>(rng: &mut R, hide_occupied: bool) -> Board {
    let mut attempts = 0usize;
    loop {
        attempts += 1;
        if let Some(board) = try_fill_board(rng, hide_occupied) {
            debug!("fleet placed after {} board attempt(s)", attempts);
            return board;
        }
    }
}

fn try_fill_board<R: Rng + ?Sized>(rng: &mut R, hide_occupied: bool) -> Option<Board> {
    let mut board = Board::new(hide_occupied);
    let mut failures = 0usize;
    for &(length, count) in FLEET.iter() {
        for _ in 0..count {
            loop {
                match random_vessel(rng, length).and_then(|v| board.place_vessel(v)) {
                    Ok(()) => break,
                    Err(BoardError::CellBusy | BoardError::OutOfRange) => {
                        failures += 1;
                        if failures > MAX_PLACEMENT_FAILURES {
                            debug!("abandoning board after {} failed placements", failures);
                            return None;
                        }
                    }
                    Err(e) => {
                        debug!("unexpected placement error: {}", e);
                        return None;
                    }
                }
            }
        }
    }
    (board.vessels().len() == FLEET_SIZE).then_some(board)
}

/// A full-health vessel at a random origin and orientation. The run may
/// leave the grid, in which case construction fails with `OutOfRange`.
fn random_vessel<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Result<Vessel, BoardError> {
    let origin = Coordinate::new(
        rng.random_range(0..FIELD_SIZE as i32),
        rng.random_range(0..FIELD_SIZE as i32),
    )?;
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    Vessel::intact(length, origin, orientation)
}
