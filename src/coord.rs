//! Validated grid positions.

use core::fmt;

use crate::common::BoardError;
use crate::config::{FIELD_SIZE, NEIGHBOR_OFFSETS};

/// A position on the grid, `x` is the column and `y` the row, both 0-based.
///
/// The only way to obtain one is [`Coordinate::new`] (or a helper built on
/// it), so every value in circulation lies inside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    x: usize,
    y: usize,
}

impl Coordinate {
    /// Build a coordinate, rejecting anything outside `0..FIELD_SIZE`.
    pub fn new(x: i32, y: i32) -> Result<Self, BoardError> {
        let in_range = |v: i32| v >= 0 && (v as usize) < FIELD_SIZE;
        if !in_range(x) || !in_range(y) {
            return Err(BoardError::OutOfRange);
        }
        Ok(Coordinate {
            x: x as usize,
            y: y as usize,
        })
    }

    /// For callers that have already bounded `x` and `y`.
    pub(crate) fn in_grid(x: usize, y: usize) -> Self {
        debug_assert!(x < FIELD_SIZE && y < FIELD_SIZE);
        Coordinate { x, y }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    /// The coordinate shifted by `(dx, dy)`, if it stays on the grid.
    pub fn offset(&self, dx: i32, dy: i32) -> Result<Self, BoardError> {
        Coordinate::new(self.x as i32 + dx, self.y as i32 + dy)
    }

    /// In-grid cells of the surrounding 3×3 square, centre excluded.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        NEIGHBOR_OFFSETS
            .into_iter()
            .filter_map(move |(dx, dy)| self.offset(dx, dy).ok())
    }

    /// Every coordinate of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..FIELD_SIZE).flat_map(|y| (0..FIELD_SIZE).map(move |x| Coordinate::in_grid(x, y)))
    }
}

impl fmt::Display for Coordinate {
    /// 1-based, the way players type it.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x + 1, self.y + 1)
    }
}
