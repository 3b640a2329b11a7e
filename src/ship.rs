//! Vessel definitions and the cells they occupy.

use core::fmt;

use crate::common::BoardError;
use crate::config::{FIELD_SIZE, MAX_VESSEL_LENGTH};
use crate::coord::Coordinate;

/// Orientation of a vessel on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Runs along +x from the origin.
    Horizontal,
    /// Runs along +y from the origin.
    Vertical,
}

/// A straight run of 1..=3 cells with its remaining health.
#[derive(Clone, PartialEq, Eq)]
pub struct Vessel {
    length: usize,
    origin: Coordinate,
    orientation: Orientation,
    health: usize,
}

impl Vessel {
    /// Build a vessel whose run starts at `origin`.
    ///
    /// Fails with `OutOfRange` when the hull is longer than allowed or would
    /// leave the grid, and with `InvalidValue` for a zero length or a health
    /// above the length.
    pub fn new(
        length: usize,
        origin: Coordinate,
        orientation: Orientation,
        health: usize,
    ) -> Result<Self, BoardError> {
        if length > MAX_VESSEL_LENGTH {
            return Err(BoardError::OutOfRange);
        }
        if length < 1 {
            return Err(BoardError::InvalidValue);
        }
        let start = match orientation {
            Orientation::Horizontal => origin.x(),
            Orientation::Vertical => origin.y(),
        };
        if start + length > FIELD_SIZE {
            return Err(BoardError::OutOfRange);
        }
        if health > length {
            return Err(BoardError::InvalidValue);
        }
        Ok(Vessel {
            length,
            origin,
            orientation,
            health,
        })
    }

    /// A vessel at full health.
    pub fn intact(
        length: usize,
        origin: Coordinate,
        orientation: Orientation,
    ) -> Result<Self, BoardError> {
        Vessel::new(length, origin, orientation, length)
    }

    /// Cells covered by the hull, starting at the origin.
    pub fn occupied_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        (0..self.length).map(move |i| {
            let (x, y) = match self.orientation {
                Orientation::Horizontal => (self.origin.x() + i, self.origin.y()),
                Orientation::Vertical => (self.origin.x(), self.origin.y() + i),
            };
            Coordinate::in_grid(x, y)
        })
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.occupied_cells().any(|c| c == coord)
    }

    /// Take one point of damage. Returns `true` only for the hit that
    /// brings health from 1 to 0; a wreck takes no further damage.
    pub(crate) fn take_hit(&mut self) -> bool {
        if self.health == 0 {
            return false;
        }
        self.health -= 1;
        self.health == 0
    }

    pub fn is_sunk(&self) -> bool {
        self.health == 0
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn health(&self) -> usize {
        self.health
    }
}

impl fmt::Debug for Vessel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Vessel {{ length: {}, origin: {}, orientation: {:?}, health: {} }}",
            self.length, self.origin, self.orientation, self.health,
        )
    }
}
