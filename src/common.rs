//! Common types: board errors, turn errors and shot results.

use std::io;

use thiserror::Error;

/// Result of a shot that the board accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// Shot landed on water, a contour or a revealed contour.
    Miss,
    /// Shot damaged a vessel that is still afloat.
    Hit,
    /// Shot removed the last health point of a vessel.
    Sunk,
}

impl ShotResult {
    /// `true` for both `Hit` and `Sunk`; a hit earns the shooter another shot.
    pub fn is_hit(self) -> bool {
        !matches!(self, ShotResult::Miss)
    }
}

/// Errors returned by coordinate, vessel and board operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// A coordinate or a vessel run falls outside the grid.
    #[error("value out of range")]
    OutOfRange,
    /// A vessel length or health value breaks its invariant.
    #[error("value is invalid")]
    InvalidValue,
    /// The vessel would touch or overlap another vessel.
    #[error("cell is busy")]
    CellBusy,
    /// The board already carries the full fleet.
    #[error("board already carries the full fleet")]
    AlreadyFull,
    /// The target cell has already been shot.
    #[error("cell already shot")]
    AlreadyShot,
}

/// Errors that end or interrupt a single turn.
#[derive(Debug, Error)]
pub enum TurnError {
    #[error(transparent)]
    Board(#[from] BoardError),
    /// The input stream closed while waiting for a target.
    #[error("input closed before a target was entered")]
    InputClosed,
    #[error("console i/o failed: {0}")]
    Io(#[from] io::Error),
    /// Every cell of the enemy grid has already been shot.
    #[error("no untouched cells left to target")]
    NoTargetsLeft,
}

impl TurnError {
    /// Board rejections a human can fix by entering another target.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            TurnError::Board(BoardError::OutOfRange | BoardError::AlreadyShot)
        )
    }
}
