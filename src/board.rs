//! Game board: cell states, vessel placement and shot resolution.

use core::fmt;

use log::{debug, info};

use crate::common::{BoardError, ShotResult};
use crate::config::{FIELD_SIZE, FLEET_SIZE};
use crate::coord::Coordinate;
use crate::ship::Vessel;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    /// Covered by an undamaged part of a vessel.
    Occupied,
    Hit,
    Miss,
    /// Buffer around a vessel; hidden from the opponent.
    Contour,
    /// Buffer around a sunk vessel; shown to everyone.
    VisibleContour,
}

impl CellState {
    /// Console symbol for the cell.
    pub fn symbol(self) -> char {
        match self {
            CellState::Empty => 'O',
            CellState::Occupied => '■',
            CellState::Hit => 'X',
            CellState::Miss => 'T',
            CellState::Contour => '◦',
            CellState::VisibleContour => '•',
        }
    }

    fn is_shot(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }
}

/// Snapshot of every cell, indexed `[y][x]`.
pub type Grid = [[CellState; FIELD_SIZE]; FIELD_SIZE];

/// One player's grid and the vessels placed on it.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: Grid,
    vessels: Vec<Vessel>,
    hide_occupied: bool,
    afloat: usize,
}

impl Board {
    /// Create an empty board. `hide_occupied` marks a board whose vessels
    /// are concealed from the viewer.
    pub fn new(hide_occupied: bool) -> Self {
        Board {
            cells: [[CellState::Empty; FIELD_SIZE]; FIELD_SIZE],
            vessels: Vec::with_capacity(FLEET_SIZE),
            hide_occupied,
            afloat: 0,
        }
    }

    pub fn cell(&self, coord: Coordinate) -> CellState {
        self.cells[coord.y()][coord.x()]
    }

    fn set(&mut self, coord: Coordinate, state: CellState) {
        self.cells[coord.y()][coord.x()] = state;
    }

    pub fn vessels(&self) -> &[Vessel] {
        &self.vessels
    }

    /// Number of vessels with health left.
    pub fn afloat_count(&self) -> usize {
        self.afloat
    }

    pub fn all_sunk(&self) -> bool {
        self.afloat == 0
    }

    pub fn hides_occupied(&self) -> bool {
        self.hide_occupied
    }

    /// `true` once `coord` has been hit or missed.
    pub fn is_shot(&self, coord: Coordinate) -> bool {
        self.cell(coord).is_shot()
    }

    /// `true` when no vessel occupies `coord` or any of its neighbours.
    fn is_clear_around(&self, coord: Coordinate) -> bool {
        core::iter::once(coord)
            .chain(coord.neighbors())
            .all(|c| self.cell(c) != CellState::Occupied)
    }

    /// Mark the neighbours of `coord` as contour. Only empty and hidden
    /// contour cells are touched.
    fn stamp_contour(&mut self, coord: Coordinate, visible: bool) {
        let mark = if visible {
            CellState::VisibleContour
        } else {
            CellState::Contour
        };
        for c in coord.neighbors() {
            if matches!(self.cell(c), CellState::Empty | CellState::Contour) {
                self.set(c, mark);
            }
        }
    }

    /// Place a vessel, keeping a one-cell gap to every other vessel.
    ///
    /// The board is left untouched on error.
    pub fn place_vessel(&mut self, vessel: Vessel) -> Result<(), BoardError> {
        if self.vessels.len() >= FLEET_SIZE {
            return Err(BoardError::AlreadyFull);
        }
        if !vessel.occupied_cells().all(|c| self.is_clear_around(c)) {
            return Err(BoardError::CellBusy);
        }
        let cells: Vec<Coordinate> = vessel.occupied_cells().collect();
        for c in cells {
            self.stamp_contour(c, false);
            self.set(c, CellState::Occupied);
        }
        debug!("placed {:?}", vessel);
        if !vessel.is_sunk() {
            self.afloat += 1;
        }
        self.vessels.push(vessel);
        Ok(())
    }

    /// Fire at `coord`.
    pub fn resolve_shot(&mut self, coord: Coordinate) -> Result<ShotResult, BoardError> {
        match self.cell(coord) {
            CellState::Occupied => {
                let idx = self
                    .vessels
                    .iter()
                    .position(|v| v.contains(coord))
                    .ok_or(BoardError::InvalidValue)?;
                self.set(coord, CellState::Hit);
                if !self.vessels[idx].take_hit() {
                    return Ok(ShotResult::Hit);
                }
                let cells: Vec<Coordinate> = self.vessels[idx].occupied_cells().collect();
                for c in cells {
                    self.stamp_contour(c, true);
                }
                self.afloat -= 1;
                info!("vessel sunk at {}, {} afloat", coord, self.afloat);
                Ok(ShotResult::Sunk)
            }
            CellState::Empty | CellState::Contour | CellState::VisibleContour => {
                self.set(coord, CellState::Miss);
                Ok(ShotResult::Miss)
            }
            CellState::Hit | CellState::Miss => Err(BoardError::AlreadyShot),
        }
    }

    /// Snapshot of the board as a viewer sees it.
    ///
    /// Unless `for_owner` is set, a hiding board shows un-hit vessel cells
    /// and hidden contours as empty water.
    pub fn render(&self, for_owner: bool) -> Grid {
        if for_owner || !self.hide_occupied {
            return self.cells;
        }
        let mut grid = self.cells;
        for cell in grid.iter_mut().flatten() {
            if matches!(cell, CellState::Occupied | CellState::Contour) {
                *cell = CellState::Empty;
            }
        }
        grid
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{ afloat: {}, hide_occupied: {}, vessels: {:?}",
            self.afloat, self.hide_occupied, self.vessels
        )?;
        for row in self.cells.iter() {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            writeln!(f, "  {}", line)?;
        }
        write!(f, "}}")
    }
}
