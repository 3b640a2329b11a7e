//! Fixed rules of the game.

/// Width and height of the square grid.
pub const FIELD_SIZE: usize = 6;

/// Longest vessel that may be built.
pub const MAX_VESSEL_LENGTH: usize = 3;

/// Fleet composition as `(length, count)` pairs, longest hulls first.
pub const FLEET: [(usize, usize); 3] = [(3, 1), (2, 2), (1, 4)];

/// Number of vessels a complete board carries.
pub const FLEET_SIZE: usize = 1 + 2 + 4;

/// Full 3×3 neighbourhood minus the centre.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Follow-up directions tried by the heuristic after a hit.
pub const ORTHOGONAL_OFFSETS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Placement failures tolerated before the generator starts a fresh board.
pub const MAX_PLACEMENT_FAILURES: usize = 50;

/// Rejected follow-up candidates tolerated before the heuristic shoots at random.
pub const MAX_FOLLOW_UP_FAILURES: usize = 5;
