use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{ShotResult, TurnError},
};

/// Interface implemented by different player types.
///
/// A player picks a target on the enemy board and fires at it. The match
/// controller is generic over this trait, so each side is a concrete type.
pub trait Player {
    /// Choose a target and resolve it against `enemy`.
    fn take_shot(&mut self, rng: &mut SmallRng, enemy: &mut Board)
        -> Result<ShotResult, TurnError>;
}
