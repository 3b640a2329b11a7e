//! Heuristic computer opponent.
//!
//! Shoots at random until it scores a hit, then tries the orthogonal
//! neighbours of that hit. Every shot it fires is remembered so it never
//! targets the same cell twice.

use log::debug;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::{
    board::Board,
    common::{ShotResult, TurnError},
    config::{MAX_FOLLOW_UP_FAILURES, ORTHOGONAL_OFFSETS},
    coord::Coordinate,
    player::Player,
};

/// Outcome recorded for a remembered shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Hit,
    Miss,
}

/// Shots fired so far, oldest first, with their outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShotMemory {
    targets: Vec<Coordinate>,
    outcomes: Vec<ShotOutcome>,
}

impl ShotMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember a shot. A target already in memory is ignored.
    pub fn record(&mut self, target: Coordinate, outcome: ShotOutcome) {
        if self.contains(target) {
            return;
        }
        self.targets.push(target);
        self.outcomes.push(outcome);
    }

    pub fn contains(&self, target: Coordinate) -> bool {
        self.targets.contains(&target)
    }

    /// Target of the most recent shot, if that shot was a hit.
    pub fn last_hit(&self) -> Option<Coordinate> {
        match self.outcomes.last() {
            Some(ShotOutcome::Hit) => self.targets.last().copied(),
            _ => None,
        }
    }

    pub fn targets(&self) -> &[Coordinate] {
        &self.targets
    }

    pub fn outcomes(&self) -> &[ShotOutcome] {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}

/// Computer player following up on its previous hit.
#[derive(Debug, Clone, Default)]
pub struct AiPlayer {
    memory: ShotMemory,
}

impl AiPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume with a previously recorded shot history.
    pub fn with_memory(memory: ShotMemory) -> Self {
        Self { memory }
    }

    pub fn memory(&self) -> &ShotMemory {
        &self.memory
    }

    /// Pick the next target without firing.
    ///
    /// After a hit, up to `MAX_FOLLOW_UP_FAILURES` random orthogonal
    /// neighbours are tried; off-grid or already shot candidates count as
    /// failures. Otherwise, or once the follow-up gives up, any untouched
    /// cell is chosen uniformly.
    pub fn select_target<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        enemy: &Board,
    ) -> Result<Coordinate, TurnError> {
        let taken = |c: Coordinate| self.memory.contains(c) || enemy.is_shot(c);

        if let Some(last) = self.memory.last_hit() {
            let mut failures = 0;
            while failures < MAX_FOLLOW_UP_FAILURES {
                let pick = rng.random_range(0..ORTHOGONAL_OFFSETS.len());
                let (dx, dy) = ORTHOGONAL_OFFSETS[pick];
                match last.offset(dx, dy) {
                    Ok(candidate) if !taken(candidate) => {
                        debug!("following up hit at {} with {}", last, candidate);
                        return Ok(candidate);
                    }
                    _ => failures += 1,
                }
            }
            debug!("no follow-up around {}, shooting at random", last);
        }

        let open: Vec<Coordinate> = Coordinate::all().filter(|&c| !taken(c)).collect();
        open.choose(rng).copied().ok_or(TurnError::NoTargetsLeft)
    }
}

impl Player for AiPlayer {
    fn take_shot(
        &mut self,
        rng: &mut SmallRng,
        enemy: &mut Board,
    ) -> Result<ShotResult, TurnError> {
        let target = self.select_target(rng, enemy)?;
        let result = enemy.resolve_shot(target)?;
        let outcome = if result.is_hit() {
            ShotOutcome::Hit
        } else {
            ShotOutcome::Miss
        };
        self.memory.record(target, outcome);
        debug!("ai fired at {} -> {:?}", target, result);
        Ok(result)
    }
}
