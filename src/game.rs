use log::{info, warn};
use rand::rngs::SmallRng;
use serde::Serialize;

use crate::{
    board::Board,
    common::{BoardError, ShotResult, TurnError},
    generator::generate_random_board,
    player::Player,
    ui::Renderer,
};

/// The two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Ai,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }
}

/// Whose turn it is, or who won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    PlayerTurn,
    AiTurn,
    GameOver { winner: Side },
}

impl MatchState {
    /// Turn order after a shot: a hit keeps the turn, a miss passes it.
    pub fn after_shot(self, hit: bool) -> MatchState {
        match (self, hit) {
            (MatchState::GameOver { .. }, _) | (_, true) => self,
            (MatchState::PlayerTurn, false) => MatchState::AiTurn,
            (MatchState::AiTurn, false) => MatchState::PlayerTurn,
        }
    }
}

/// What a single [`Match::step`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Fired { side: Side, result: ShotResult },
    /// The human's target was refused; the turn is unchanged.
    Rejected(BoardError),
    /// The match had already ended.
    Finished { winner: Side },
}

/// Final tally of a finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub winner: Side,
    pub player_shots: usize,
    pub ai_shots: usize,
    /// Turns started, counting the opening one; a miss starts a new turn.
    pub turns: usize,
    pub player_afloat: usize,
    pub ai_afloat: usize,
}

/// Drives turns between two players shooting at each other's boards.
pub struct Match<P, A> {
    player: P,
    ai: A,
    player_board: Board,
    ai_board: Board,
    state: MatchState,
    rng: SmallRng,
    player_shots: usize,
    ai_shots: usize,
    turns: usize,
}

impl<P: Player, A: Player> Match<P, A> {
    /// Start a match on freshly generated boards. The computer's board is
    /// hidden from the player.
    pub fn new(player: P, ai: A, mut rng: SmallRng) -> Self {
        let player_board = generate_random_board(&mut rng, false);
        let ai_board = generate_random_board(&mut rng, true);
        Self::with_boards(player, ai, player_board, ai_board, rng)
    }

    /// Start a match on prepared boards.
    pub fn with_boards(
        player: P,
        ai: A,
        player_board: Board,
        ai_board: Board,
        rng: SmallRng,
    ) -> Self {
        Self {
            player,
            ai,
            player_board,
            ai_board,
            state: MatchState::PlayerTurn,
            rng,
            player_shots: 0,
            ai_shots: 0,
            turns: 1,
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn ai_board(&self) -> &Board {
        &self.ai_board
    }

    /// Turns started so far, the opening turn included.
    pub fn turns(&self) -> usize {
        self.turns
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn ai(&self) -> &A {
        &self.ai
    }

    /// Play one shot for the side to move.
    ///
    /// Out-of-range and repeated targets from the player side are caught
    /// here and reported as [`StepOutcome::Rejected`]; any other error ends
    /// the match loop.
    pub fn step(&mut self) -> Result<StepOutcome, TurnError> {
        let side = match self.state {
            MatchState::GameOver { winner } => return Ok(StepOutcome::Finished { winner }),
            MatchState::PlayerTurn => Side::Player,
            MatchState::AiTurn => Side::Ai,
        };
        let shot = match side {
            Side::Player => self.player.take_shot(&mut self.rng, &mut self.ai_board),
            Side::Ai => self.ai.take_shot(&mut self.rng, &mut self.player_board),
        };
        let result = match shot {
            Ok(result) => result,
            Err(TurnError::Board(e @ (BoardError::OutOfRange | BoardError::AlreadyShot)))
                if side == Side::Player =>
            {
                warn!("player shot rejected: {}", e);
                return Ok(StepOutcome::Rejected(e));
            }
            Err(e) => return Err(e),
        };

        match side {
            Side::Player => self.player_shots += 1,
            Side::Ai => self.ai_shots += 1,
        }
        self.state = self.state.after_shot(result.is_hit());
        if !result.is_hit() {
            self.turns += 1;
        }
        let loser = if self.player_board.all_sunk() {
            Some(Side::Player)
        } else if self.ai_board.all_sunk() {
            Some(Side::Ai)
        } else {
            None
        };
        if let Some(loser) = loser {
            self.state = MatchState::GameOver {
                winner: loser.opponent(),
            };
        }
        Ok(StepOutcome::Fired { side, result })
    }

    /// Play until one side has no vessels left.
    pub fn run<R: Renderer>(&mut self, renderer: &mut R) -> Result<MatchSummary, TurnError> {
        info!("match started");
        renderer.boards(&self.player_board, &self.ai_board)?;
        loop {
            let side = match self.state {
                MatchState::GameOver { winner } => {
                    renderer.game_over(winner)?;
                    let summary = self.summary(winner);
                    info!("match over: {:?}", summary);
                    return Ok(summary);
                }
                MatchState::PlayerTurn => Side::Player,
                MatchState::AiTurn => Side::Ai,
            };
            renderer.turn_started(side)?;
            match self.step()? {
                StepOutcome::Fired { side, result } => {
                    renderer.shot_resolved(side, result)?;
                    renderer.boards(&self.player_board, &self.ai_board)?;
                }
                StepOutcome::Rejected(e) => renderer.shot_rejected(e)?,
                StepOutcome::Finished { .. } => {}
            }
        }
    }

    fn summary(&self, winner: Side) -> MatchSummary {
        MatchSummary {
            winner,
            player_shots: self.player_shots,
            ai_shots: self.ai_shots,
            turns: self.turns,
            player_afloat: self.player_board.afloat_count(),
            ai_afloat: self.ai_board.afloat_count(),
        }
    }
}
