//! Console rendering of boards and match events.

use std::io::{self, Write};

use crate::{
    board::{Board, Grid},
    common::{BoardError, ShotResult},
    config::FIELD_SIZE,
    game::Side,
};

/// Receives match events from the controller.
pub trait Renderer {
    fn turn_started(&mut self, side: Side) -> io::Result<()>;

    fn shot_resolved(&mut self, side: Side, result: ShotResult) -> io::Result<()>;

    /// A human target was refused; the same turn is played again.
    fn shot_rejected(&mut self, error: BoardError) -> io::Result<()>;

    fn boards(&mut self, player: &Board, ai: &Board) -> io::Result<()>;

    fn game_over(&mut self, winner: Side) -> io::Result<()>;
}

/// Format a snapshot as a `|`-separated grid with 1-based headers.
pub fn format_grid(grid: &Grid) -> String {
    let mut out = String::new();
    let header: Vec<String> = (1..=FIELD_SIZE).map(|x| x.to_string()).collect();
    out.push_str(" |");
    out.push_str(&header.join("|"));
    out.push('\n');
    for (y, row) in grid.iter().enumerate() {
        let cells: Vec<String> = row.iter().map(|c| c.symbol().to_string()).collect();
        out.push_str(&format!("{}|{}\n", y + 1, cells.join("|")));
    }
    out
}

/// Renderer writing human-readable text to `W`.
pub struct ConsoleRenderer<W> {
    out: W,
    reveal_enemy: bool,
}

impl<W: Write> ConsoleRenderer<W> {
    /// `reveal_enemy` shows the computer's vessels, for debugging.
    pub fn new(out: W, reveal_enemy: bool) -> Self {
        Self { out, reveal_enemy }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for ConsoleRenderer<W> {
    fn turn_started(&mut self, side: Side) -> io::Result<()> {
        match side {
            Side::Player => writeln!(self.out, "Your turn"),
            Side::Ai => writeln!(self.out, "Computer's turn"),
        }
    }

    fn shot_resolved(&mut self, _side: Side, result: ShotResult) -> io::Result<()> {
        match result {
            ShotResult::Hit => writeln!(self.out, "Hit!"),
            ShotResult::Sunk => writeln!(self.out, "Hit! Vessel sunk!"),
            ShotResult::Miss => writeln!(self.out, "Miss!"),
        }
    }

    fn shot_rejected(&mut self, error: BoardError) -> io::Result<()> {
        match error {
            BoardError::AlreadyShot => {
                writeln!(self.out, "That cell was already shot, choose another one.")
            }
            _ => writeln!(
                self.out,
                "Coordinates are outside the board, choose another cell."
            ),
        }
    }

    fn boards(&mut self, player: &Board, ai: &Board) -> io::Result<()> {
        writeln!(self.out, "----- YOUR BOARD -----")?;
        write!(self.out, "{}", format_grid(&player.render(true)))?;
        writeln!(self.out, "--- COMPUTER BOARD ---")?;
        write!(self.out, "{}", format_grid(&ai.render(self.reveal_enemy)))?;
        writeln!(self.out, "----------------------")
    }

    fn game_over(&mut self, winner: Side) -> io::Result<()> {
        match winner {
            Side::Player => writeln!(self.out, "You win!"),
            Side::Ai => writeln!(self.out, "The computer wins!"),
        }
    }
}

/// [`Renderer`] that discards every event.
pub struct NoRender;

impl Renderer for NoRender {
    fn turn_started(&mut self, _side: Side) -> io::Result<()> {
        Ok(())
    }

    fn shot_resolved(&mut self, _side: Side, _result: ShotResult) -> io::Result<()> {
        Ok(())
    }

    fn shot_rejected(&mut self, _error: BoardError) -> io::Result<()> {
        Ok(())
    }

    fn boards(&mut self, _player: &Board, _ai: &Board) -> io::Result<()> {
        Ok(())
    }

    fn game_over(&mut self, _winner: Side) -> io::Result<()> {
        Ok(())
    }
}

/// Rules and a sample board shown before the match.
pub fn print_greeting<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Welcome to Sea Battle!

You play against the computer on a {n}x{n} grid. x runs left to right,
y runs top to bottom:

 |1|2|3|4|5|6  <- x
1|■|■|■|◦|■|◦
2|◦|◦|◦|◦|◦|◦
3|■|◦|■|◦|■|◦
4|◦|◦|◦|◦|◦|◦
5|■|■|◦|◦|■|■
6|◦|◦|◦|◦|◦|◦
^ y

Enter a shot as two numbers separated by a space, e.g. \"1 2\".
A hit earns another shot. X marks a hit, T a miss, • the water around
a sunk vessel.
",
        n = FIELD_SIZE
    )
}
