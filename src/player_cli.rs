use std::io::{self, BufRead, StdinLock, Stdout, Write};

use log::debug;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{ShotResult, TurnError},
    coord::Coordinate,
    player::Player,
};

/// Parse a `"<x> <y>"` line into its two integers.
pub fn parse_target(input: &str) -> Option<(i32, i32)> {
    let mut parts = input.split_whitespace();
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((x, y))
}

/// Human player typing 1-based targets on a console.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player reading from stdin and prompting on stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prompt until a well-formed line arrives. Range is not checked here.
    fn read_target(&mut self) -> Result<(i32, i32), TurnError> {
        loop {
            write!(self.output, "Enter target x y: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(TurnError::InputClosed);
            }
            match parse_target(&line) {
                Some(target) => return Ok(target),
                None => writeln!(
                    self.output,
                    "Invalid format, enter two numbers separated by a space, e.g. 1 2"
                )?,
            }
        }
    }
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    /// Out-of-range and repeated targets are returned to the caller.
    fn take_shot(
        &mut self,
        _rng: &mut SmallRng,
        enemy: &mut Board,
    ) -> Result<ShotResult, TurnError> {
        let (x, y) = self.read_target()?;
        let target = Coordinate::new(x.saturating_sub(1), y.saturating_sub(1))?;
        let result = enemy.resolve_shot(target)?;
        debug!("player fired at {} -> {:?}", target, result);
        Ok(result)
    }
}
