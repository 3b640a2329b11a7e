use std::io::{self, BufRead, Write};

use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use seabattle::{
    init_logging,
    ui::{print_greeting, ConsoleRenderer},
    AiPlayer, CliPlayer, Match,
};

#[derive(Parser)]
#[command(author, version, about = "Sea battle against the computer", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Start immediately without asking for confirmation.
    #[arg(long)]
    yes: bool,
    /// Show the computer's vessels on its board.
    #[arg(long)]
    reveal: bool,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let cli = Cli::parse();

    let mut stdout = io::stdout();
    print_greeting(&mut stdout)?;
    if !cli.yes {
        write!(stdout, "Start the game? Enter \"y\" to begin: ")?;
        stdout.flush()?;
        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer)?;
        if answer.trim() != "y" {
            return Ok(());
        }
    }
    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }

    let rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let mut game = Match::new(CliPlayer::stdio(), AiPlayer::new(), rng);
    let mut renderer = ConsoleRenderer::new(io::stdout(), cli.reveal);
    game.run(&mut renderer)?;
    Ok(())
}
