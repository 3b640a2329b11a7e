use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde_json::json;

use seabattle::{init_logging, ui::NoRender, AiPlayer, Match};

/// Play heuristic-vs-heuristic matches and print one JSON summary per match.
#[derive(Parser)]
struct Args {
    #[arg(long, default_value_t = 1)]
    seed: u64,
    #[arg(long, default_value_t = 1)]
    games: u64,
}

fn main() -> anyhow::Result<()> {
    init_logging()?;
    let args = Args::parse();

    for game in 0..args.games {
        let seed = args.seed.wrapping_add(game);
        let rng = SmallRng::seed_from_u64(seed);
        let mut sim = Match::new(AiPlayer::new(), AiPlayer::new(), rng);
        let summary = sim.run(&mut NoRender)?;
        let line = json!({
            "seed": seed,
            "summary": summary,
        });
        println!("{}", serde_json::to_string(&line)?);
    }
    Ok(())
}
