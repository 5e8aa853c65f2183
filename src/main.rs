#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{init_logging, place_ships_randomly, play_cpu_vs_cpu, Board};
#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play headless computer-vs-computer matches and print a JSON summary per match.
    Sim {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1)]
        games: u64,
    },
    /// Place a random fleet and print the board.
    Show {
        #[arg(long, help = "Fix RNG seed for reproducible layouts (e.g., --seed 12345)")]
        seed: Option<u64>,
    },
}

#[cfg(feature = "std")]
fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        use rand::Rng;
        rand::rng().random()
    })
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sim { seed, games } => {
            let base = resolve_seed(seed);
            log::info!("simulating {} match(es) from seed {}", games, base);
            for i in 0..games {
                let report = play_cpu_vs_cpu(base.wrapping_add(i))?;
                println!("{}", serde_json::to_string(&report)?);
            }
        }
        Commands::Show { seed } => {
            let seed = resolve_seed(seed);
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut board = Board::new();
            place_ships_randomly(&mut board, &mut rng)?;
            println!("Seed {}", seed);
            print!("{}", board);
        }
    }
    Ok(())
}
