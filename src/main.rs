#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use twenty48::{
    autoplay::Policy,
    init_logging, run_interactive,
    session::{autoplay, SharedSession},
    GameConfig, GameEngine, RandomSpawner, DEFAULT_BOARD_SIZE, DEFAULT_WIN_TILE,
};

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
    /// Play a game in the terminal.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        #[arg(long, default_value_t = DEFAULT_WIN_TILE)]
        win_tile: u64,
    },
    /// Let the computer play one or more games side by side.
    Auto {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
        size: usize,
        #[arg(long, default_value_t = DEFAULT_WIN_TILE)]
        win_tile: u64,
        #[arg(long, value_enum, default_value_t = Policy::Corner)]
        policy: Policy,
        #[arg(long, default_value_t = 1)]
        games: usize,
        #[arg(long, default_value_t = 100_000)]
        max_moves: usize,
    },
}

#[cfg(feature = "std")]
fn spawner_for(seed: Option<u64>) -> RandomSpawner<SmallRng> {
    match seed {
        Some(s) => RandomSpawner::seeded(s),
        None => RandomSpawner::from_entropy(),
    }
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            seed,
            size,
            win_tile,
        } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let config = GameConfig::new(size, win_tile);
            let mut engine = GameEngine::new(config, spawner_for(seed))?;
            run_interactive(&mut engine)?;
        }
        Commands::Auto {
            seed,
            size,
            win_tile,
            policy,
            games,
            max_moves,
        } => {
            let config = GameConfig::new(size, win_tile);
            config.validate()?;
            let base_seed = seed.unwrap_or_else(rand::random);
            println!("Running {} game(s) from seed {}...", games, base_seed);

            let mut handles = Vec::with_capacity(games);
            for i in 0..games as u64 {
                let game_seed = base_seed.wrapping_add(i);
                let engine = GameEngine::new(config, RandomSpawner::seeded(game_seed))?;
                let session = SharedSession::new(engine);
                handles.push(tokio::spawn(async move {
                    // Policy draws use a stream separate from tile spawns.
                    let mut rng = SmallRng::seed_from_u64(game_seed.wrapping_add(1));
                    let report = autoplay(&session, policy, &mut rng, max_moves).await?;
                    Ok::<_, anyhow::Error>((game_seed, report))
                }));
            }

            let mut best = 0;
            for handle in handles {
                let (game_seed, report) = handle.await??;
                best = best.max(report.score);
                println!(
                    "seed {:>20}  score {:>8}  max tile {:>6}  moves {:>6}  {:?}",
                    game_seed, report.score, report.max_tile, report.moves, report.status
                );
            }
            println!("Best score: {}", best);
        }
    }
    Ok(())
}
