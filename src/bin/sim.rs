use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use twenty48::{autoplay::{play_out, Policy}, GameConfig, GameEngine, RandomSpawner};

const MAX_MOVES: usize = 100_000;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [random|corner]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let policy = match args.get(2).map(String::as_str) {
        None | Some("corner") => Policy::Corner,
        Some("random") => Policy::Random,
        Some(other) => anyhow::bail!("unknown policy '{}'", other),
    };

    let mut engine = GameEngine::new(GameConfig::default(), RandomSpawner::seeded(seed))
        .map_err(|e| anyhow::anyhow!(e))?;
    let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let report = play_out(&mut engine, policy, &mut rng, MAX_MOVES);

    let result = json!({
        "seed": seed,
        "policy": policy,
        "score": report.score,
        "max_tile": report.max_tile,
        "moves": report.moves,
        "status": report.status,
        "won": report.won,
        "board": engine.state().board,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
