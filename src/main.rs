use std::process;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::SeedableRng;

use fractpunk::{ChatCompletionOracle, OracleConfig, PlaceholderLineMark, RenderConfig};

fn main() {
    env_logger::init();

    if let Err(e) = try_main() {
        eprintln!("fractpunk: {e}");
        process::exit(1);
    }
}

fn try_main() -> fractpunk::Result<()> {
    // Wall-clock seed: runs are intentionally not reproducible.
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let mut rng = StdRng::seed_from_u64(seed);

    let config = RenderConfig::default();
    let oracle = ChatCompletionOracle::new(OracleConfig::default())?;

    fractpunk::run(&config, &oracle, &mut rng, &PlaceholderLineMark)
}
