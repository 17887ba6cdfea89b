use anyhow::Context;
use photogenic::config::{ConfigManager, EvolutionConfig};
use photogenic::ui::services::EvolutionRunner;
use photogenic::{EvolutionEngine, Target};
use std::env;
use std::time::{Duration, Instant};

const BATCH: u64 = 10;

/// Headless search.
///
/// Usage: `headless [colors] [population] [generations] [config.toml]`
///
/// Without a generation count the engine runs on a background thread for ten
/// seconds while this thread samples the best palette, the same split the
/// desktop front end uses.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    let color_count = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(64);
    let population_size = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(100);
    let generations: Option<u64> = args.get(3).and_then(|s| s.parse().ok());

    let mut config = match args.get(4) {
        Some(path) => {
            let manager = ConfigManager::new();
            manager
                .load_from_file(path)
                .with_context(|| format!("loading {}", path))?;
            manager.get().evolution
        }
        None => EvolutionConfig::default(),
    };
    config.color_count = color_count;
    config.population_size = population_size;

    let target = Target::default_gradient(color_count)?;

    match generations {
        Some(generations) => run_inline(config, target, generations),
        None => run_threaded(config, target, Duration::from_secs(10)),
    }
}

fn run_inline(config: EvolutionConfig, target: Target, generations: u64) -> anyhow::Result<()> {
    let mut engine = EvolutionEngine::new(config, target)?;
    let start = Instant::now();
    log::info!("Initial best cost: {:.2}", engine.best_cost());

    advance(&mut engine, generations);

    log::info!(
        "Finished {} generations in {:.2}s, best cost {:.2}",
        engine.generation(),
        start.elapsed().as_secs_f64(),
        engine.best_cost()
    );
    print_palette(&engine.best_genome());
    Ok(())
}

/// Step until `generations`, logging stats every 100 generations
fn advance(engine: &mut EvolutionEngine, generations: u64) {
    while engine.generation() < generations {
        for _ in 0..batch_len(engine.generation(), generations) {
            engine.step();
        }

        if engine.generation() % 100 == 0 {
            if let Some(stats) = engine.stats() {
                log::info!(
                    "Gen: {}, best {:.2}, mean {:.2}, worst {:.2}",
                    engine.generation(),
                    stats.best,
                    stats.mean,
                    stats.worst
                );
            }
        }
    }
}

/// Steps to run before the next progress check, never past `generations`
fn batch_len(done: u64, generations: u64) -> u64 {
    BATCH.min(generations.saturating_sub(done))
}

fn run_threaded(config: EvolutionConfig, target: Target, duration: Duration) -> anyhow::Result<()> {
    let mut runner = EvolutionRunner::start(config, target)?;
    let start = Instant::now();

    while start.elapsed() < duration {
        std::thread::sleep(Duration::from_millis(500));
        let snapshot = runner.latest();
        log::info!("Gen: {}, Fittest: {:.2}", snapshot.generation, snapshot.cost);
    }

    runner.stop();
    print_palette(runner.latest().colors());
    Ok(())
}

fn print_palette(colors: &[photogenic::Color]) {
    let hex: Vec<String> = colors.iter().map(|c| c.to_string()).collect();
    println!("{}", hex.join(" "));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_never_overshoots() {
        assert_eq!(batch_len(0, 5), 5);
        assert_eq!(batch_len(0, 25), 10);
        assert_eq!(batch_len(20, 25), 5);
        assert_eq!(batch_len(25, 25), 0);
    }

    #[test]
    fn test_inline_run_stops_at_requested_generation() {
        let config = EvolutionConfig {
            population_size: 6,
            color_count: 4,
            seed: Some(1),
            ..Default::default()
        };
        let mut engine = EvolutionEngine::new(config, Target::default_gradient(4).unwrap()).unwrap();

        advance(&mut engine, 5);
        assert_eq!(engine.generation(), 5);

        advance(&mut engine, 17);
        assert_eq!(engine.generation(), 17);
    }
}
