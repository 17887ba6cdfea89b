//! Evolutionary search for color palettes.
//!
//! An [`EvolutionEngine`] evolves fixed-length color sequences toward a
//! [`Target`] palette. The owner drives it with [`EvolutionEngine::step`] as
//! often as it likes, while any number of [`SnapshotReader`]s read the best
//! palette found so far from other threads.
//!
//! ```
//! let mut engine = photogenic::initiate(8).unwrap();
//! engine.set_population_size(20).unwrap();
//! engine.set_mutation_rate(0.1);
//!
//! for _ in 0..10 {
//!     engine.step();
//! }
//! assert_eq!(engine.best_genome().len(), 8);
//! ```

pub mod config;
pub mod engines;
pub mod error;
pub mod types;
pub mod ui;

pub use config::{AppConfig, ConfigManager, EvolutionConfig};
pub use engines::evaluation::{FitnessEvaluator, Target};
pub use engines::generation::{
    BestSnapshot, EvolutionEngine, Genome, Individual, Population, SnapshotReader,
};
pub use error::{PhotogenicError, Result};
pub use types::Color;

use config::ConfigSection;

/// Build an engine with default settings for `color_count` colors, scored
/// against the default gradient target.
pub fn initiate(color_count: usize) -> Result<EvolutionEngine> {
    let config = EvolutionConfig::with_color_count(color_count);
    config.validate()?;
    EvolutionEngine::new(config, Target::default_gradient(color_count)?)
}
