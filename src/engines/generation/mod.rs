pub mod genome;
pub mod operators;
pub mod population;
pub mod selection;
pub mod snapshot;
pub mod evolution_engine;

pub use genome::Genome;
pub use population::{Individual, Population, PopulationStats};
pub use snapshot::{BestSnapshot, SnapshotReader};
pub use evolution_engine::EvolutionEngine;
