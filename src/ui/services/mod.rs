pub mod evolution_runner;
pub mod config_bridge;

pub use evolution_runner::{EvolutionRunner, EngineCommand, RunnerEvent};
pub use config_bridge::ConfigBridge;
