pub mod traits;
pub mod evolution;
pub mod display;
pub mod manager;

pub use manager::{ConfigManager, AppConfig};
pub use evolution::{EvolutionConfig, SelectionMethod, CrossoverMethod, ColorMetric};
pub use display::DisplayConfig;
pub use traits::{ConfigSection, ConfigManifest, FieldManifest};
