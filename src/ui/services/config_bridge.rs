use crate::config::{AppConfig, EvolutionConfig};
use crate::engines::evaluation::Target;
use crate::error::Result;
use crate::ui::state::AppState;

pub struct ConfigBridge;

impl ConfigBridge {
    /// Convert AppState to the EvolutionConfig used for the next reset
    pub fn to_evolution_config(state: &AppState) -> EvolutionConfig {
        EvolutionConfig {
            population_size: state.population_size,
            color_count: state.color_count,
            mutation_rate: state.mutation_rate,
            ..state.config.evolution.clone()
        }
    }

    /// Convert AppState back into a full AppConfig for saving
    pub fn to_app_config(state: &AppState) -> AppConfig {
        AppConfig {
            evolution: Self::to_evolution_config(state),
            display: state.config.display.clone(),
        }
    }

    /// Load an AppConfig into the editable fields of AppState
    pub fn apply_app_config(state: &mut AppState, config: AppConfig) {
        state.population_size = config.evolution.population_size;
        state.color_count = config.evolution.color_count;
        state.mutation_rate = config.evolution.mutation_rate;
        state.config = config;
    }

    /// Target for the configured color count
    pub fn to_target(state: &AppState) -> Result<Target> {
        Target::default_gradient(state.color_count)
    }
}
