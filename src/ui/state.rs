use crate::config::AppConfig;
use std::path::PathBuf;

/// Central application state for the UI
pub struct AppState {
    // Applied on reset, together with the rest of `config.evolution`
    pub color_count: usize,

    // Applied live
    pub population_size: usize,
    pub mutation_rate: f64,

    pub config: AppConfig,
    pub config_path: Option<PathBuf>,

    // Execution State
    pub paused: bool,
    pub status_message: String,
}

impl Default for AppState {
    fn default() -> Self {
        let config = AppConfig::default();
        Self {
            color_count: config.evolution.color_count,
            population_size: config.evolution.population_size,
            mutation_rate: config.evolution.mutation_rate,
            config,
            config_path: None,
            paused: false,
            status_message: "Ready".to_string(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Something the user asked for in a panel this frame
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    ApplyPopulationSize,
    ApplyMutationRate,
    Reset,
    TogglePause,
    LoadConfig,
    SaveConfig,
}
