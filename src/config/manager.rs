use super::{display::DisplayConfig, evolution::EvolutionConfig, traits::ConfigSection};
use crate::error::PhotogenicError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub display: DisplayConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), PhotogenicError> {
        self.evolution.validate()?;
        self.display.validate()?;
        Ok(())
    }
}

#[derive(Clone, Default)]
pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PhotogenicError> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let config: AppConfig = toml::from_str(&contents)?;

        config.validate()?;
        log::debug!("Loaded configuration from {}", path.as_ref().display());

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), PhotogenicError> {
        let toml_str = toml::to_string_pretty(&self.get())?;
        std::fs::write(path.as_ref(), toml_str)?;
        log::debug!("Saved configuration to {}", path.as_ref().display());
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Apply `f` to a copy of the configuration and keep it only if it validates.
    pub fn update<F>(&self, f: F) -> Result<(), PhotogenicError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap_or_else(PoisonError::into_inner);
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }
}
