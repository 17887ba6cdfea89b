use super::traits::{check_unit_interval, ConfigManifest, ConfigSection, FieldManifest};
use crate::error::PhotogenicError;
use serde::{Deserialize, Serialize};

/// Search parameters. Everything the engine needs besides the target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub color_count: usize,
    pub mutation_rate: f64,
    pub crossover_rate: f64,
    /// Fraction of the population carried over unchanged. At least one
    /// individual is always kept.
    pub elitism_rate: f64,
    pub tournament_size: usize,
    pub selection_method: SelectionMethod,
    pub crossover_method: CrossoverMethod,
    pub color_metric: ColorMetric,
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMethod {
    Tournament,
    Roulette,
    Rank,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrossoverMethod {
    SinglePoint,
    Uniform,
}

/// Per-color distance used by the fitness evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorMetric {
    SquaredRgb,
    Cie2000,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            color_count: 20,
            mutation_rate: 0.05,
            crossover_rate: 0.85,
            elitism_rate: 0.1,
            tournament_size: 7,
            selection_method: SelectionMethod::Tournament,
            crossover_method: CrossoverMethod::SinglePoint,
            color_metric: ColorMetric::SquaredRgb,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    pub fn with_color_count(color_count: usize) -> Self {
        Self {
            color_count,
            ..Self::default()
        }
    }

    /// Number of individuals preserved by elitism for a population of `size`
    pub fn elite_count(&self, size: usize) -> usize {
        ((size as f64 * self.elitism_rate) as usize).clamp(1, size.max(1))
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), PhotogenicError> {
        if self.population_size == 0 {
            return Err(PhotogenicError::InvalidConfiguration(
                "Population size must be at least 1".to_string(),
            ));
        }
        if self.color_count == 0 {
            return Err(PhotogenicError::InvalidConfiguration(
                "Color count must be at least 1".to_string(),
            ));
        }
        if self.tournament_size == 0 {
            return Err(PhotogenicError::InvalidConfiguration(
                "Tournament size must be at least 1".to_string(),
            ));
        }
        check_unit_interval("Mutation rate", self.mutation_rate)?;
        check_unit_interval("Crossover rate", self.crossover_rate)?;
        check_unit_interval("Elitism rate", self.elitism_rate)?;
        Ok(())
    }

    fn to_manifest(&self) -> ConfigManifest {
        ConfigManifest {
            section: "Evolution".to_string(),
            fields: vec![
                FieldManifest::new(
                    "population_size",
                    "integer",
                    serde_json::json!(100),
                    Some((1.0, 5000.0)),
                    "Number of palettes in the population",
                ),
                FieldManifest::new(
                    "color_count",
                    "integer",
                    serde_json::json!(20),
                    Some((1.0, 512.0)),
                    "Colors per palette",
                ),
                FieldManifest::new(
                    "mutation_rate",
                    "float",
                    serde_json::json!(0.05),
                    Some((0.0, 1.0)),
                    "Probability of redrawing each color of an offspring",
                ),
                FieldManifest::new(
                    "crossover_rate",
                    "float",
                    serde_json::json!(0.85),
                    Some((0.0, 1.0)),
                    "Probability that offspring come from crossover instead of cloning",
                ),
                FieldManifest::new(
                    "elitism_rate",
                    "float",
                    serde_json::json!(0.1),
                    Some((0.0, 1.0)),
                    "Fraction of best palettes kept unchanged each generation",
                ),
                FieldManifest::new(
                    "tournament_size",
                    "integer",
                    serde_json::json!(7),
                    Some((1.0, 64.0)),
                    "Candidates drawn per tournament",
                ),
                FieldManifest::new(
                    "selection_method",
                    "enum",
                    serde_json::json!("Tournament"),
                    None,
                    "Tournament, Roulette or Rank",
                ),
                FieldManifest::new(
                    "crossover_method",
                    "enum",
                    serde_json::json!("SinglePoint"),
                    None,
                    "SinglePoint or Uniform",
                ),
                FieldManifest::new(
                    "color_metric",
                    "enum",
                    serde_json::json!("SquaredRgb"),
                    None,
                    "SquaredRgb or Cie2000",
                ),
            ],
        }
    }
}
