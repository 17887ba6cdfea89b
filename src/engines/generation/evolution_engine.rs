use crate::config::evolution::EvolutionConfig;
use crate::config::traits::ConfigSection;
use crate::engines::evaluation::{FitnessEvaluator, Target};
use crate::engines::generation::{
    operators::clamp_rate,
    population::{Individual, Population, PopulationStats},
    selection::{challenge_incumbent, next_generation},
    snapshot::{BestSnapshot, SnapshotReader},
};
use crate::error::{PhotogenicError, Result};
use crate::types::Color;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Anytime palette search.
///
/// Construction seeds and scores the population, so an engine is always ready
/// to `step()`. Every call that changes the population republishes the best
/// individual to the engine's [`SnapshotReader`].
pub struct EvolutionEngine {
    config: EvolutionConfig,
    evaluator: FitnessEvaluator,
    population: Population,
    rng: StdRng,
    generation: u64,
    snapshots: SnapshotReader,
}

impl EvolutionEngine {
    pub fn new(config: EvolutionConfig, target: Target) -> Result<Self> {
        config.validate()?;
        if target.len() != config.color_count {
            return Err(PhotogenicError::InvalidConfiguration(format!(
                "Target has {} colors but color count is {}",
                target.len(),
                config.color_count
            )));
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let evaluator = FitnessEvaluator::new(target, config.color_metric);
        let mut population = Population::seed(config.population_size, config.color_count, &mut rng)?;
        let best = population.best(&evaluator);
        let snapshots = SnapshotReader::new(BestSnapshot {
            genome: best.genome().clone(),
            cost: best.cost().unwrap_or(f64::INFINITY),
            generation: 0,
            population_size: config.population_size,
        });

        log::debug!(
            "Seeded {} palettes of {} colors, best cost {:.2}",
            config.population_size,
            config.color_count,
            snapshots.latest().cost
        );

        Ok(Self {
            config,
            evaluator,
            population,
            rng,
            generation: 0,
            snapshots,
        })
    }

    /// Resize the population right away. Zero is rejected and nothing changes.
    pub fn set_population_size(&mut self, size: usize) -> Result<()> {
        self.population
            .resize(size, &self.evaluator, self.config.mutation_rate, &mut self.rng)?;
        self.config.population_size = size;
        log::debug!("Population size set to {}", size);

        self.publish();
        Ok(())
    }

    /// Clamp to [0, 1] and apply from the next step. Returns the rate in effect.
    pub fn set_mutation_rate(&mut self, rate: f64) -> f64 {
        self.config.mutation_rate = clamp_rate(rate);
        log::debug!("Mutation rate set to {}", self.config.mutation_rate);
        self.config.mutation_rate
    }

    /// Advance one generation
    pub fn step(&mut self) {
        self.population.evaluate(&self.evaluator);

        if self.population.len() == 1 {
            let incumbent = &self.population.all()[0];
            if let Some(winner) = challenge_incumbent(
                incumbent,
                &self.evaluator,
                self.config.mutation_rate,
                &mut self.rng,
            ) {
                self.population.replace_with(vec![winner]);
            }
        } else {
            let next = next_generation(self.population.all(), &self.config, &mut self.rng);
            self.population.replace_with(next);
        }

        self.generation += 1;
        self.publish();

        log::trace!(
            "Generation {} complete. Best cost: {:.2}",
            self.generation,
            self.snapshots.latest().cost
        );
    }

    fn publish(&mut self) {
        let population_size = self.population.len();
        let best = self.population.best(&self.evaluator);
        self.snapshots.publish(BestSnapshot {
            genome: best.genome().clone(),
            cost: best.cost().unwrap_or(f64::INFINITY),
            generation: self.generation,
            population_size,
        });
    }

    /// Best individual of the current population
    pub fn best(&mut self) -> &Individual {
        self.population.best(&self.evaluator)
    }

    pub fn best_cost(&self) -> f64 {
        self.snapshots.latest().cost
    }

    /// Copy of the best palette; always `color_count` long
    pub fn best_genome(&self) -> Vec<Color> {
        self.snapshots.latest().colors().to_vec()
    }

    pub fn best_snapshot(&self) -> Arc<BestSnapshot> {
        self.snapshots.latest()
    }

    pub fn snapshot_reader(&self) -> SnapshotReader {
        self.snapshots.clone()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn population_size(&self) -> usize {
        self.population.len()
    }

    pub fn stats(&self) -> Option<PopulationStats> {
        self.population.stats()
    }

    pub fn mutation_rate(&self) -> f64 {
        self.config.mutation_rate
    }

    pub fn color_count(&self) -> usize {
        self.config.color_count
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn target(&self) -> &Target {
        self.evaluator.target()
    }

    pub fn evaluator(&self) -> &FitnessEvaluator {
        &self.evaluator
    }
}
