use crate::engines::evaluation::FitnessEvaluator;
use crate::engines::generation::genome::Genome;
use crate::engines::generation::operators::{mutate, random_genome};
use crate::error::{PhotogenicError, Result};
use rand::Rng;
use rayon::prelude::*;

/// A genome together with its cached cost. `cost == None` means the genome
/// changed since it was last scored.
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    genome: Genome,
    cost: Option<f64>,
}

impl Individual {
    pub fn new(genome: Genome) -> Self {
        Self { genome, cost: None }
    }

    pub(crate) fn scored(genome: Genome, cost: f64) -> Self {
        Self {
            genome,
            cost: Some(cost),
        }
    }

    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    /// Cached cost, or `None` while dirty
    pub fn cost(&self) -> Option<f64> {
        self.cost
    }

    pub fn is_dirty(&self) -> bool {
        self.cost.is_none()
    }

    pub fn into_genome(self) -> Genome {
        self.genome
    }

    /// Mutable access marks the individual dirty.
    pub(crate) fn genome_mut(&mut self) -> &mut Genome {
        self.cost = None;
        &mut self.genome
    }

    fn sort_key(&self) -> f64 {
        self.cost.unwrap_or(f64::INFINITY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopulationStats {
    pub best: f64,
    pub mean: f64,
    pub worst: f64,
    pub evaluated: usize,
}

/// Ordered collection of individuals. Never empty once constructed.
#[derive(Debug, Clone)]
pub struct Population {
    individuals: Vec<Individual>,
    best_idx: Option<usize>,
}

impl Population {
    /// `size` random genomes of `genome_length` colors, all dirty.
    pub fn seed<R: Rng>(size: usize, genome_length: usize, rng: &mut R) -> Result<Self> {
        if genome_length == 0 {
            return Err(PhotogenicError::InvalidConfiguration(
                "Genome length must be at least 1".to_string(),
            ));
        }
        Self::from_genomes((0..size).map(|_| random_genome(genome_length, rng)).collect())
    }

    pub fn from_genomes(genomes: Vec<Genome>) -> Result<Self> {
        let Some(first) = genomes.first() else {
            return Err(PhotogenicError::InvalidConfiguration(
                "Population size must be at least 1".to_string(),
            ));
        };
        let length = first.len();
        if genomes.iter().any(|g| g.len() != length) {
            return Err(PhotogenicError::InvalidConfiguration(
                "All genomes in a population must have the same length".to_string(),
            ));
        }

        Ok(Self {
            individuals: genomes.into_iter().map(Individual::new).collect(),
            best_idx: None,
        })
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn genome_len(&self) -> usize {
        self.individuals.first().map_or(0, |i| i.genome.len())
    }

    pub fn all(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn dirty_count(&self) -> usize {
        self.individuals.iter().filter(|i| i.is_dirty()).count()
    }

    /// Score every dirty individual. Returns how many were scored.
    pub fn evaluate(&mut self, evaluator: &FitnessEvaluator) -> usize {
        let evaluated = self.dirty_count();
        if evaluated == 0 {
            return 0;
        }

        self.individuals
            .par_iter_mut()
            .filter(|individual| individual.is_dirty())
            .for_each(|individual| {
                individual.cost = Some(evaluator.evaluate(&individual.genome));
            });

        self.best_idx = None;
        evaluated
    }

    /// Lowest-cost individual, ties going to the lowest index.
    ///
    /// Scores dirty individuals first; when nothing changed since the last
    /// call the cached answer is returned without a scan.
    pub fn best(&mut self, evaluator: &FitnessEvaluator) -> &Individual {
        self.evaluate(evaluator);
        let idx = match self.best_idx {
            Some(idx) => idx,
            None => {
                let idx = self.scan_best();
                self.best_idx = Some(idx);
                idx
            }
        };
        &self.individuals[idx]
    }

    /// Best individual if it is known without scoring anything
    pub fn cached_best(&self) -> Option<&Individual> {
        if self.dirty_count() > 0 {
            return None;
        }
        self.best_idx.map(|idx| &self.individuals[idx])
    }

    fn scan_best(&self) -> usize {
        let mut best_idx = 0;
        let mut best_cost = f64::INFINITY;
        for (idx, individual) in self.individuals.iter().enumerate() {
            let cost = individual.sort_key();
            if cost < best_cost {
                best_idx = idx;
                best_cost = cost;
            }
        }
        best_idx
    }

    /// Grow or shrink to `new_size`.
    ///
    /// Growing appends mutated clones of randomly chosen existing individuals.
    /// Shrinking scores everything and drops the worst first, ties going
    /// against the higher index; survivors keep their order.
    pub fn resize<R: Rng>(
        &mut self,
        new_size: usize,
        evaluator: &FitnessEvaluator,
        mutation_rate: f64,
        rng: &mut R,
    ) -> Result<()> {
        if new_size == 0 {
            return Err(PhotogenicError::InvalidConfiguration(
                "Population size must be at least 1".to_string(),
            ));
        }

        let current = self.len();
        if new_size > current {
            self.individuals.reserve(new_size - current);
            for _ in current..new_size {
                let source = rng.gen_range(0..current);
                let mut genome = self.individuals[source].genome.clone();
                mutate(&mut genome, mutation_rate, rng);
                self.individuals.push(Individual::new(genome));
            }
        } else if new_size < current {
            self.evaluate(evaluator);

            let mut order: Vec<usize> = (0..current).collect();
            order.sort_by(|&a, &b| {
                self.individuals[a]
                    .sort_key()
                    .total_cmp(&self.individuals[b].sort_key())
                    .then(a.cmp(&b))
            });

            let mut keep = vec![false; current];
            for &idx in &order[..new_size] {
                keep[idx] = true;
            }
            let mut idx = 0;
            self.individuals.retain(|_| {
                let kept = keep[idx];
                idx += 1;
                kept
            });
            self.best_idx = None;
        }

        Ok(())
    }

    /// Install the next generation. Elites should arrive clean, offspring dirty.
    ///
    /// # Panics
    ///
    /// If `next` is empty or contains a genome of a different length.
    pub(crate) fn replace_with(&mut self, next: Vec<Individual>) {
        let length = self.genome_len();
        assert!(!next.is_empty(), "precondition violated: empty generation");
        assert!(
            next.iter().all(|i| i.genome.len() == length),
            "precondition violated: generation contains a genome not of length {}",
            length
        );

        self.individuals = next;
        self.best_idx = None;
    }

    #[cfg(test)]
    pub(crate) fn individual_mut(&mut self, idx: usize) -> &mut Individual {
        self.best_idx = None;
        &mut self.individuals[idx]
    }

    /// Cost summary over the individuals that are currently clean
    pub fn stats(&self) -> Option<PopulationStats> {
        let costs: Vec<f64> = self.individuals.iter().filter_map(|i| i.cost).collect();
        if costs.is_empty() {
            return None;
        }

        Some(PopulationStats {
            best: costs.iter().copied().fold(f64::INFINITY, f64::min),
            mean: costs.iter().sum::<f64>() / costs.len() as f64,
            worst: costs.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            evaluated: costs.len(),
        })
    }
}
