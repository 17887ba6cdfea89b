use crate::config::evolution::{EvolutionConfig, SelectionMethod};
use crate::engines::evaluation::FitnessEvaluator;
use crate::engines::generation::operators::{crossover, mutate};
use crate::engines::generation::population::Individual;
use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

/// Pick one parent index. Every method favours lower cost.
pub fn select_parent<R: Rng>(
    costs: &[f64],
    method: SelectionMethod,
    tournament_size: usize,
    rng: &mut R,
) -> usize {
    match method {
        SelectionMethod::Tournament => tournament_selection(costs, tournament_size, rng),
        SelectionMethod::Roulette => {
            weighted_selection(costs.iter().map(|&c| 1.0 / (1.0 + c)), costs.len(), rng)
        }
        SelectionMethod::Rank => rank_selection(costs, rng),
    }
}

/// Tournament selection: pick best of K random candidates
pub fn tournament_selection<R: Rng>(costs: &[f64], tournament_size: usize, rng: &mut R) -> usize {
    let mut best_idx = rng.gen_range(0..costs.len());
    let mut best_cost = costs[best_idx];

    for _ in 1..tournament_size {
        let idx = rng.gen_range(0..costs.len());
        if costs[idx] < best_cost {
            best_idx = idx;
            best_cost = costs[idx];
        }
    }

    best_idx
}

/// Linear ranking: the best of `n` gets weight `n`, the worst weight 1
pub fn rank_selection<R: Rng>(costs: &[f64], rng: &mut R) -> usize {
    let order = ascending_order(costs);
    let n = costs.len();
    let picked = weighted_selection((0..n).map(|rank| (n - rank) as f64), n, rng);
    order[picked]
}

fn weighted_selection<R: Rng>(weights: impl Iterator<Item = f64>, len: usize, rng: &mut R) -> usize {
    match WeightedIndex::new(weights) {
        Ok(dist) => dist.sample(rng),
        // Degenerate weights: fall back to uniform
        Err(_) => rng.gen_range(0..len),
    }
}

/// Indices sorted by cost, ties by index
fn ascending_order(costs: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..costs.len()).collect();
    order.sort_by(|&a, &b| costs[a].total_cmp(&costs[b]).then(a.cmp(&b)));
    order
}

/// The `count` lowest-cost indices, at least one
pub fn elite_indices(costs: &[f64], count: usize) -> Vec<usize> {
    let mut order = ascending_order(costs);
    order.truncate(count.max(1));
    order
}

/// Build the next generation from a fully scored population.
///
/// The elites are carried over with their cached cost. The remaining slots are
/// filled with dirty offspring, from crossover with probability
/// `crossover_rate` and otherwise from a mutated clone of one parent. A single
/// individual cannot be crossed, so it only ever produces clones.
pub fn next_generation<R: Rng>(
    individuals: &[Individual],
    config: &EvolutionConfig,
    rng: &mut R,
) -> Vec<Individual> {
    let n = individuals.len();
    let costs: Vec<f64> = individuals
        .iter()
        .map(|i| i.cost().unwrap_or(f64::INFINITY))
        .collect();

    let mut next: Vec<Individual> = elite_indices(&costs, config.elite_count(n))
        .into_iter()
        .map(|idx| individuals[idx].clone())
        .collect();

    while next.len() < n {
        if n >= 2 && rng.gen::<f64>() < config.crossover_rate {
            let parent1 = select_parent(&costs, config.selection_method, config.tournament_size, rng);
            let parent2 = select_parent(&costs, config.selection_method, config.tournament_size, rng);

            let (mut child1, mut child2) = crossover(
                individuals[parent1].genome(),
                individuals[parent2].genome(),
                config.crossover_method,
                rng,
            );
            mutate(&mut child1, config.mutation_rate, rng);
            mutate(&mut child2, config.mutation_rate, rng);

            next.push(Individual::new(child1));
            if next.len() < n {
                next.push(Individual::new(child2));
            }
        } else {
            let parent = select_parent(&costs, config.selection_method, config.tournament_size, rng);
            let mut child = individuals[parent].genome().clone();
            mutate(&mut child, config.mutation_rate, rng);
            next.push(Individual::new(child));
        }
    }

    next
}

/// One step of a (1+1) search for a population of one: the mutant replaces
/// the incumbent only if it is no worse.
pub fn challenge_incumbent<R: Rng>(
    incumbent: &Individual,
    evaluator: &FitnessEvaluator,
    mutation_rate: f64,
    rng: &mut R,
) -> Option<Individual> {
    let mut mutant = Individual::new(incumbent.genome().clone());
    mutate(mutant.genome_mut(), mutation_rate, rng);

    let cost = evaluator.evaluate(mutant.genome());
    if cost <= incumbent.cost().unwrap_or(f64::INFINITY) {
        Some(Individual::scored(mutant.into_genome(), cost))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn pick_counts(costs: &[f64], method: SelectionMethod, draws: usize) -> Vec<usize> {
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = vec![0; costs.len()];
        for _ in 0..draws {
            counts[select_parent(costs, method, 3, &mut rng)] += 1;
        }
        counts
    }

    #[test]
    fn test_selection_favours_lower_cost() {
        let costs = [40.0, 0.5, 10.0, 100.0];
        for method in [SelectionMethod::Tournament, SelectionMethod::Roulette, SelectionMethod::Rank] {
            let counts = pick_counts(&costs, method, 20_000);
            assert!(counts[1] > counts[2], "{:?}: {:?}", method, counts);
            assert!(counts[2] > counts[0], "{:?}: {:?}", method, counts);
            assert!(counts[0] > counts[3], "{:?}: {:?}", method, counts);
        }
    }

    #[test]
    fn test_tournament_of_one_can_pick_worst() {
        let costs = [1.0, 1000.0];
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen_worst = false;
        for _ in 0..100 {
            if tournament_selection(&costs, 1, &mut rng) == 1 {
                seen_worst = true;
            }
        }
        assert!(seen_worst);
    }

    #[test]
    fn test_elite_indices() {
        let costs = [5.0, 1.0, 3.0, 1.0];
        assert_eq!(elite_indices(&costs, 2), vec![1, 3]);
        assert_eq!(elite_indices(&costs, 0), vec![1]);
        assert_eq!(elite_indices(&costs, 10), vec![1, 3, 2, 0]);
    }
}
