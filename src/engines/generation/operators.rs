use crate::config::evolution::CrossoverMethod;
use crate::engines::generation::genome::Genome;
use crate::types::Color;
use rand::Rng;

/// Uniformly random 24-bit color
pub fn random_color<R: Rng>(rng: &mut R) -> Color {
    Color::new(rng.gen(), rng.gen(), rng.gen())
}

/// Generate random genome
pub fn random_genome<R: Rng>(length: usize, rng: &mut R) -> Genome {
    (0..length).map(|_| random_color(rng)).collect()
}

/// Mutation: each color is independently redrawn with probability `mutation_rate`.
///
/// A rate of 0 leaves the genome untouched and draws nothing from `rng`; a rate
/// of 1 redraws every color. Returns how many colors were replaced.
pub fn mutate<R: Rng>(genome: &mut Genome, mutation_rate: f64, rng: &mut R) -> usize {
    let rate = clamp_rate(mutation_rate);
    if rate == 0.0 {
        return 0;
    }

    let mut replaced = 0;
    for color in genome.colors_mut() {
        if rate >= 1.0 || rng.gen::<f64>() < rate {
            *color = random_color(rng);
            replaced += 1;
        }
    }
    replaced
}

/// Crossover of two equal-length parents into two children.
///
/// Single-point swaps the tails after a cut in `1..len`; uniform swaps each
/// position with probability 0.5. Identical parents always give identical
/// children.
///
/// # Panics
///
/// If the parents differ in length.
pub fn crossover<R: Rng>(
    parent1: &Genome,
    parent2: &Genome,
    method: CrossoverMethod,
    rng: &mut R,
) -> (Genome, Genome) {
    assert!(
        parent1.len() == parent2.len(),
        "precondition violated: crossover parents have {} and {} colors",
        parent1.len(),
        parent2.len()
    );

    let len = parent1.len();
    let mut child1 = parent1.clone();
    let mut child2 = parent2.clone();
    if len <= 1 {
        return (child1, child2);
    }

    match method {
        CrossoverMethod::SinglePoint => {
            let point = rng.gen_range(1..len);
            child1.colors_mut()[point..].copy_from_slice(&parent2[point..]);
            child2.colors_mut()[point..].copy_from_slice(&parent1[point..]);
        }
        CrossoverMethod::Uniform => {
            let (left, right) = (child1.colors_mut(), child2.colors_mut());
            for (a, b) in left.iter_mut().zip(right.iter_mut()) {
                if rng.gen_bool(0.5) {
                    std::mem::swap(a, b);
                }
            }
        }
    }

    (child1, child2)
}

/// Clamp a probability to [0, 1]; NaN becomes 0.
pub fn clamp_rate(rate: f64) -> f64 {
    if rate.is_nan() {
        0.0
    } else {
        rate.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zero_rate_is_noop() {
        let mut rng = StdRng::seed_from_u64(7);
        let original = random_genome(16, &mut rng);
        let mut genome = original.clone();

        assert_eq!(mutate(&mut genome, 0.0, &mut rng), 0);
        assert_eq!(mutate(&mut genome, -3.0, &mut rng), 0);
        assert_eq!(genome, original);
    }

    #[test]
    fn test_full_rate_redraws_every_color() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut genome = random_genome(32, &mut rng);
        assert_eq!(mutate(&mut genome, 1.0, &mut rng), 32);
        assert_eq!(mutate(&mut genome, 5.0, &mut rng), 32);
        assert_eq!(genome.len(), 32);
    }

    #[test]
    fn test_mutation_is_reproducible_under_seed() {
        let base = random_genome(20, &mut StdRng::seed_from_u64(1));

        let mut a = base.clone();
        let mut b = base.clone();
        mutate(&mut a, 0.3, &mut StdRng::seed_from_u64(99));
        mutate(&mut b, 0.3, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_crossover_of_identical_parents() {
        let mut rng = StdRng::seed_from_u64(11);
        let parent = random_genome(10, &mut rng);

        for method in [CrossoverMethod::SinglePoint, CrossoverMethod::Uniform] {
            let (c1, c2) = crossover(&parent, &parent, method, &mut rng);
            assert_eq!(c1, parent);
            assert_eq!(c2, parent);
        }
    }

    #[test]
    fn test_crossover_preserves_positions() {
        let mut rng = StdRng::seed_from_u64(5);
        let p1 = Genome::from(vec![Color::new(1, 1, 1); 8]);
        let p2 = Genome::from(vec![Color::new(2, 2, 2); 8]);

        for method in [CrossoverMethod::SinglePoint, CrossoverMethod::Uniform] {
            let (c1, c2) = crossover(&p1, &p2, method, &mut rng);
            for i in 0..8 {
                assert!(c1[i] == p1[i] || c1[i] == p2[i]);
                // children are complementary
                assert_ne!(c1[i], c2[i]);
            }
        }
    }

    #[test]
    fn test_single_point_keeps_head_of_first_parent() {
        let mut rng = StdRng::seed_from_u64(5);
        let p1 = Genome::from(vec![Color::new(1, 1, 1); 6]);
        let p2 = Genome::from(vec![Color::new(2, 2, 2); 6]);

        let (c1, _) = crossover(&p1, &p2, CrossoverMethod::SinglePoint, &mut rng);
        assert_eq!(c1[0], p1[0]);
        assert_eq!(c1[5], p2[5]);
    }

    #[test]
    #[should_panic(expected = "precondition violated")]
    fn test_crossover_length_mismatch_panics() {
        let mut rng = StdRng::seed_from_u64(0);
        let p1 = random_genome(4, &mut rng);
        let p2 = random_genome(5, &mut rng);
        crossover(&p1, &p2, CrossoverMethod::Uniform, &mut rng);
    }
}
