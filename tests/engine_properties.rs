use photogenic::config::evolution::{ColorMetric, CrossoverMethod, EvolutionConfig, SelectionMethod};
use photogenic::{initiate, Color, EvolutionEngine, Genome, PhotogenicError, Target};
use std::collections::HashSet;
use std::thread;

fn engine_with(population_size: usize, color_count: usize, seed: u64) -> EvolutionEngine {
    let config = EvolutionConfig {
        population_size,
        color_count,
        seed: Some(seed),
        ..Default::default()
    };
    EvolutionEngine::new(config, Target::default_gradient(color_count).unwrap()).unwrap()
}

/// Colors seen at each position across the whole population
fn alleles(engine: &EvolutionEngine) -> Vec<HashSet<Color>> {
    let mut per_position = vec![HashSet::new(); engine.color_count()];
    for individual in engine.population().all() {
        for (position, color) in individual.genome().iter().enumerate() {
            per_position[position].insert(*color);
        }
    }
    per_position
}

#[test]
fn test_every_genome_keeps_palette_length() {
    let configs = [
        (SelectionMethod::Tournament, CrossoverMethod::SinglePoint),
        (SelectionMethod::Roulette, CrossoverMethod::Uniform),
        (SelectionMethod::Rank, CrossoverMethod::SinglePoint),
    ];

    for (selection_method, crossover_method) in configs {
        let config = EvolutionConfig {
            population_size: 15,
            color_count: 9,
            selection_method,
            crossover_method,
            seed: Some(3),
            ..Default::default()
        };
        let mut engine = EvolutionEngine::new(config, Target::default_gradient(9).unwrap()).unwrap();

        for _ in 0..30 {
            engine.step();
            assert!(engine.population().all().iter().all(|i| i.genome().len() == 9));
            assert_eq!(engine.best_genome().len(), 9);
        }
    }
}

#[test]
fn test_best_cost_never_increases_with_elitism() {
    let mut engine = engine_with(30, 12, 42);
    engine.set_mutation_rate(0.3);

    let mut previous = engine.best_cost();
    for _ in 0..300 {
        engine.step();
        let cost = engine.best_cost();
        assert!(cost <= previous, "best cost rose from {} to {}", previous, cost);
        previous = cost;
    }
}

#[test]
fn test_search_improves_on_random_start() {
    let mut engine = engine_with(50, 8, 11);
    let initial = engine.best_cost();

    for _ in 0..500 {
        engine.step();
    }
    assert!(engine.best_cost() < initial);
}

#[test]
fn test_zero_mutation_introduces_no_new_colors() {
    let mut engine = engine_with(20, 6, 5);
    engine.set_mutation_rate(0.0);
    let initial = alleles(&engine);

    for _ in 0..50 {
        engine.step();
    }

    for (position, colors) in alleles(&engine).iter().enumerate() {
        assert!(
            colors.is_subset(&initial[position]),
            "new color appeared at position {}",
            position
        );
    }
}

#[test]
fn test_full_mutation_redraws_offspring() {
    let mut engine = engine_with(40, 16, 8);
    engine.set_mutation_rate(1.0);
    let initial = alleles(&engine);

    engine.step();

    let novel: usize = alleles(&engine)
        .iter()
        .zip(&initial)
        .map(|(now, before)| now.difference(before).count())
        .sum();
    assert!(novel > 16, "expected fresh colors after full mutation, found {}", novel);
}

#[test]
fn test_resize_grows_and_shrinks() {
    let mut engine = engine_with(10, 5, 21);

    engine.set_population_size(25).unwrap();
    assert_eq!(engine.population_size(), 25);
    assert_eq!(engine.best_snapshot().population_size, 25);

    let best_before = engine.best_cost();
    engine.set_population_size(3).unwrap();
    assert_eq!(engine.population_size(), 3);
    // Shrinking drops the worst, so the best survives
    assert_eq!(engine.best_cost(), best_before);

    engine.step();
    assert_eq!(engine.population_size(), 3);
}

#[test]
fn test_resize_round_trip_restores_size() {
    let mut engine = initiate(5).unwrap();

    for size in [7, 300, 7, 2, 7] {
        engine.set_population_size(size).unwrap();
        assert_eq!(engine.population_size(), size);

        for _ in 0..20 {
            engine.step();
        }
        assert_eq!(engine.population_size(), size);
        assert_eq!(engine.best_snapshot().population_size, size);
        assert_eq!(engine.best_genome().len(), 5);
    }
}

#[test]
fn test_zero_population_is_rejected() {
    let mut engine = engine_with(10, 5, 2);
    let result = engine.set_population_size(0);

    assert!(matches!(result, Err(PhotogenicError::InvalidConfiguration(_))));
    assert_eq!(engine.population_size(), 10);

    engine.step();
    assert_eq!(engine.generation(), 1);
}

#[test]
fn test_mutation_rate_clamping() {
    let mut engine = initiate(4).unwrap();
    assert_eq!(engine.set_mutation_rate(1.5), 1.0);
    assert_eq!(engine.set_mutation_rate(-1.0), 0.0);
    assert_eq!(engine.mutation_rate(), 0.0);
}

#[test]
fn test_initiate_and_run_thousand_generations() {
    let mut engine = initiate(8).unwrap();
    engine.set_population_size(20).unwrap();
    let initial = engine.best_cost();

    for _ in 0..1000 {
        engine.step();
    }

    assert_eq!(engine.generation(), 1000);
    assert_eq!(engine.best_genome().len(), 8);
    assert!(engine.best_cost() <= initial);
}

#[test]
fn test_initiate_rejects_zero_colors() {
    assert!(initiate(0).is_err());
}

#[test]
fn test_cie2000_metric_search() {
    let config = EvolutionConfig {
        population_size: 20,
        color_count: 4,
        color_metric: ColorMetric::Cie2000,
        seed: Some(9),
        ..Default::default()
    };
    let mut engine = EvolutionEngine::new(config, Target::default_gradient(4).unwrap()).unwrap();

    let initial = engine.best_cost();
    for _ in 0..100 {
        engine.step();
    }
    assert!(engine.best_cost().is_finite());
    assert!(engine.best_cost() <= initial);
}

#[test]
fn test_exact_target_scores_zero() {
    let target = Target::new([[10u8, 20, 30], [200, 100, 0]]).unwrap();
    let config = EvolutionConfig {
        population_size: 1,
        color_count: 2,
        seed: Some(1),
        ..Default::default()
    };
    let engine = EvolutionEngine::new(config, target.clone()).unwrap();
    let genome: Genome = target.colors().iter().copied().collect();

    assert_eq!(engine.evaluator().evaluate(&genome), 0.0);
}

#[test]
fn test_reader_sees_monotonic_generations() {
    let mut engine = engine_with(16, 10, 77);
    let reader = engine.snapshot_reader();

    let watcher = thread::spawn(move || {
        let mut last_generation = 0;
        for _ in 0..2000 {
            let snapshot = reader.latest();
            assert!(snapshot.generation >= last_generation);
            assert_eq!(snapshot.colors().len(), 10);
            last_generation = snapshot.generation;
        }
        last_generation
    });

    for _ in 0..500 {
        engine.step();
    }

    let seen = watcher.join().unwrap();
    assert!(seen <= 500);
    assert_eq!(engine.best_snapshot().generation, 500);
}
