use super::target::Target;
use crate::config::evolution::ColorMetric;
use crate::engines::generation::genome::Genome;
use crate::types::Color;
use color_space::CompareCie2000;

/// Scores genomes against a fixed target. Lower cost is better; zero is an
/// exact match.
///
/// The cost is the sum of per-position color distances, so it is finite and
/// non-negative for every genome of the right length.
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    target: Target,
    metric: ColorMetric,
}

impl FitnessEvaluator {
    pub fn new(target: Target, metric: ColorMetric) -> Self {
        Self { target, metric }
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    pub fn metric(&self) -> ColorMetric {
        self.metric
    }

    /// # Panics
    ///
    /// If the genome length differs from the target length. That is a
    /// lifecycle bug in the caller, not bad input.
    pub fn evaluate(&self, genome: &Genome) -> f64 {
        assert!(
            genome.len() == self.target.len(),
            "precondition violated: genome has {} colors but target has {}",
            genome.len(),
            self.target.len()
        );

        genome
            .iter()
            .zip(self.target.colors())
            .map(|(&candidate, &wanted)| color_distance(self.metric, candidate, wanted))
            .sum()
    }
}

pub fn color_distance(metric: ColorMetric, a: Color, b: Color) -> f64 {
    match metric {
        ColorMetric::SquaredRgb => a.squared_distance(b) as f64,
        ColorMetric::Cie2000 => {
            if a == b {
                return 0.0;
            }
            let delta = a.to_color_space().compare_cie2000(&b.to_color_space());
            if delta.is_finite() {
                delta.max(0.0)
            } else {
                0.0
            }
        }
    }
}
