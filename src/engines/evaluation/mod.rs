pub mod fitness;
pub mod target;

pub use fitness::{FitnessEvaluator, color_distance};
pub use target::Target;
