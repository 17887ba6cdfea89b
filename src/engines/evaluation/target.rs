use crate::error::{PhotogenicError, Result};
use crate::engines::generation::operators::random_color;
use crate::types::Color;
use color_space::{FromRgb, Lab, ToRgb};
use rand::Rng;

/// Default gradient endpoints
pub const GRADIENT_START: Color = Color::from_hex(0xA14A76);
pub const GRADIENT_END: Color = Color::from_hex(0xFFD046);

/// The fixed palette every genome is scored against
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    colors: Vec<Color>,
}

impl Target {
    pub fn new(colors: impl IntoIterator<Item = impl Into<Color>>) -> Result<Self> {
        let colors: Vec<Color> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(PhotogenicError::InvalidConfiguration(
                "Target must contain at least one color".to_string(),
            ));
        }
        Ok(Self { colors })
    }

    /// `count` samples of a linear blend between `from` and `to` in L*a*b*
    /// space, taken at `idx / count`.
    pub fn gradient(from: Color, to: Color, count: usize) -> Result<Self> {
        let start = Lab::from_rgb(&from.to_color_space());
        let end = Lab::from_rgb(&to.to_color_space());

        Self::new((0..count).map(|idx| {
            let position = idx as f64 / count as f64;
            let lab = Lab::new(
                end.l * position + start.l * (1.0 - position),
                end.a * position + start.a * (1.0 - position),
                end.b * position + start.b * (1.0 - position),
            );
            Color::from_color_space(lab.to_rgb())
        }))
    }

    pub fn default_gradient(count: usize) -> Result<Self> {
        Self::gradient(GRADIENT_START, GRADIENT_END, count)
    }

    pub fn random<R: Rng>(count: usize, rng: &mut R) -> Result<Self> {
        Self::new((0..count).map(|_| random_color(rng)).collect::<Vec<_>>())
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_empty_target_rejected() {
        assert!(Target::new(Vec::<Color>::new()).is_err());
        assert!(Target::default_gradient(0).is_err());
    }

    #[test]
    fn test_gradient_starts_at_first_color() {
        let target = Target::default_gradient(12).unwrap();
        assert_eq!(target.len(), 12);

        let first = target.colors()[0];
        assert!(first.squared_distance(GRADIENT_START) <= 12, "got {}", first);
    }

    #[test]
    fn test_random_target_is_reproducible() {
        let a = Target::random(6, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = Target::random(6, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a, b);
    }
}
