use crate::types::Color;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Genome representation for palette evolution
///
/// A genome is an ordered, fixed-length sequence of colors. Position `i` is
/// compared against position `i` of the target, so order matters.
///
/// The length is fixed when the genome is created and only the variation
/// operators in this crate rewrite its colors. Readers outside the crate get
/// slice access through `Deref`.
///
/// # Example
///
/// ```
/// use photogenic::{Color, Genome};
///
/// let genome = Genome::from(vec![Color::from_hex(0xA14A76), Color::from_hex(0xFFD046)]);
/// assert_eq!(genome.len(), 2);
/// assert_eq!(genome[1].to_hex(), 0xFFD046);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Genome(Vec<Color>);

impl Genome {
    pub fn new(colors: Vec<Color>) -> Self {
        Self(colors)
    }

    pub fn colors(&self) -> &[Color] {
        &self.0
    }

    pub(crate) fn colors_mut(&mut self) -> &mut [Color] {
        &mut self.0
    }

    pub fn into_colors(self) -> Vec<Color> {
        self.0
    }
}

impl Deref for Genome {
    type Target = [Color];

    fn deref(&self) -> &[Color] {
        &self.0
    }
}

impl From<Vec<Color>> for Genome {
    fn from(colors: Vec<Color>) -> Self {
        Self(colors)
    }
}

impl FromIterator<Color> for Genome {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
