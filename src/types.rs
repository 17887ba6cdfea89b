use serde::{Deserialize, Serialize};
use std::fmt;

/// 8-bit sRGB color, the unit a genome is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from a packed `0xRRGGBB` value. Bits above 24 are ignored.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Squared euclidean distance in RGB space
    pub fn squared_distance(self, other: Color) -> u32 {
        self.channels()
            .iter()
            .zip(other.channels().iter())
            .map(|(&a, &b)| {
                let d = a as i32 - b as i32;
                (d * d) as u32
            })
            .sum()
    }

    pub(crate) fn to_color_space(self) -> color_space::Rgb {
        color_space::Rgb::new(self.r as f64, self.g as f64, self.b as f64)
    }

    pub(crate) fn from_color_space(rgb: color_space::Rgb) -> Self {
        let channel = |v: f64| v.round().clamp(0.0, 255.0) as u8;
        Self {
            r: channel(rgb.r),
            g: channel(rgb.g),
            b: channel(rgb.b),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.to_hex())
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_conversion() {
        let color = Color::from_hex(0xA14A76);
        assert_eq!(color, Color::new(0xA1, 0x4A, 0x76));
        assert_eq!(color.to_hex(), 0xA14A76);
        assert_eq!(color.to_string(), "#A14A76");
    }

    #[test]
    fn test_squared_distance() {
        let black = Color::new(0, 0, 0);
        let white = Color::new(255, 255, 255);

        assert_eq!(black.squared_distance(black), 0);
        assert_eq!(black.squared_distance(white), 3 * 255 * 255);
        assert_eq!(Color::new(1, 2, 3).squared_distance(Color::new(2, 4, 6)), 1 + 4 + 9);
    }
}
