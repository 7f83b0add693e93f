//! HSB colors and the per-slice palette generator.

use crate::constants::{THEME_BRIGHTNESS, THEME_SATURATION};
use crate::mapping::map_range;
use rand::prelude::*;

/// Hue in degrees, saturation and brightness in `[0, 100]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
}

impl Color {
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);

    pub const fn new(hue: f32, saturation: f32, brightness: f32) -> Self {
        Self {
            hue,
            saturation,
            brightness,
        }
    }

    /// Linear RGB components in `[0, 1]`.
    pub fn to_rgb(self) -> [f32; 3] {
        let h = self.hue.rem_euclid(360.0) / 60.0;
        let s = (self.saturation / 100.0).clamp(0.0, 1.0);
        let v = (self.brightness / 100.0).clamp(0.0, 1.0);
        let c = v * s;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let m = v - c;
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        [r + m, g + m, b + m]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PaletteMode {
    /// Evenly spaced hues around the wheel; deterministic.
    #[default]
    Ramp,
    /// Fresh uniform draws per channel on every re-theme.
    Random,
}

pub struct ColorTheme {
    mode: PaletteMode,
    rng: StdRng,
}

impl ColorTheme {
    pub fn new(mode: PaletteMode, seed: u64) -> Self {
        Self {
            mode,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn theme(&mut self, index: usize, total: usize) -> Color {
        match self.mode {
            PaletteMode::Ramp => ramp_color(index, total),
            PaletteMode::Random => Color::new(
                self.rng.gen_range(0.0..360.0),
                self.rng.gen_range(0.0..=100.0),
                self.rng.gen_range(0.0..=100.0),
            ),
        }
    }

    /// Full palette with exactly `total` entries.
    pub fn palette(&mut self, total: usize) -> Vec<Color> {
        (0..total).map(|i| self.theme(i, total)).collect()
    }
}

pub fn ramp_color(index: usize, total: usize) -> Color {
    let hue = if total == 0 {
        0.0
    } else {
        map_range(index as f32, 0.0, total as f32, 0.0, 360.0)
    };
    Color::new(hue, THEME_SATURATION, THEME_BRIGHTNESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < 1e-4)
    }

    #[test]
    fn primaries_convert() {
        assert!(close(Color::new(0.0, 100.0, 100.0).to_rgb(), [1.0, 0.0, 0.0]));
        assert!(close(Color::new(120.0, 100.0, 100.0).to_rgb(), [0.0, 1.0, 0.0]));
        assert!(close(Color::new(240.0, 100.0, 100.0).to_rgb(), [0.0, 0.0, 1.0]));
        assert!(close(Color::new(60.0, 100.0, 100.0).to_rgb(), [1.0, 1.0, 0.0]));
    }

    #[test]
    fn hue_wraps() {
        assert!(close(
            Color::new(360.0, 100.0, 100.0).to_rgb(),
            Color::new(0.0, 100.0, 100.0).to_rgb()
        ));
        assert!(close(
            Color::new(-120.0, 100.0, 100.0).to_rgb(),
            Color::new(240.0, 100.0, 100.0).to_rgb()
        ));
    }

    #[test]
    fn zero_saturation_is_grey() {
        let [r, g, b] = Color::new(200.0, 0.0, 50.0).to_rgb();
        assert!((r - 0.5).abs() < 1e-6 && (g - 0.5).abs() < 1e-6 && (b - 0.5).abs() < 1e-6);
        assert_eq!(Color::BLACK.to_rgb(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn ramp_is_deterministic_and_evenly_spaced() {
        let mut a = ColorTheme::new(PaletteMode::Ramp, 1);
        let mut b = ColorTheme::new(PaletteMode::Ramp, 2);
        let pa = a.palette(12);
        assert_eq!(pa, b.palette(12));
        for (i, c) in pa.iter().enumerate() {
            assert!((c.hue - i as f32 * 30.0).abs() < 1e-3);
            assert_eq!(c.saturation, 80.0);
            assert_eq!(c.brightness, 90.0);
        }
    }

    #[test]
    fn random_palette_has_requested_length_and_valid_channels() {
        let mut t = ColorTheme::new(PaletteMode::Random, 42);
        for total in [6, 9, 24] {
            let p = t.palette(total);
            assert_eq!(p.len(), total);
            for c in p {
                assert!((0.0..360.0).contains(&c.hue));
                assert!((0.0..=100.0).contains(&c.saturation));
                assert!((0.0..=100.0).contains(&c.brightness));
            }
        }
    }
}
