//! Conditioned signal -> animation parameters.

use crate::constants::{
    BASE_RADIUS, MAX_RADIUS_FACTOR, REDUCED_BASE_RADIUS, ROTATION_SPEED_MAX, SIGNAL_MAX,
    SIGNAL_MIN,
};

/// Linear re-map of `value` from `[in_lo, in_hi]` onto `[out_lo, out_hi]`.
/// Not clamped: values outside the input range extrapolate.
#[inline]
pub fn map_range(value: f32, in_lo: f32, in_hi: f32, out_lo: f32, out_hi: f32) -> f32 {
    out_lo + (value - in_lo) * (out_hi - out_lo) / (in_hi - in_lo)
}

#[inline]
fn map_signal(latched: i32, out_lo: f32, out_hi: f32) -> f32 {
    let v = latched.clamp(SIGNAL_MIN, SIGNAL_MAX) as f32;
    map_range(v, SIGNAL_MIN as f32, SIGNAL_MAX as f32, out_lo, out_hi)
}

/// Parameter domain sets. `Curve` holds the rose frequency fixed and sweeps
/// the angular step over the full circle; `Reduced` sweeps both over
/// narrower ranges with fewer slices.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Curve,
    Reduced,
}

impl Preset {
    pub fn slice_range(self) -> (u32, u32) {
        match self {
            Preset::Curve => (6, 24),
            Preset::Reduced => (6, 12),
        }
    }

    pub fn step_range(self) -> (u32, u32) {
        match self {
            Preset::Curve => (1, 360),
            Preset::Reduced => (50, 100),
        }
    }

    /// `None` when the frequency is not signal-driven.
    pub fn frequency_range(self) -> Option<(u32, u32)> {
        match self {
            Preset::Curve => None,
            Preset::Reduced => Some((2, 10)),
        }
    }

    pub fn base_radius(self) -> f32 {
        match self {
            Preset::Curve => BASE_RADIUS,
            Preset::Reduced => REDUCED_BASE_RADIUS,
        }
    }

    pub fn initial_slices(self) -> usize {
        match self {
            Preset::Curve => 12,
            Preset::Reduced => 6,
        }
    }

    pub fn initial_frequency(self) -> u32 {
        match self {
            Preset::Curve => 6,
            Preset::Reduced => 7,
        }
    }

    pub fn initial_step(self) -> u32 {
        match self {
            Preset::Curve => 1,
            Preset::Reduced => 71,
        }
    }
}

/// Output of a gated re-map.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MappedParams {
    pub num_slices: usize,
}

/// Ungated per-frame output of the secondary (light) signal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SecondaryParams {
    pub radius: f32,
    pub rotation_speed: f32,
}

#[derive(Clone, Debug, Default)]
pub struct ParameterMapper {
    preset: Preset,
}

impl ParameterMapper {
    pub fn new(preset: Preset) -> Self {
        Self { preset }
    }

    /// Hysteresis-gated re-map; `None` unless the latched value moved by
    /// more than `threshold` since `previous`.
    pub fn remap(&self, latched: i32, previous: i32, threshold: i32) -> Option<MappedParams> {
        if latched.abs_diff(previous) <= threshold.unsigned_abs() {
            return None;
        }
        Some(MappedParams {
            num_slices: self.slice_count(latched),
        })
    }

    pub fn slice_count(&self, latched: i32) -> usize {
        let (lo, hi) = self.preset.slice_range();
        map_signal(latched, lo as f32, hi as f32).round() as usize
    }

    pub fn angular_step(&self, latched: i32) -> u32 {
        let (lo, hi) = self.preset.step_range();
        map_signal(latched, lo as f32, hi as f32).round() as u32
    }

    pub fn frequency(&self, latched: i32) -> Option<u32> {
        self.preset
            .frequency_range()
            .map(|(lo, hi)| map_signal(latched, lo as f32, hi as f32).round() as u32)
    }

    /// Radius never drops below the base, even with no light reading.
    pub fn secondary(&self, light: Option<i32>) -> SecondaryParams {
        let base = self.preset.base_radius();
        let Some(light) = light else {
            return SecondaryParams {
                radius: base,
                rotation_speed: 0.0,
            };
        };
        let radius = map_signal(light, base, base * MAX_RADIUS_FACTOR).max(base);
        let rotation_speed = map_signal(light, 0.0, ROTATION_SPEED_MAX);
        SecondaryParams {
            radius,
            rotation_speed,
        }
    }
}

/// Rising-edge detector for the fill toggle button.
#[derive(Clone, Copy, Debug, Default)]
pub struct ButtonEdge {
    previous: bool,
}

impl ButtonEdge {
    /// Returns true only on a released -> pressed transition.
    pub fn rising(&mut self, down: bool) -> bool {
        let edge = down && !self.previous;
        self.previous = down;
        edge
    }
}
