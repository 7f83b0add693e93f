//! Maurer rose sampling.
//!
//! A Maurer rose walks the polar rose `r = R * sin(n * k)` in jumps of `d`
//! degrees instead of one degree at a time, joining the visited points with
//! straight segments. For `d > 1` this gives star and braid shapes rather
//! than the smooth petals of the plain rose.
//!
//! The sampler is pure: it knows nothing about slices, rotation or color.

use crate::constants::{CURVE_SAMPLES, RING_BRIGHTNESS_CORE, RING_BRIGHTNESS_RIM, RING_STEP};
use crate::mapping::map_range;
use glam::{Affine2, Vec2};

/// Closed polyline; the last point coincides with the first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Curve {
    pub points: Vec<Vec2>,
}

impl Curve {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<Vec2> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<Vec2> {
        self.points.last().copied()
    }

    pub fn scaled(&self, factor: f32) -> Curve {
        Curve {
            points: self.points.iter().map(|p| *p * factor).collect(),
        }
    }

    pub fn transformed(&self, transform: &Affine2) -> Curve {
        Curve {
            points: self
                .points
                .iter()
                .map(|p| transform.transform_point2(*p))
                .collect(),
        }
    }

    /// Copy with every x coordinate negated.
    pub fn mirrored_x(&self) -> Curve {
        Curve {
            points: self.points.iter().map(|p| Vec2::new(-p.x, p.y)).collect(),
        }
    }

    pub fn is_closed(&self, tolerance: f32) -> bool {
        match (self.first(), self.last()) {
            (Some(a), Some(b)) => a.distance(b) <= tolerance,
            _ => false,
        }
    }
}

/// One stacked fill layer.
#[derive(Clone, Debug)]
pub struct Ring {
    pub radius: f32,
    pub curve: Curve,
}

#[derive(Clone, Debug)]
pub struct RoseSample {
    /// Largest radius first.
    pub rings: Vec<Ring>,
    pub outline: Curve,
}

/// Rose at `R = 1`. Angles are reduced in integer degrees before the
/// conversion to radians so large `i * d` products keep full precision and
/// the walk closes exactly.
pub fn unit_rose(n: u32, d: u32) -> Curve {
    let n = (n % 360) as u64;
    let d = (d % 360) as u64;
    let points = (0..CURVE_SAMPLES as u64)
        .map(|i| {
            let k = (i * d) % 360;
            let nk = (n * k) % 360;
            let r = (nk as f32).to_radians().sin();
            let (s, c) = (k as f32).to_radians().sin_cos();
            Vec2::new(r * c, r * s)
        })
        .collect();
    Curve { points }
}

/// Radii of the stacked rings: `max, max - 5, ...` while positive.
pub fn ring_radii(max_radius: f32) -> impl Iterator<Item = f32> {
    let count = if max_radius > 0.0 {
        (max_radius / RING_STEP).ceil() as usize
    } else {
        0
    };
    (0..count)
        .map(move |i| max_radius - i as f32 * RING_STEP)
        .filter(|r| *r > 0.0)
}

/// Rim rings are darker, the core brighter.
pub fn ring_brightness(radius: f32, max_radius: f32) -> f32 {
    map_range(
        radius,
        0.0,
        max_radius,
        RING_BRIGHTNESS_CORE,
        RING_BRIGHTNESS_RIM,
    )
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MaurerRoseSampler;

impl MaurerRoseSampler {
    pub fn sample(&self, n: u32, d: u32, max_radius: f32) -> RoseSample {
        let unit = unit_rose(n, d);
        let rings = ring_radii(max_radius)
            .map(|radius| Ring {
                radius,
                curve: unit.scaled(radius),
            })
            .collect();
        RoseSample {
            rings,
            outline: unit.scaled(max_radius),
        }
    }
}
