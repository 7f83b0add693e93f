//! Symmetry compositing: one sampled rose placed in every slice, each slice
//! paired with its mirror image, with an optional larger motif on top.
//!
//! Emitted points are in composition space (origin at the canvas center,
//! before the global spin). `Frame` carries the center and spin so the
//! drawing side applies them once for the whole composition.

use crate::color::{Color, PaletteMode};
use crate::constants::{
    ACCENT_HUE, CANVAS_SIZE, CENTRAL_BRIGHTNESS, CENTRAL_HUE_CORE, CENTRAL_HUE_RIM,
    CENTRAL_RADIUS_FACTOR, CENTRAL_SATURATION, FILL_ALPHA, RING_SATURATION, SLICE_OFFSET,
    STROKE_ALPHA, STROKE_WEIGHT,
};
use crate::mapping::map_range;
use crate::rose::{ring_brightness, Curve, MaurerRoseSampler, RoseSample};
use crate::state::AnimationState;
use glam::{Affine2, Vec2};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Style {
    Fill { color: Color, alpha: f32 },
    Stroke { color: Color, alpha: f32, weight: f32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layer {
    Slice { index: usize, mirrored: bool },
    Center,
}

#[derive(Clone, Debug)]
pub struct PositionedCurve {
    pub layer: Layer,
    pub style: Style,
    pub curve: Curve,
}

/// Everything needed to draw one frame, in drawing order.
#[derive(Clone, Debug)]
pub struct Frame {
    pub background: Color,
    pub center: Vec2,
    /// Global spin reduced into `[0, 360)`.
    pub rotation_deg: f32,
    pub commands: Vec<PositionedCurve>,
}

impl Frame {
    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &PositionedCurve> {
        self.commands.iter().filter(move |c| c.layer == layer)
    }
}

/// Placement of slice `index`: pushed out along +x, then turned into its wedge.
pub fn slice_transform(index: usize, num_slices: usize) -> Affine2 {
    let increment = 360.0 / num_slices.max(1) as f32;
    Affine2::from_angle((index as f32 * increment).to_radians())
        * Affine2::from_translation(Vec2::new(SLICE_OFFSET, 0.0))
}

#[derive(Clone, Debug)]
pub struct KaleidoscopeCompositor {
    sampler: MaurerRoseSampler,
    central_motif: bool,
    palette: PaletteMode,
}

impl KaleidoscopeCompositor {
    pub fn new(central_motif: bool, palette: PaletteMode) -> Self {
        Self {
            sampler: MaurerRoseSampler,
            central_motif,
            palette,
        }
    }

    /// Ramp outlines keep only the hue at full strength; random palettes are
    /// stroked with the drawn color as is.
    fn outline_color(&self, color: Color) -> Color {
        match self.palette {
            PaletteMode::Ramp => Color::new(color.hue, 100.0, 100.0),
            PaletteMode::Random => color,
        }
    }

    pub fn compose(&self, state: &AnimationState) -> Frame {
        let rose = self.sampler.sample(state.n, state.d, state.radius);
        let mut commands = Vec::new();

        for index in 0..state.num_slices {
            let color = state
                .palette
                .get(index)
                .copied()
                .unwrap_or(Color::BLACK);
            let transform = slice_transform(index, state.num_slices);
            for mirrored in [false, true] {
                let layer = Layer::Slice { index, mirrored };
                let place = |curve: &Curve| {
                    let placed = curve.transformed(&transform);
                    if mirrored {
                        placed.mirrored_x()
                    } else {
                        placed
                    }
                };
                let ring_color = |radius: f32| {
                    Color::new(
                        color.hue,
                        RING_SATURATION,
                        ring_brightness(radius, state.radius),
                    )
                };
                push_rose(
                    &mut commands,
                    &rose,
                    state.fill_mode,
                    layer,
                    place,
                    ring_color,
                    self.outline_color(color),
                );
            }
        }

        if self.central_motif {
            let max_radius = state.radius * CENTRAL_RADIUS_FACTOR;
            let center = self.sampler.sample(state.n, state.d, max_radius);
            push_rose(
                &mut commands,
                &center,
                state.fill_mode,
                Layer::Center,
                Curve::clone,
                |radius| {
                    Color::new(
                        map_range(radius, 0.0, max_radius, CENTRAL_HUE_CORE, CENTRAL_HUE_RIM),
                        CENTRAL_SATURATION,
                        CENTRAL_BRIGHTNESS,
                    )
                },
                Color::new(ACCENT_HUE, 100.0, 100.0),
            );
        }

        Frame {
            background: Color::BLACK,
            center: Vec2::splat(CANVAS_SIZE / 2.0),
            rotation_deg: state.rotation_angle.rem_euclid(360.0) as f32,
            commands,
        }
    }
}

fn push_rose(
    out: &mut Vec<PositionedCurve>,
    rose: &RoseSample,
    fill: bool,
    layer: Layer,
    place: impl Fn(&Curve) -> Curve,
    ring_color: impl Fn(f32) -> Color,
    outline_color: Color,
) {
    if fill {
        let alpha = match layer {
            Layer::Center => 1.0,
            Layer::Slice { .. } => FILL_ALPHA,
        };
        for ring in &rose.rings {
            out.push(PositionedCurve {
                layer,
                style: Style::Fill {
                    color: ring_color(ring.radius),
                    alpha,
                },
                curve: place(&ring.curve),
            });
        }
    }
    out.push(PositionedCurve {
        layer,
        style: Style::Stroke {
            color: outline_color,
            alpha: STROKE_ALPHA,
            weight: STROKE_WEIGHT,
        },
        curve: place(&rose.outline),
    });
}
