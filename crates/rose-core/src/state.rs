//! Render-side state and the configuration-time pipeline choices.

use crate::color::{Color, ColorTheme, PaletteMode};
use crate::mapping::Preset;

/// Which optional behaviors are active. Fixed for the life of a pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipelineConfig {
    pub preset: Preset,
    pub palette: PaletteMode,
    /// Honor the light reading (radius breathing and spin).
    pub secondary_signal: bool,
    /// Honor the button (fill toggle on rising edge).
    pub fill_toggle: bool,
    pub central_motif: bool,
    /// Fill mode at startup.
    pub initial_fill: bool,
    pub seed: u64,
}

impl PipelineConfig {
    /// The two shipped variants: `Curve` is the fully featured one,
    /// `Reduced` draws plain outlines with random colors.
    pub fn for_preset(preset: Preset) -> Self {
        match preset {
            Preset::Curve => Self {
                preset,
                palette: PaletteMode::Ramp,
                secondary_signal: true,
                fill_toggle: true,
                central_motif: true,
                initial_fill: true,
                seed: 0,
            },
            Preset::Reduced => Self {
                preset,
                palette: PaletteMode::Random,
                secondary_signal: false,
                fill_toggle: false,
                central_motif: false,
                initial_fill: false,
                seed: 0,
            },
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::for_preset(Preset::default())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    pub num_slices: usize,
    /// Rose frequency.
    pub n: u32,
    /// Angular step multiplier, in degrees.
    pub d: u32,
    pub radius: f32,
    /// Accumulated global spin in degrees; grows without bound.
    pub rotation_angle: f64,
    pub fill_mode: bool,
    /// Always `num_slices` entries once a frame is drawn.
    pub palette: Vec<Color>,
}

impl AnimationState {
    pub fn new(config: &PipelineConfig, theme: &mut ColorTheme) -> Self {
        let preset = config.preset;
        let num_slices = preset.initial_slices();
        Self {
            num_slices,
            n: preset.initial_frequency(),
            d: preset.initial_step(),
            radius: preset.base_radius(),
            rotation_angle: 0.0,
            fill_mode: config.initial_fill,
            palette: theme.palette(num_slices),
        }
    }

    pub fn set_slices(&mut self, num_slices: usize, theme: &mut ColorTheme) {
        self.num_slices = num_slices;
        self.palette = theme.palette(num_slices);
    }
}
