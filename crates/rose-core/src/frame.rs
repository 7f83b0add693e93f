//! Per-frame orchestration. Holds no drawing logic of its own: it feeds the
//! conditioner, refreshes the mapped parameters, re-themes when the gate
//! fires and hands the state to the compositor.

use crate::color::ColorTheme;
use crate::constants::{SIGNAL_MAX, SIGNAL_MIN, THRESHOLD};
use crate::kaleidoscope::{Frame, KaleidoscopeCompositor};
use crate::mapping::{ButtonEdge, ParameterMapper};
use crate::protocol::{decode_line, ProtocolError, RawSample};
use crate::signal::SignalConditioner;
use crate::state::{AnimationState, PipelineConfig};

pub struct RenderLoop {
    config: PipelineConfig,
    conditioner: SignalConditioner,
    mapper: ParameterMapper,
    theme: ColorTheme,
    compositor: KaleidoscopeCompositor,
    button: ButtonEdge,
    light: Option<i32>,
    state: AnimationState,
}

impl RenderLoop {
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_conditioner(config, SignalConditioner::new())
    }

    pub fn with_conditioner(config: PipelineConfig, conditioner: SignalConditioner) -> Self {
        let mut theme = ColorTheme::new(config.palette, config.seed);
        let state = AnimationState::new(&config, &mut theme);
        Self {
            mapper: ParameterMapper::new(config.preset),
            compositor: KaleidoscopeCompositor::new(config.central_motif, config.palette),
            config,
            conditioner,
            theme,
            button: ButtonEdge::default(),
            light: None,
            state,
        }
    }

    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    pub fn conditioner(&self) -> &SignalConditioner {
        &self.conditioner
    }

    /// Last accepted light reading, already clamped.
    pub fn light(&self) -> Option<i32> {
        self.light
    }

    /// Fold one decoded sample into the signal and toggle state.
    pub fn apply_sample(&mut self, sample: RawSample) {
        self.conditioner
            .update(sample.potentiometer.clamp(SIGNAL_MIN, SIGNAL_MAX));
        if self.config.secondary_signal {
            if let Some(light) = sample.light {
                self.light = Some(light.clamp(SIGNAL_MIN, SIGNAL_MAX));
            }
        }
        if self.config.fill_toggle {
            if let Some(down) = sample.button_down {
                if self.button.rising(down) {
                    self.state.fill_mode = !self.state.fill_mode;
                    log::info!("[frame] fill mode {}", self.state.fill_mode);
                }
            }
        }
    }

    /// Decode and apply one input line. Rejected lines leave every piece
    /// of state untouched.
    pub fn ingest_line(&mut self, line: &str) -> Result<(), ProtocolError> {
        let sample = decode_line(line)?;
        self.apply_sample(sample);
        Ok(())
    }

    /// Advance one tick. Always produces a frame, with or without new input.
    pub fn frame(&mut self, pending: Option<RawSample>) -> Frame {
        if let Some(sample) = pending {
            self.apply_sample(sample);
        }

        let secondary = self.mapper.secondary(self.light);
        self.state.radius = secondary.radius;
        self.state.rotation_angle += secondary.rotation_speed as f64;

        let latched = self.conditioner.read_latched();
        self.state.d = self.mapper.angular_step(latched);
        if let Some(n) = self.mapper.frequency(latched) {
            self.state.n = n;
        }

        if let Some(params) = self
            .mapper
            .remap(latched, self.conditioner.last_latched(), THRESHOLD)
        {
            self.conditioner.commit_latched(latched);
            self.state.set_slices(params.num_slices, &mut self.theme);
            log::info!(
                "[frame] re-theme latched={} slices={} n={} d={}",
                latched,
                params.num_slices,
                self.state.n,
                self.state.d
            );
        }

        self.compositor.compose(&self.state)
    }
}
