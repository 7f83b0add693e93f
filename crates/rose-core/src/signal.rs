//! Deadband + exponential smoothing of the raw potentiometer stream.
//!
//! Small jitter around the current value is ignored outright, while larger
//! moves are approached a fraction at a time so the visuals glide instead of
//! popping to the new reading.

use crate::constants::{SMOOTHING_FACTOR, THRESHOLD};

#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Smoothed value plus the last latched integer committed downstream.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothedSignal {
    pub value: f32,
    /// `-1` until the first re-theme has been committed.
    pub last_latched: i32,
}

impl Default for SmoothedSignal {
    fn default() -> Self {
        Self {
            value: 0.0,
            last_latched: -1,
        }
    }
}

#[derive(Clone, Debug)]
pub struct SignalConditioner {
    signal: SmoothedSignal,
    smoothing_factor: f32,
    threshold: i32,
}

impl Default for SignalConditioner {
    fn default() -> Self {
        Self::new()
    }
}

impl SignalConditioner {
    pub fn new() -> Self {
        Self {
            signal: SmoothedSignal::default(),
            smoothing_factor: SMOOTHING_FACTOR,
            threshold: THRESHOLD,
        }
    }

    /// Start from an already-settled value, e.g. to resume a known reading.
    pub fn with_value(value: f32) -> Self {
        let mut c = Self::new();
        c.signal.value = value;
        c
    }

    pub fn update(&mut self, raw: i32) {
        let raw = raw as f32;
        if (raw - self.signal.value).abs() > self.threshold as f32 {
            self.signal.value = lerp(self.signal.value, raw, self.smoothing_factor);
        }
    }

    #[inline]
    pub fn read_latched(&self) -> i32 {
        self.signal.value.floor() as i32
    }

    #[inline]
    pub fn smoothed_value(&self) -> f32 {
        self.signal.value
    }

    #[inline]
    pub fn last_latched(&self) -> i32 {
        self.signal.last_latched
    }

    pub fn commit_latched(&mut self, latched: i32) {
        self.signal.last_latched = latched;
    }

    pub fn signal(&self) -> SmoothedSignal {
        self.signal
    }
}
