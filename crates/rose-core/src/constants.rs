// Fixed tuning constants shared by the core pipeline and the native frontend.

// Canvas
pub const CANVAS_SIZE: f32 = 800.0; // logical width and height

// Signal conditioning
pub const SIGNAL_MIN: i32 = 0;
pub const SIGNAL_MAX: i32 = 1023; // 10-bit ADC range of the sensor board
pub const SMOOTHING_FACTOR: f32 = 0.1; // lerp weight applied to large deviations
pub const THRESHOLD: i32 = 10; // deadband width for smoothing and re-theme gating

// Curve geometry
pub const CURVE_SAMPLES: usize = 361; // one point per integer degree, 0..=360
pub const BASE_RADIUS: f32 = 100.0;
pub const REDUCED_BASE_RADIUS: f32 = 150.0;
pub const RING_STEP: f32 = 5.0; // radius decrement between stacked fill rings
pub const SLICE_OFFSET: f32 = 200.0; // distance of each lobe from the center
pub const CENTRAL_RADIUS_FACTOR: f32 = 1.5;

// Secondary signal
pub const MAX_RADIUS_FACTOR: f32 = 2.5; // radius at full light relative to base
pub const ROTATION_SPEED_MAX: f32 = 2.0; // degrees per frame at full light

// Palette
pub const THEME_SATURATION: f32 = 80.0;
pub const THEME_BRIGHTNESS: f32 = 90.0;

// Fill rings
pub const RING_SATURATION: f32 = 80.0;
pub const RING_BRIGHTNESS_RIM: f32 = 50.0; // brightness of the outermost ring
pub const RING_BRIGHTNESS_CORE: f32 = 100.0; // brightness as the ring radius nears 0
pub const FILL_ALPHA: f32 = 0.8;

// Outlines
pub const STROKE_ALPHA: f32 = 0.8;
pub const STROKE_WEIGHT: f32 = 1.5;

// Central motif
pub const CENTRAL_HUE_CORE: f32 = 200.0; // cool
pub const CENTRAL_HUE_RIM: f32 = 60.0; // warm
pub const CENTRAL_SATURATION: f32 = 80.0;
pub const CENTRAL_BRIGHTNESS: f32 = 90.0;
pub const ACCENT_HUE: f32 = 60.0;
