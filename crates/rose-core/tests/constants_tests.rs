// Host-side tests for constants and their mathematical relationships.

use rose_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn signal_constants_are_within_reasonable_bounds() {
    assert!(SMOOTHING_FACTOR > 0.0 && SMOOTHING_FACTOR <= 1.0);
    assert!(THRESHOLD > 0);
    assert!(SIGNAL_MAX > SIGNAL_MIN);
    assert!(THRESHOLD < SIGNAL_MAX - SIGNAL_MIN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn geometry_constants_are_positive() {
    assert!(BASE_RADIUS > 0.0);
    assert!(REDUCED_BASE_RADIUS > 0.0);
    assert!(RING_STEP > 0.0);
    assert!(SLICE_OFFSET > 0.0);
    assert!(CENTRAL_RADIUS_FACTOR > 1.0);
    assert!(MAX_RADIUS_FACTOR > 1.0);
    assert_eq!(CURVE_SAMPLES, 361);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn largest_composition_fits_the_canvas() {
    // slice lobes at full light stay inside the canvas diagonal
    let half_diag = CANVAS_SIZE * std::f32::consts::SQRT_2 / 2.0;
    assert!(SLICE_OFFSET + BASE_RADIUS * MAX_RADIUS_FACTOR < half_diag);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn color_constants_have_logical_relationships() {
    // rim darker than core gives the radial gradient
    assert!(RING_BRIGHTNESS_RIM < RING_BRIGHTNESS_CORE);
    assert!(RING_BRIGHTNESS_CORE <= 100.0);
    assert!(CENTRAL_HUE_CORE > CENTRAL_HUE_RIM);
    assert!(FILL_ALPHA > 0.0 && FILL_ALPHA <= 1.0);
    assert!(STROKE_ALPHA > 0.0 && STROKE_ALPHA <= 1.0);
    assert!(STROKE_WEIGHT > 0.0);
    assert!(THEME_SATURATION <= 100.0 && THEME_BRIGHTNESS <= 100.0);
}
