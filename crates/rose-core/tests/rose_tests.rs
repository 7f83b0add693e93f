// Host-side tests for Maurer rose sampling.

use rose_core::rose::{ring_radii, unit_rose};
use rose_core::{MaurerRoseSampler, CURVE_SAMPLES, RING_STEP};

const CASES: &[(u32, u32)] = &[(6, 1), (6, 29), (6, 71), (7, 71), (2, 50), (10, 100), (6, 360)];

#[test]
fn outline_has_361_points_and_closes() {
    let sampler = MaurerRoseSampler;
    for &(n, d) in CASES {
        for radius in [1.0_f32, 100.0, 137.3, 250.0] {
            let s = sampler.sample(n, d, radius);
            assert_eq!(s.outline.len(), CURVE_SAMPLES);
            assert!(s.outline.is_closed(1e-3), "n={n} d={d} r={radius} not closed");
        }
    }
}

#[test]
fn every_ring_is_a_full_closed_curve() {
    let s = MaurerRoseSampler.sample(6, 71, 100.0);
    assert!(!s.rings.is_empty());
    for ring in &s.rings {
        assert_eq!(ring.curve.len(), CURVE_SAMPLES);
        assert!(ring.curve.is_closed(1e-3));
    }
}

#[test]
fn rings_descend_in_fixed_steps_and_stay_positive() {
    let s = MaurerRoseSampler.sample(6, 1, 100.0);
    assert_eq!(s.rings.len(), 20);
    assert_eq!(s.rings[0].radius, 100.0);
    for pair in s.rings.windows(2) {
        assert!((pair[0].radius - pair[1].radius - RING_STEP).abs() < 1e-4);
    }
    assert!(s.rings.iter().all(|r| r.radius > 0.0));
    assert_eq!(ring_radii(3.0).collect::<Vec<_>>(), vec![3.0]);
}

#[test]
fn points_stay_within_radius() {
    for &(n, d) in CASES {
        let s = MaurerRoseSampler.sample(n, d, 120.0);
        for p in &s.outline.points {
            assert!(p.length() <= 120.0 + 1e-3);
        }
    }
}

#[test]
fn outline_matches_polar_formula() {
    let (n, d, radius) = (6_u32, 71_u32, 100.0_f32);
    let s = MaurerRoseSampler.sample(n, d, radius);
    for i in [0_usize, 1, 2, 45, 180, 359] {
        let k = ((i as u32 * d) % 360) as f32;
        let r = radius * (n as f32 * k).to_radians().sin();
        let expected = glam::Vec2::new(r * k.to_radians().cos(), r * k.to_radians().sin());
        let got = s.outline.points[i];
        assert!(
            got.distance(expected) < 1e-2,
            "i={i}: expected {expected:?}, got {got:?}"
        );
    }
}

#[test]
fn large_step_differs_from_plain_rose() {
    let plain = unit_rose(6, 1);
    let maurer = unit_rose(6, 71);
    assert_ne!(plain, maurer);
}

#[test]
fn sampler_is_pure() {
    let a = MaurerRoseSampler.sample(7, 71, 150.0);
    let b = MaurerRoseSampler.sample(7, 71, 150.0);
    assert_eq!(a.outline, b.outline);
    assert_eq!(a.rings.len(), b.rings.len());
}
