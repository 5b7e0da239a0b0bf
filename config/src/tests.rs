//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_normal_epsilon_is_positive() {
    assert!(NORMAL_EPSILON > 0.0);
}

#[test]
fn test_default_normal_is_unit_up() {
    let [x, y, z] = DEFAULT_NORMAL;
    assert_eq!((x, y, z), (0.0, 1.0, 0.0));
    assert!(((x * x + y * y + z * z).sqrt() - 1.0).abs() < EPSILON);
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_default_steps_per_axis() {
    assert_eq!(DEFAULT_STEPS_PER_AXIS, 100);
}

#[test]
fn test_default_texture_repeat_is_single_tile() {
    assert_eq!(DEFAULT_TEXTURE_REPEAT, 1);
}

#[test]
fn test_default_grid_fits_vertex_limit() {
    let per_axis = DEFAULT_STEPS_PER_AXIS as usize + 1;
    assert!(per_axis * per_axis <= MAX_VERTICES);
}

// =============================================================================
// APPROX_ZERO TESTS
// =============================================================================

#[test]
fn test_approx_zero_exact_zero() {
    assert!(approx_zero(0.0));
}

#[test]
fn test_approx_zero_within_epsilon() {
    let small = EPSILON / 2.0;
    assert!(approx_zero(small));
    assert!(approx_zero(-small));
}

#[test]
fn test_approx_zero_outside_epsilon() {
    let large = EPSILON * 2.0;
    assert!(!approx_zero(large));
    assert!(!approx_zero(-large));
}

// =============================================================================
// COLOR TESTS
// =============================================================================

#[test]
fn test_default_color_valid_rgba() {
    for component in DEFAULT_COLOR.iter() {
        assert!(*component >= 0.0 && *component <= 1.0);
    }
}

#[test]
fn test_default_color_is_opaque() {
    assert_eq!(DEFAULT_COLOR[3], 1.0);
}
