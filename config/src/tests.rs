//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_tolerances_are_positive() {
    assert!(BSP_EPSILON > 0.0, "BSP_EPSILON must be positive");
    assert!(DEGENERATE_AREA_EPSILON > 0.0);
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_min_segments_forms_polygon() {
    // A circle needs at least 3 points to form a polygon
    assert!(MIN_SEGMENTS >= 3);
}

#[test]
fn test_default_segments_above_minimum() {
    assert!(DEFAULT_SEGMENTS >= MIN_SEGMENTS);
}

// =============================================================================
// CUTTING TESTS
// =============================================================================

#[test]
fn test_overshoot_is_small_and_positive() {
    // Must clear a coincident face but stay invisible next to mm-scale features
    assert!(CUT_OVERSHOOT > BSP_EPSILON);
    assert!(CUT_OVERSHOOT < 1.0);
}

// =============================================================================
// FORMAT_LENGTH TESTS
// =============================================================================

#[test]
fn test_format_length_integers() {
    assert_eq!(format_length(105.0), "105");
    assert_eq!(format_length(0.0), "0");
}

#[test]
fn test_format_length_decimals() {
    assert_eq!(format_length(1.4), "1.4");
    assert_eq!(format_length(4.5), "4.5");
    assert_eq!(format_length(17.5), "17.5");
}

#[test]
fn test_format_length_rounds() {
    assert_eq!(format_length(3.0 + 2.0 + 1.4), "6.4");
    assert_eq!(format_length(2.0 / 3.0), "0.667");
}

#[test]
fn test_format_length_negative_zero() {
    assert_eq!(format_length(-0.0001), "0");
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_source_keeps_more_decimals_than_reports() {
    assert!(SOURCE_DECIMALS > LENGTH_DECIMALS);
    assert_eq!(format_decimal(0.1234567, SOURCE_DECIMALS), "0.123457");
}

#[test]
fn test_mesh_limits_reasonable() {
    assert!(MAX_VERTICES >= 1_000_000);
    assert!(MAX_TRIANGLES >= 1_000_000);
}
