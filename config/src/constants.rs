//! # Configuration Constants
//!
//! Centralized constants for the bracket pipeline. Tolerances, tessellation
//! defaults, boolean-cut margins and mesh limits are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Tolerances used by the mesh kernel
//! - **Resolution**: Default tessellation parameters (`$fn`)
//! - **Rib grid**: Default and minimum channel divisions
//! - **Cutting**: Overshoot applied to subtractive primitives
//! - **Hardware**: Fastener allowances used by the report
//! - **Limits**: Mesh size caps
//! - **Formatting**: Decimal places for reports and emitted source

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Plane classification tolerance for BSP boolean operations.
///
/// Points closer than this to a splitting plane are treated as coplanar.
/// Kept well above f64 rounding because split vertices accumulate error.
pub const BSP_EPSILON: f64 = 1e-5;

/// Minimum triangle area considered non-degenerate during mesh validation.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-8;

// =============================================================================
// RESOLUTION CONSTANTS ($fn)
// =============================================================================

/// Default number of facets used to approximate a circle.
///
/// Matches the 32 sections the printed prototypes were generated with.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SEGMENTS;
///
/// let user_fn: Option<u32> = None;
/// assert_eq!(user_fn.unwrap_or(DEFAULT_SEGMENTS), 32);
/// ```
pub const DEFAULT_SEGMENTS: u32 = 32;

/// Minimum number of facets for any circular shape (a triangle).
pub const MIN_SEGMENTS: u32 = 3;

// =============================================================================
// RIB GRID CONSTANTS
// =============================================================================

/// Default number of cells the rib grid splits each channel axis into.
///
/// Two cells per axis is a single rib per axis, crossing at the center.
pub const DEFAULT_RIB_DIVISIONS: u32 = 2;

/// Fewest cells per axis that still places a rib.
pub const MIN_RIB_DIVISIONS: u32 = 2;

/// Most cells per axis. Past this the ribs fill the channel solid.
pub const MAX_RIB_DIVISIONS: u32 = 64;

// =============================================================================
// CUTTING CONSTANTS
// =============================================================================

/// Overshoot added to both ends of every subtractive primitive, in mm.
///
/// A hole whose end face lies exactly on the face it should pierce leaves a
/// zero-thickness skin after the boolean difference. Extending each cut by
/// this amount past both faces avoids the coincidence. Not a visible
/// dimension of the part.
///
/// # Example
///
/// ```rust
/// use config::constants::CUT_OVERSHOOT;
///
/// let plate = 3.0;
/// let (z_start, height) = (-CUT_OVERSHOOT, plate + 2.0 * CUT_OVERSHOOT);
/// assert!(z_start < 0.0);
/// assert!(z_start + height > plate);
/// ```
pub const CUT_OVERSHOOT: f64 = 0.1;

// =============================================================================
// HARDWARE CONSTANTS
// =============================================================================

/// Screw length that must reach past the bracket into the wall or anchor, in mm.
///
/// The report recommends `total_thickness + SCREW_WALL_EMBED`.
pub const SCREW_WALL_EMBED: f64 = 25.0;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of vertices in a single mesh.
pub const MAX_VERTICES: usize = 10_000_000;

/// Maximum number of triangles in a single mesh.
pub const MAX_TRIANGLES: usize = 10_000_000;

// =============================================================================
// FORMATTING CONSTANTS
// =============================================================================

/// Decimal places used when printing millimeter values in reports.
/// Trailing zeros are trimmed.
pub const LENGTH_DECIMALS: usize = 3;

/// Decimal places used for numbers in emitted OpenSCAD source.
pub const SOURCE_DECIMALS: usize = 6;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Formats a length in millimeters with at most [`LENGTH_DECIMALS`]
/// decimals and no trailing zeros.
///
/// # Example
///
/// ```rust
/// use config::constants::format_length;
///
/// assert_eq!(format_length(105.0), "105");
/// assert_eq!(format_length(6.4), "6.4");
/// assert_eq!(format_length(-0.1), "-0.1");
/// assert_eq!(format_length(1.0 / 3.0), "0.333");
/// ```
pub fn format_length(value: f64) -> String {
    format_decimal(value, LENGTH_DECIMALS)
}

/// Formats `value` with at most `decimals` decimals, trimming trailing
/// zeros and normalizing `-0` to `0`.
///
/// # Example
///
/// ```rust
/// use config::constants::format_decimal;
///
/// assert_eq!(format_decimal(3.2000000000000006, 6), "3.2");
/// assert_eq!(format_decimal(0.126, 2), "0.13");
/// ```
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let fixed = format!("{:.*}", decimals, value);
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    }
}
