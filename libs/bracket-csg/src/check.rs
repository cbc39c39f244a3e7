//! # Parameter Checks
//!
//! Flags parameter combinations that will produce a malformed or
//! degenerate bracket. Purely advisory: [`crate::build`] never looks at
//! these warnings and never refuses to build.

use std::fmt;

use glam::DVec2;
use serde::Serialize;

use crate::params::BracketParams;

/// A suspicious parameter combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum ParamWarning {
    /// A length that should be strictly positive is not.
    NonPositiveLength { name: &'static str, value: f64 },
    /// A hole center leaves less than one hole radius of plate around it.
    HoleOutsidePlate { index: usize, center: [f64; 2] },
    /// The countersink would cut through the whole back plate.
    CountersinkTooDeep { depth: f64, plate: f64 },
    /// The countersink is not wider than the hole it recesses.
    CountersinkNarrowerThanHole { countersink: f64, hole: f64 },
    /// Opposite spacer walls meet, leaving no open channel.
    WallsCloseChannel { wall: f64 },
    /// A channel rib runs through a screw hole's clearance.
    RibCrossesHole { index: usize },
}

impl fmt::Display for ParamWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveLength { name, value } => {
                write!(f, "{name} must be positive, got {value}")
            }
            Self::HoleOutsidePlate { index, center } => write!(
                f,
                "hole {index} at ({}, {}) is not fully inside the plate",
                center[0], center[1]
            ),
            Self::CountersinkTooDeep { depth, plate } => write!(
                f,
                "countersink depth {depth} reaches through the {plate} mm back plate"
            ),
            Self::CountersinkNarrowerThanHole { countersink, hole } => write!(
                f,
                "countersink diameter {countersink} is not wider than hole diameter {hole}"
            ),
            Self::WallsCloseChannel { wall } => {
                write!(f, "spacer walls of {wall} mm leave no open channel")
            }
            Self::RibCrossesHole { index } => {
                write!(f, "a channel rib crosses the clearance of hole {index}")
            }
        }
    }
}

/// Collects every warning for `params`, in a fixed order.
///
/// # Example
///
/// ```rust
/// use bracket_csg::{check, BracketParams};
///
/// assert!(check(&BracketParams::default()).is_empty());
///
/// let wide = BracketParams { screw_spacing_h: 105.0, ..BracketParams::default() };
/// assert_eq!(check(&wide).len(), 4);
/// ```
pub fn check(params: &BracketParams) -> Vec<ParamWarning> {
    let mut warnings = Vec::new();

    let lengths: [(&'static str, f64); 11] = [
        ("bracket_width", params.bracket_width),
        ("bracket_height", params.bracket_height),
        ("front_plate_thickness", params.front_plate_thickness),
        ("back_plate_thickness", params.back_plate_thickness),
        ("spacer_gap", params.spacer_gap),
        ("spacer_wall", params.spacer_wall),
        ("screw_hole_diameter", params.screw_hole_diameter),
        ("screw_spacing_h", params.screw_spacing_h),
        ("screw_spacing_v", params.screw_spacing_v),
        ("countersink_depth", params.countersink_depth),
        ("countersink_diameter", params.countersink_diameter),
    ];
    warnings.extend(
        lengths
            .into_iter()
            .filter(|(_, value)| *value <= 0.0)
            .map(|(name, value)| ParamWarning::NonPositiveLength { name, value }),
    );

    let radius = params.screw_hole_diameter / 2.0;
    for (index, center) in params.hole_centers().into_iter().enumerate() {
        if !inside_with_margin(center, params, radius) {
            warnings.push(ParamWarning::HoleOutsidePlate {
                index,
                center: center.to_array(),
            });
        }
    }

    if params.countersink_depth >= params.back_plate_thickness {
        warnings.push(ParamWarning::CountersinkTooDeep {
            depth: params.countersink_depth,
            plate: params.back_plate_thickness,
        });
    }

    if params.countersink_diameter <= params.screw_hole_diameter {
        warnings.push(ParamWarning::CountersinkNarrowerThanHole {
            countersink: params.countersink_diameter,
            hole: params.screw_hole_diameter,
        });
    }

    let ring = 2.0 * params.spacer_wall;
    if ring >= params.bracket_width || ring >= params.bracket_height {
        warnings.push(ParamWarning::WallsCloseChannel {
            wall: params.spacer_wall,
        });
    }

    if let Some(rib) = params.center_rib_width {
        let clearance = rib / 2.0 + radius;
        let (xs, ys) = params.rib_centerlines();
        let near = |lines: &[f64], at: f64| lines.iter().any(|line| (at - line).abs() < clearance);
        for (index, hole) in params.hole_centers().into_iter().enumerate() {
            if near(&xs, hole.x) || near(&ys, hole.y) {
                warnings.push(ParamWarning::RibCrossesHole { index });
            }
        }
    }

    warnings
}

fn inside_with_margin(point: DVec2, params: &BracketParams, margin: f64) -> bool {
    point.x >= margin
        && point.x <= params.bracket_width - margin
        && point.y >= margin
        && point.y <= params.bracket_height - margin
}

// =============================================================================
// TESTS
// =============================================================================
