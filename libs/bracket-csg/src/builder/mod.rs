//! # Geometry Builder
//!
//! Pure function from [`BracketParams`] to the bracket's CSG tree.
//!
//! ## Layout
//!
//! ```text
//! z = back + gap + front  ┌──────────── front plate ────────────┐
//! z = back + gap          └─┬──┬─────── open channel ───────┬──┬─┘
//!                           │  │ spacer walls (ring)        │  │
//! z = back                ┌─┴──┴────────────────────────────┴──┴─┐
//!                         │  \_/ countersunk holes   \_/         │ back plate
//! z = 0 (wall face)       └──────────────────────────────────────┘
//! ```
//!
//! The final tree is
//! `difference(union(back, walls x4, front [, ribs]), holes x4, countersinks x4)`.

use config::constants::CUT_OVERSHOOT;
use glam::{DVec2, DVec3};
use tracing::debug;

use crate::geometry::CsgNode;
use crate::params::BracketParams;

/// Builds the complete bracket.
///
/// Deterministic and side-effect free apart from a debug trace; the same
/// parameters always produce a structurally equal tree. Parameters are not
/// validated: out-of-range values yield degenerate geometry.
///
/// # Example
///
/// ```rust
/// use bracket_csg::{build, BracketParams, CsgNode};
///
/// let tree = build(&BracketParams::default());
/// match tree {
///     CsgNode::Difference { children } => assert_eq!(children.len(), 9),
///     _ => unreachable!(),
/// }
/// ```
pub fn build(params: &BracketParams) -> CsgNode {
    let body = plate_stack(params);
    let holes = through_holes(params);
    let countersinks = countersinks(params);

    let mut children = Vec::with_capacity(1 + holes.len() + countersinks.len());
    children.push(body);
    children.extend(holes);
    children.extend(countersinks);

    let tree = CsgNode::difference(children);
    debug!(
        primitives = tree.primitive_count(),
        total_thickness = params.total_thickness(),
        segments = params.segments,
        "built bracket tree"
    );
    tree
}

// =============================================================================
// SOLID BODY
// =============================================================================

/// Union of back plate, spacer ring, front plate and any enabled ribs.
pub fn plate_stack(params: &BracketParams) -> CsgNode {
    let mut parts = Vec::with_capacity(6);
    parts.push(back_plate(params));
    parts.extend(spacer_walls(params));
    parts.push(front_plate(params));
    parts.extend(center_ribs(params));
    CsgNode::union(parts)
}

/// Wall-facing plate: full footprint, base at z = 0.
pub fn back_plate(params: &BracketParams) -> CsgNode {
    CsgNode::cube(DVec3::new(
        params.bracket_width,
        params.bracket_height,
        params.back_plate_thickness,
    ))
}

/// Clip-facing plate: full footprint, resting on top of the spacer gap.
pub fn front_plate(params: &BracketParams) -> CsgNode {
    CsgNode::cube(DVec3::new(
        params.bracket_width,
        params.bracket_height,
        params.front_plate_thickness,
    ))
    .translated(DVec3::new(0.0, 0.0, params.front_plate_z()))
}

/// The four perimeter walls forming the C-channel ring.
///
/// Order: bottom, top, left, right. Bottom and top run the full width,
/// left and right the full height, so the corners overlap; the union
/// absorbs that.
pub fn spacer_walls(params: &BracketParams) -> [CsgNode; 4] {
    let z = params.back_plate_thickness;
    let (width, height) = (params.bracket_width, params.bracket_height);
    let (wall, gap) = (params.spacer_wall, params.spacer_gap);

    let horizontal = DVec3::new(width, wall, gap);
    let vertical = DVec3::new(wall, height, gap);

    [
        CsgNode::cube(horizontal).translated(DVec3::new(0.0, 0.0, z)),
        CsgNode::cube(horizontal).translated(DVec3::new(0.0, height - wall, z)),
        CsgNode::cube(vertical).translated(DVec3::new(0.0, 0.0, z)),
        CsgNode::cube(vertical).translated(DVec3::new(width - wall, 0.0, z)),
    ]
}

/// Rib grid inside the channel, spanning between opposite spacer walls.
/// Empty unless `center_rib_width` is set.
///
/// Horizontal ribs come first, bottom to top, then vertical ribs, left to
/// right. The default two divisions give a single cross at the center.
pub fn center_ribs(params: &BracketParams) -> Vec<CsgNode> {
    let Some(rib) = params.center_rib_width else {
        return Vec::new();
    };

    let z = params.back_plate_thickness;
    let wall = params.spacer_wall;
    let inner = DVec2::new(
        params.bracket_width - 2.0 * wall,
        params.bracket_height - 2.0 * wall,
    );
    let (xs, ys) = params.rib_centerlines();

    let horizontal = ys.into_iter().map(|y| {
        CsgNode::cube(DVec3::new(inner.x, rib, params.spacer_gap))
            .translated(DVec3::new(wall, y - rib / 2.0, z))
    });
    let vertical = xs.into_iter().map(|x| {
        CsgNode::cube(DVec3::new(rib, inner.y, params.spacer_gap))
            .translated(DVec3::new(x - rib / 2.0, wall, z))
    });
    horizontal.chain(vertical).collect()
}

// =============================================================================
// FASTENER CUTS
// =============================================================================

/// Screw through-holes piercing the back plate, one per hole center.
///
/// Each cylinder starts `CUT_OVERSHOOT` below the wall face and ends the
/// same distance above the back plate's top face.
pub fn through_holes(params: &BracketParams) -> Vec<CsgNode> {
    let height = params.back_plate_thickness + 2.0 * CUT_OVERSHOOT;
    params
        .hole_centers()
        .into_iter()
        .map(|center| {
            CsgNode::cylinder(height, params.screw_hole_diameter, params.segments)
                .translated(cut_origin(center))
        })
        .collect()
}

/// Countersink recesses opening on the wall face, coaxial with the holes.
///
/// The frustum starts `CUT_OVERSHOOT` below the wall face and ends the same
/// distance past `countersink_depth`, narrowing to `screw_hole_diameter` at
/// its top. Its bottom is widened along the taper so that the cone crosses
/// the wall face (z = 0) at exactly `countersink_diameter`.
pub fn countersinks(params: &BracketParams) -> Vec<CsgNode> {
    let height = params.countersink_depth + 2.0 * CUT_OVERSHOOT;
    let bottom = countersink_bottom_diameter(params);
    params
        .hole_centers()
        .into_iter()
        .map(|center| {
            CsgNode::frustum(height, bottom, params.screw_hole_diameter, params.segments)
                .translated(cut_origin(center))
        })
        .collect()
}

/// Diameter of the countersink frustum at z = -`CUT_OVERSHOOT`.
///
/// The cone runs from `screw_hole_diameter` at `countersink_depth +
/// CUT_OVERSHOOT` down through `countersink_diameter` at z = 0, and keeps
/// that slope for the overshoot below the face. A zero or negative span
/// falls back to `countersink_diameter`.
pub fn countersink_bottom_diameter(params: &BracketParams) -> f64 {
    let span = params.countersink_depth + CUT_OVERSHOOT;
    if span <= 0.0 {
        return params.countersink_diameter;
    }
    let flare = params.countersink_diameter - params.screw_hole_diameter;
    params.countersink_diameter + flare * CUT_OVERSHOOT / span
}

fn cut_origin(center: DVec2) -> DVec3 {
    center.extend(-CUT_OVERSHOOT)
}

#[cfg(test)]
mod tests;
