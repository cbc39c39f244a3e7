//! # OpenSCAD Emitter
//!
//! Renders a [`CsgNode`] tree as OpenSCAD source so any OpenSCAD-compatible
//! kernel can evaluate and export it.
//!
//! ```text
//! difference() {
//!   union() {
//!     cube([105, 65, 3]);
//!     translate([0, 0, 3]) cube([105, 8, 2]);
//!     ...
//!   }
//!   translate([17.5, 12.5, -0.1]) cylinder(h=3.2, d=4.5, $fn=32);
//!   ...
//! }
//! ```

use config::constants::{format_decimal, SOURCE_DECIMALS};
use glam::DVec3;

use crate::builder::build;
use crate::geometry::CsgNode;
use crate::params::BracketParams;
use crate::report::report;

const INDENT: &str = "  ";

/// Emits `tree` as OpenSCAD source, one statement per line.
///
/// # Example
///
/// ```rust
/// use bracket_csg::{to_openscad, CsgNode};
/// use glam::DVec3;
///
/// let node = CsgNode::cube(DVec3::new(1.0, 2.0, 0.5)).translated(DVec3::Z);
/// assert_eq!(to_openscad(&node), "translate([0, 0, 1]) cube([1, 2, 0.5]);\n");
/// ```
pub fn to_openscad(tree: &CsgNode) -> String {
    let mut out = String::new();
    emit(tree, 0, &mut out);
    out
}

/// Full `.scad` file for `params`: a comment header with the report,
/// then the bracket tree.
pub fn bracket_scad(params: &BracketParams) -> String {
    let mut out = String::from("// Sandwich wall-mount bracket\n");
    for line in report(params).lines() {
        out.push_str(&format!("// {}: {}\n", line.label, line.value));
    }
    out.push('\n');
    out.push_str(&to_openscad(&build(params)));
    out
}

fn emit(node: &CsgNode, depth: usize, out: &mut String) {
    out.push_str(&INDENT.repeat(depth));
    emit_statement(node, depth, out);
}

/// Writes `node` starting at the current cursor; transforms chain inline.
fn emit_statement(node: &CsgNode, depth: usize, out: &mut String) {
    match node {
        CsgNode::Cube { size } => {
            out.push_str(&format!("cube({});\n", vector(*size)));
        }
        CsgNode::Cylinder {
            height,
            diameter,
            segments,
        } => {
            out.push_str(&format!(
                "cylinder(h={}, d={}, $fn={});\n",
                number(*height),
                number(*diameter),
                segments
            ));
        }
        CsgNode::Frustum {
            height,
            diameter_bottom,
            diameter_top,
            segments,
        } => {
            out.push_str(&format!(
                "cylinder(h={}, d1={}, d2={}, $fn={});\n",
                number(*height),
                number(*diameter_bottom),
                number(*diameter_top),
                segments
            ));
        }
        CsgNode::Translate { offset, child } => {
            out.push_str(&format!("translate({}) ", vector(*offset)));
            emit_statement(child, depth, out);
        }
        CsgNode::Union { children } => emit_block("union", children, depth, out),
        CsgNode::Difference { children } => emit_block("difference", children, depth, out),
    }
}

fn emit_block(name: &str, children: &[CsgNode], depth: usize, out: &mut String) {
    out.push_str(name);
    out.push_str("() {\n");
    for child in children {
        emit(child, depth + 1, out);
    }
    out.push_str(&INDENT.repeat(depth));
    out.push_str("}\n");
}

fn vector(v: DVec3) -> String {
    format!("[{}, {}, {}]", number(v.x), number(v.y), number(v.z))
}

fn number(value: f64) -> String {
    format_decimal(value, SOURCE_DECIMALS)
}

// =============================================================================
// TESTS
// =============================================================================
