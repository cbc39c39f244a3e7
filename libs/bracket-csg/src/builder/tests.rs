//! # Builder Tests

use super::*;
use crate::geometry::Role;
use approx::assert_relative_eq;

fn union_children(tree: &CsgNode) -> &[CsgNode] {
    match tree {
        CsgNode::Difference { children } => match &children[0] {
            CsgNode::Union { children } => children,
            other => panic!("Expected Union, got {:?}", other),
        },
        other => panic!("Expected Difference, got {:?}", other),
    }
}

fn offset_of(node: &CsgNode) -> DVec3 {
    match node {
        CsgNode::Translate { offset, .. } => *offset,
        _ => DVec3::ZERO,
    }
}

#[test]
fn test_root_is_difference_of_union_and_eight_cuts() {
    let tree = build(&BracketParams::default());
    let CsgNode::Difference { children } = &tree else {
        panic!("Expected Difference");
    };
    assert_eq!(children.len(), 9);
    assert!(matches!(children[0], CsgNode::Union { .. }));
    assert_eq!(union_children(&tree).len(), 6);
    assert_eq!(tree.primitive_count(), 14);
}

#[test]
fn test_back_plate_spans_footprint() {
    let params = BracketParams::default();
    assert_eq!(
        back_plate(&params),
        CsgNode::cube(DVec3::new(105.0, 65.0, 3.0))
    );
}

#[test]
fn test_front_plate_sits_on_gap() {
    let params = BracketParams::default();
    let front = front_plate(&params);
    assert_eq!(offset_of(&front), DVec3::new(0.0, 0.0, 5.0));
}

#[test]
fn test_spacer_walls_form_ring() {
    let params = BracketParams::default();
    let walls = spacer_walls(&params);
    let offsets: Vec<DVec3> = walls.iter().map(offset_of).collect();
    assert_eq!(
        offsets,
        vec![
            DVec3::new(0.0, 0.0, 3.0),
            DVec3::new(0.0, 57.0, 3.0),
            DVec3::new(0.0, 0.0, 3.0),
            DVec3::new(97.0, 0.0, 3.0),
        ]
    );

    let sizes: Vec<DVec3> = walls
        .iter()
        .map(|w| match w.children()[0] {
            CsgNode::Cube { size } => size,
            _ => panic!("Expected Cube"),
        })
        .collect();
    assert_eq!(sizes[0], DVec3::new(105.0, 8.0, 2.0));
    assert_eq!(sizes[1], DVec3::new(105.0, 8.0, 2.0));
    assert_eq!(sizes[2], DVec3::new(8.0, 65.0, 2.0));
    assert_eq!(sizes[3], DVec3::new(8.0, 65.0, 2.0));
}

#[test]
fn test_holes_pierce_back_plate_with_overshoot() {
    let params = BracketParams::default();
    for hole in through_holes(&params) {
        let offset = offset_of(&hole);
        assert_relative_eq!(offset.z, -CUT_OVERSHOOT);
        match hole.children()[0] {
            CsgNode::Cylinder {
                height, diameter, ..
            } => {
                assert_relative_eq!(height, 3.0 + 2.0 * CUT_OVERSHOOT);
                assert_eq!(diameter, 4.5);
                // Cut spans past both faces of the back plate
                assert!(offset.z < 0.0);
                assert!(offset.z + height > params.back_plate_thickness);
            }
            _ => panic!("Expected Cylinder"),
        }
    }
}

#[test]
fn test_countersink_tapers_from_wall_face() {
    let params = BracketParams::default();
    for sink in countersinks(&params) {
        assert_relative_eq!(offset_of(&sink).z, -CUT_OVERSHOOT);
        match sink.children()[0] {
            CsgNode::Frustum {
                height,
                diameter_bottom,
                diameter_top,
                segments,
            } => {
                assert_relative_eq!(height, 1.5 + 2.0 * CUT_OVERSHOOT);
                assert!(diameter_bottom > 9.0);
                assert_eq!(diameter_top, 4.5);
                assert_eq!(segments, params.segments);
            }
            _ => panic!("Expected Frustum"),
        }
    }
}

/// Diameter of a placed frustum's cone at height `z` in the model frame.
fn frustum_diameter_at(node: &CsgNode, z: f64) -> f64 {
    let base = offset_of(node).z;
    match node.children()[0] {
        CsgNode::Frustum {
            height,
            diameter_bottom,
            diameter_top,
            ..
        } => diameter_bottom + (diameter_top - diameter_bottom) * (z - base) / height,
        _ => panic!("Expected Frustum"),
    }
}

#[test]
fn test_countersink_meets_wall_face_at_full_diameter() {
    let params = BracketParams::default();
    for sink in countersinks(&params) {
        assert_relative_eq!(frustum_diameter_at(&sink, 0.0), 9.0, epsilon = 1e-12);
        assert_relative_eq!(
            frustum_diameter_at(&sink, 1.5 + CUT_OVERSHOOT),
            4.5,
            epsilon = 1e-12
        );
    }
    // 9 + 4.5 * 0.1 / 1.6
    assert_relative_eq!(countersink_bottom_diameter(&params), 9.28125, epsilon = 1e-12);
}

#[test]
fn test_countersink_face_diameter_follows_params() {
    let params = BracketParams {
        countersink_diameter: 12.0,
        countersink_depth: 2.4,
        ..BracketParams::default()
    };
    for sink in countersinks(&params) {
        assert_relative_eq!(frustum_diameter_at(&sink, 0.0), 12.0, epsilon = 1e-12);
    }
}

#[test]
fn test_countersink_bottom_with_collapsed_depth() {
    let params = BracketParams {
        countersink_depth: -CUT_OVERSHOOT,
        ..BracketParams::default()
    };
    assert_eq!(countersink_bottom_diameter(&params), 9.0);
}

#[test]
fn test_overshoot_symmetric_on_every_cut() {
    let tree = build(&BracketParams::default());
    for placed in tree.placed_primitives() {
        if placed.role != Role::Subtractive {
            continue;
        }
        let (min, max) = placed.bounds();
        assert_relative_eq!(min.z, -CUT_OVERSHOOT);
        let design_top = max.z - CUT_OVERSHOOT;
        assert!((design_top - 3.0).abs() < 1e-12 || (design_top - 1.5).abs() < 1e-12);
    }
}

#[test]
fn test_subtrahend_centers_match_pattern() {
    let params = BracketParams::default();
    let tree = build(&params);
    let cuts: Vec<[f64; 2]> = tree
        .placed_primitives()
        .iter()
        .filter(|p| p.role == Role::Subtractive)
        .map(|p| p.axis_xy())
        .collect();
    let expected = [[17.5, 12.5], [87.5, 12.5], [17.5, 52.5], [87.5, 52.5]];
    assert_eq!(cuts.len(), 8);
    assert_eq!(&cuts[..4], &expected);
    assert_eq!(&cuts[4..], &expected);
}

#[test]
fn test_ribs_disabled_by_default() {
    assert!(center_ribs(&BracketParams::default()).is_empty());
}

#[test]
fn test_ribs_cross_channel_center() {
    let params = BracketParams {
        center_rib_width: Some(3.0),
        ..BracketParams::default()
    };
    let ribs = center_ribs(&params);
    assert_eq!(ribs.len(), 2);
    assert_eq!(offset_of(&ribs[0]), DVec3::new(8.0, 31.0, 3.0));
    assert_eq!(offset_of(&ribs[1]), DVec3::new(51.0, 8.0, 3.0));

    let tree = build(&params);
    assert_eq!(union_children(&tree).len(), 8);
}

#[test]
fn test_rib_grid_spacing() {
    let params = BracketParams {
        center_rib_width: Some(1.0),
        rib_divisions: 4,
        ..BracketParams::default()
    };
    let ribs = center_ribs(&params);
    assert_eq!(ribs.len(), 6);

    let offsets: Vec<DVec3> = ribs.iter().map(offset_of).collect();
    assert_eq!(
        offsets,
        vec![
            DVec3::new(8.0, 19.75, 3.0),
            DVec3::new(8.0, 32.0, 3.0),
            DVec3::new(8.0, 44.25, 3.0),
            DVec3::new(29.75, 8.0, 3.0),
            DVec3::new(52.0, 8.0, 3.0),
            DVec3::new(74.25, 8.0, 3.0),
        ]
    );

    for rib in &ribs[..3] {
        assert_eq!(rib.children()[0], CsgNode::cube(DVec3::new(89.0, 1.0, 2.0)));
    }
    for rib in &ribs[3..] {
        assert_eq!(rib.children()[0], CsgNode::cube(DVec3::new(1.0, 49.0, 2.0)));
    }

    assert_eq!(union_children(&build(&params)).len(), 12);
}

#[test]
fn test_rib_divisions_ignored_without_width() {
    let params = BracketParams {
        rib_divisions: 8,
        ..BracketParams::default()
    };
    assert!(center_ribs(&params).is_empty());
    assert_eq!(build(&params).primitive_count(), 14);
}

#[test]
fn test_bounding_box_matches_stack() {
    let (min, max) = build(&BracketParams::default()).bounding_box().unwrap();
    assert_eq!(min, DVec3::ZERO);
    assert_relative_eq!(max.x, 105.0);
    assert_relative_eq!(max.y, 65.0);
    assert_relative_eq!(max.z, 6.4);
}

#[test]
fn test_build_is_deterministic() {
    let params = BracketParams::default();
    assert_eq!(build(&params), build(&params));
}

#[test]
fn test_holes_outside_plate_still_build() {
    let params = BracketParams {
        screw_spacing_h: 105.0 * 1.1,
        ..BracketParams::default()
    };
    let tree = build(&params);
    assert_eq!(tree.primitive_count(), 14);
}
