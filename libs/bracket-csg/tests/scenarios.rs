use std::collections::BTreeMap;

use bracket_csg::{build, check, report, BracketParams, CsgNode, ParamWarning, Role};
use glam::DVec2;

fn defaults_from_table() -> BracketParams {
    let table: BTreeMap<String, f64> = [
        ("bracket_width", 105.0),
        ("bracket_height", 65.0),
        ("back_plate_thickness", 3.0),
        ("spacer_gap", 2.0),
        ("front_plate_thickness", 1.4),
        ("spacer_wall", 8.0),
        ("screw_hole_diameter", 4.5),
        ("screw_spacing_h", 70.0),
        ("screw_spacing_v", 40.0),
        ("countersink_depth", 1.5),
        ("countersink_diameter", 9.0),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value))
    .collect();
    BracketParams::from_table(&table).unwrap()
}

#[test]
fn default_scenario_report_and_holes() {
    let params = defaults_from_table();
    assert_eq!(params, BracketParams::default());

    let summary = report(&params);
    assert_eq!(summary.get("Total thickness"), Some("6.4 mm"));
    assert_eq!(summary.get("Footprint"), Some("105 x 65 mm"));
    assert_eq!(summary.get("Screw spacing"), Some("70 x 40 mm"));

    assert_eq!(
        params.hole_centers(),
        [
            DVec2::new(17.5, 12.5),
            DVec2::new(87.5, 12.5),
            DVec2::new(17.5, 52.5),
            DVec2::new(87.5, 52.5),
        ]
    );
}

#[test]
fn default_tree_shape() {
    let tree = build(&BracketParams::default());
    let placed = tree.placed_primitives();
    let additive = placed.iter().filter(|p| p.role == Role::Additive).count();
    let subtractive = placed.iter().filter(|p| p.role == Role::Subtractive).count();
    assert_eq!(additive, 6);
    assert_eq!(subtractive, 8);

    let cylinders = placed
        .iter()
        .filter(|p| matches!(p.primitive, CsgNode::Cylinder { .. }))
        .count();
    let frustums = placed
        .iter()
        .filter(|p| matches!(p.primitive, CsgNode::Frustum { .. }))
        .count();
    assert_eq!(cylinders, 4);
    assert_eq!(frustums, 4);
}

#[test]
fn spacing_beyond_width_still_builds() {
    let params = BracketParams::default()
        .with("screw_spacing_h", 105.0 * 1.1)
        .unwrap();
    let tree = build(&params);

    let cuts: Vec<[f64; 2]> = tree
        .placed_primitives()
        .iter()
        .filter(|p| p.role == Role::Subtractive)
        .map(|p| p.axis_xy())
        .collect();
    assert_eq!(cuts.len(), 8);
    assert!(cuts.iter().all(|c| c[0] < 0.0 || c[0] > 105.0));

    let outside = check(&params)
        .into_iter()
        .filter(|w| matches!(w, ParamWarning::HoleOutsidePlate { .. }))
        .count();
    assert_eq!(outside, 4);
}

#[test]
fn reporter_leaves_inputs_untouched() {
    let params = BracketParams::default();
    let snapshot = params.clone();
    let tree = build(&params);
    let tree_snapshot = tree.clone();

    let first = report(&params);
    let second = report(&params);

    assert_eq!(first, second);
    assert_eq!(params, snapshot);
    assert_eq!(tree, tree_snapshot);
    assert_eq!(build(&params), tree);
}

#[test]
fn json_params_drive_the_build() {
    let params = BracketParams::from_json(r#"{"bracket_width": 120, "segments": 64}"#).unwrap();
    let (_, max) = build(&params).bounding_box().unwrap();
    assert_eq!(max.x, 120.0);
    assert_eq!(report(&params).get("Footprint"), Some("120 x 65 mm"));
}
