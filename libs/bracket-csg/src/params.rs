//! # Parameter Set
//!
//! Named dimensional inputs of the bracket. All lengths are millimeters.
//!
//! A [`BracketParams`] value is built once (defaults, a flat table of
//! overrides, or JSON) and then only read. Nothing here range-checks the
//! lengths: out-of-range combinations are surfaced by [`crate::check`]
//! and otherwise flow into the geometry unchanged.

use std::collections::BTreeMap;

use config::constants::{
    DEFAULT_RIB_DIVISIONS, DEFAULT_SEGMENTS, MAX_RIB_DIVISIONS, MIN_RIB_DIVISIONS, MIN_SEGMENTS,
};
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::ParamsError;

/// Every name accepted by [`BracketParams::from_table`], in declaration order.
pub const PARAMETER_NAMES: &[&str] = &[
    "bracket_width",
    "bracket_height",
    "front_plate_thickness",
    "back_plate_thickness",
    "spacer_gap",
    "spacer_wall",
    "screw_hole_diameter",
    "screw_spacing_h",
    "screw_spacing_v",
    "countersink_depth",
    "countersink_diameter",
    "segments",
    "center_rib_width",
    "rib_divisions",
];

/// Dimensions of the sandwich bracket.
///
/// The bracket is a wall-facing back plate and a clip-facing front plate
/// held apart by a ring of four spacer walls, forming an open channel. Four
/// countersunk screw holes in a rectangle centered on the plate fix it to
/// the wall.
///
/// # Example
///
/// ```rust
/// use bracket_csg::BracketParams;
///
/// let params = BracketParams::default();
/// assert_eq!(params.total_thickness(), 6.4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BracketParams {
    /// Outer width of both plates (x).
    pub bracket_width: f64,
    /// Outer height of both plates (y).
    pub bracket_height: f64,
    /// Thickness of the plate that slides under the external clips.
    pub front_plate_thickness: f64,
    /// Thickness of the wall-facing plate.
    pub back_plate_thickness: f64,
    /// Distance between the plates; depth of the clip channel.
    pub spacer_gap: f64,
    /// Width of each of the four perimeter spacer walls.
    pub spacer_wall: f64,
    /// Diameter of the screw through-holes.
    pub screw_hole_diameter: f64,
    /// Horizontal center-to-center hole spacing.
    pub screw_spacing_h: f64,
    /// Vertical center-to-center hole spacing.
    pub screw_spacing_v: f64,
    /// Depth of the countersink recess measured from the wall face.
    pub countersink_depth: f64,
    /// Diameter of the countersink at the wall face.
    pub countersink_diameter: f64,
    /// Facets used to approximate each circle (`$fn`).
    pub segments: u32,
    /// Width of the optional channel ribs; `None` leaves the channel open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center_rib_width: Option<f64>,
    /// Cells the rib grid splits each channel axis into, giving
    /// `rib_divisions - 1` evenly spaced ribs per axis.
    pub rib_divisions: u32,
}

impl Default for BracketParams {
    fn default() -> Self {
        Self {
            bracket_width: 105.0,
            bracket_height: 65.0,
            front_plate_thickness: 1.4,
            back_plate_thickness: 3.0,
            spacer_gap: 2.0,
            spacer_wall: 8.0,
            screw_hole_diameter: 4.5,
            screw_spacing_h: 70.0,
            screw_spacing_v: 40.0,
            countersink_depth: 1.5,
            countersink_diameter: 9.0,
            segments: DEFAULT_SEGMENTS,
            center_rib_width: None,
            rib_divisions: DEFAULT_RIB_DIVISIONS,
        }
    }
}

impl BracketParams {
    /// Builds a parameter set from defaults overridden by a flat table.
    ///
    /// `center_rib_width` is enabled by a positive value and disabled by
    /// zero or less. Lengths are not range-checked.
    ///
    /// # Errors
    ///
    /// Unknown names, non-finite values, a `segments` value that is not
    /// a whole number of at least [`MIN_SEGMENTS`], and `rib_divisions`
    /// outside [`MIN_RIB_DIVISIONS`]..=[`MAX_RIB_DIVISIONS`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use bracket_csg::BracketParams;
    ///
    /// let table = BTreeMap::from([("spacer_gap".to_string(), 2.5)]);
    /// let params = BracketParams::from_table(&table).unwrap();
    /// assert_eq!(params.spacer_gap, 2.5);
    /// assert_eq!(params.bracket_width, 105.0);
    /// ```
    pub fn from_table(table: &BTreeMap<String, f64>) -> Result<Self, ParamsError> {
        let mut params = Self::default();
        for (name, value) in table {
            params.set(name, *value)?;
        }
        Ok(params)
    }

    /// Parses the JSON form. Missing fields keep their defaults.
    ///
    /// Values go through the same rules as [`BracketParams::from_table`]:
    /// a `center_rib_width` of zero or less disables the ribs.
    ///
    /// # Errors
    ///
    /// Malformed JSON, unknown fields, `segments` below [`MIN_SEGMENTS`]
    /// and `rib_divisions` outside [`MIN_RIB_DIVISIONS`]..=[`MAX_RIB_DIVISIONS`].
    pub fn from_json(source: &str) -> Result<Self, ParamsError> {
        let params: Self = serde_json::from_str(source)?;
        params.normalized()
    }

    /// Returns a copy with one named value replaced.
    ///
    /// # Errors
    ///
    /// Same conditions as [`BracketParams::from_table`].
    pub fn with(&self, name: &str, value: f64) -> Result<Self, ParamsError> {
        let mut params = self.clone();
        params.set(name, value)?;
        Ok(params)
    }

    /// Looks up a value by name. Disabled optional features read as `0.0`.
    pub fn get(&self, name: &str) -> Option<f64> {
        let value = match name {
            "bracket_width" => self.bracket_width,
            "bracket_height" => self.bracket_height,
            "front_plate_thickness" => self.front_plate_thickness,
            "back_plate_thickness" => self.back_plate_thickness,
            "spacer_gap" => self.spacer_gap,
            "spacer_wall" => self.spacer_wall,
            "screw_hole_diameter" => self.screw_hole_diameter,
            "screw_spacing_h" => self.screw_spacing_h,
            "screw_spacing_v" => self.screw_spacing_v,
            "countersink_depth" => self.countersink_depth,
            "countersink_diameter" => self.countersink_diameter,
            "segments" => f64::from(self.segments),
            "center_rib_width" => self.center_rib_width.unwrap_or(0.0),
            "rib_divisions" => f64::from(self.rib_divisions),
            _ => return None,
        };
        Some(value)
    }

    fn normalized(mut self) -> Result<Self, ParamsError> {
        if self.segments < MIN_SEGMENTS {
            return Err(ParamsError::InvalidSegments {
                value: f64::from(self.segments),
                min: MIN_SEGMENTS,
            });
        }
        if !(MIN_RIB_DIVISIONS..=MAX_RIB_DIVISIONS).contains(&self.rib_divisions) {
            return Err(ParamsError::InvalidRibDivisions {
                value: f64::from(self.rib_divisions),
                min: MIN_RIB_DIVISIONS,
                max: MAX_RIB_DIVISIONS,
            });
        }
        self.center_rib_width = self.center_rib_width.filter(|width| *width > 0.0);
        Ok(self)
    }

    fn set(&mut self, name: &str, value: f64) -> Result<(), ParamsError> {
        if !value.is_finite() {
            return Err(ParamsError::non_finite(name, value));
        }

        let slot = match name {
            "bracket_width" => &mut self.bracket_width,
            "bracket_height" => &mut self.bracket_height,
            "front_plate_thickness" => &mut self.front_plate_thickness,
            "back_plate_thickness" => &mut self.back_plate_thickness,
            "spacer_gap" => &mut self.spacer_gap,
            "spacer_wall" => &mut self.spacer_wall,
            "screw_hole_diameter" => &mut self.screw_hole_diameter,
            "screw_spacing_h" => &mut self.screw_spacing_h,
            "screw_spacing_v" => &mut self.screw_spacing_v,
            "countersink_depth" => &mut self.countersink_depth,
            "countersink_diameter" => &mut self.countersink_diameter,
            "segments" => {
                if !is_count(value, MIN_SEGMENTS, u32::MAX) {
                    return Err(ParamsError::InvalidSegments {
                        value,
                        min: MIN_SEGMENTS,
                    });
                }
                self.segments = value as u32;
                return Ok(());
            }
            "rib_divisions" => {
                if !is_count(value, MIN_RIB_DIVISIONS, MAX_RIB_DIVISIONS) {
                    return Err(ParamsError::InvalidRibDivisions {
                        value,
                        min: MIN_RIB_DIVISIONS,
                        max: MAX_RIB_DIVISIONS,
                    });
                }
                self.rib_divisions = value as u32;
                return Ok(());
            }
            "center_rib_width" => {
                self.center_rib_width = (value > 0.0).then_some(value);
                return Ok(());
            }
            _ => return Err(ParamsError::UnknownParameter(name.to_string())),
        };
        *slot = value;
        Ok(())
    }

    /// Back plate + spacer gap + front plate.
    pub fn total_thickness(&self) -> f64 {
        self.back_plate_thickness + self.spacer_gap + self.front_plate_thickness
    }

    /// Height of the underside of the front plate (top of the channel).
    pub fn front_plate_z(&self) -> f64 {
        self.back_plate_thickness + self.spacer_gap
    }

    /// Center of the plate footprint.
    pub fn plate_center(&self) -> DVec2 {
        DVec2::new(self.bracket_width / 2.0, self.bracket_height / 2.0)
    }

    /// Rib centerlines splitting the channel inside the spacer walls into
    /// `rib_divisions` equal cells per axis.
    ///
    /// Returns the x of each vertical rib and the y of each horizontal rib.
    /// With the default two divisions both lists hold the plate center.
    pub fn rib_centerlines(&self) -> (Vec<f64>, Vec<f64>) {
        let wall = self.spacer_wall;
        let cells = f64::from(self.rib_divisions);
        let split = |span: f64| -> Vec<f64> {
            (1..self.rib_divisions)
                .map(|i| wall + span * f64::from(i) / cells)
                .collect()
        };
        (
            split(self.bracket_width - 2.0 * wall),
            split(self.bracket_height - 2.0 * wall),
        )
    }

    /// Screw hole centers relative to the plate's lower-left corner.
    ///
    /// Order: bottom-left, bottom-right, top-left, top-right.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bracket_csg::BracketParams;
    /// use glam::DVec2;
    ///
    /// let centers = BracketParams::default().hole_centers();
    /// assert_eq!(centers[0], DVec2::new(17.5, 12.5));
    /// assert_eq!(centers[3], DVec2::new(87.5, 52.5));
    /// ```
    pub fn hole_centers(&self) -> [DVec2; 4] {
        let center = self.plate_center();
        let half = DVec2::new(self.screw_spacing_h / 2.0, self.screw_spacing_v / 2.0);
        [
            DVec2::new(center.x - half.x, center.y - half.y),
            DVec2::new(center.x + half.x, center.y - half.y),
            DVec2::new(center.x - half.x, center.y + half.y),
            DVec2::new(center.x + half.x, center.y + half.y),
        ]
    }
}

/// Parses a single `name=value` override.
///
/// # Example
///
/// ```rust
/// use bracket_csg::params::parse_assignment;
///
/// let (name, value) = parse_assignment("spacer_gap=2.5").unwrap();
/// assert_eq!(name, "spacer_gap");
/// assert_eq!(value, 2.5);
/// ```
pub fn parse_assignment(text: &str) -> Result<(String, f64), ParamsError> {
    let malformed = || ParamsError::MalformedAssignment(text.to_string());
    let (name, value) = text.split_once('=').ok_or_else(malformed)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(malformed());
    }
    let value: f64 = value.trim().parse().map_err(|_| malformed())?;
    Ok((name.to_string(), value))
}

fn is_count(value: f64, min: u32, max: u32) -> bool {
    value.fract() == 0.0 && value >= f64::from(min) && value <= f64::from(max)
}

// =============================================================================
// TESTS
// =============================================================================
