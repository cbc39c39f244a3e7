//! # Bracket CSG
//!
//! Parametric CSG model of a two-plate "sandwich" wall-mount bracket.
//!
//! ## Architecture
//!
//! ```text
//! BracketParams → build() → CsgNode → bracket-mesh (Mesh / STL)
//!       │                      └────→ scad (OpenSCAD source)
//!       └──────→ report() / check()
//! ```
//!
//! Everything here is pure: the tree is an immutable value and the same
//! parameters always give a structurally equal tree.
//!
//! ## Example
//!
//! ```rust
//! use bracket_csg::{build, report, BracketParams};
//!
//! let params = BracketParams::default();
//! let tree = build(&params);
//! assert_eq!(tree.primitive_count(), 14);
//! assert_eq!(report(&params).get("Total thickness"), Some("6.4 mm"));
//! ```

pub mod builder;
pub mod check;
pub mod error;
pub mod geometry;
pub mod params;
pub mod report;
pub mod scad;

// Re-export public API
pub use builder::build;
pub use check::{check, ParamWarning};
pub use error::ParamsError;
pub use geometry::{CsgNode, PlacedPrimitive, Role};
pub use params::{parse_assignment, BracketParams, PARAMETER_NAMES};
pub use report::{report, Report, ReportLine};
pub use scad::{bracket_scad, to_openscad};
