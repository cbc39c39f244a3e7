//! # Config Crate
//!
//! Centralized configuration constants for the bracket generator.
//! Every tunable number shared between the CSG builder, the mesh
//! evaluator and the CLI lives here so the crates never disagree.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{format_length, CUT_OVERSHOOT, DEFAULT_SEGMENTS};
//!
//! // A through-hole in a 3 mm plate is cut 3 mm + 2 * overshoot tall.
//! let cut_height = 3.0 + 2.0 * CUT_OVERSHOOT;
//! assert!(cut_height > 3.0);
//!
//! // Resolution defaults for tessellation
//! assert!(DEFAULT_SEGMENTS >= 3);
//!
//! // Report formatting
//! assert_eq!(format_length(3.0 + 2.0 + 1.4), "6.4");
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Millimeters**: Every length is in millimeters
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
