//! # Reporter
//!
//! Human-readable summary derived from a [`BracketParams`]. Never feeds
//! back into the geometry.

use std::fmt;

use config::constants::{format_length, SCREW_WALL_EMBED};
use serde::Serialize;

use crate::params::BracketParams;

/// One `label: value` row of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLine {
    pub label: &'static str,
    pub value: String,
}

/// Fixed-order summary of a parameter set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    lines: Vec<ReportLine>,
}

impl Report {
    /// Rows in print order.
    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    /// Value of the row with `label`, if present.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.lines
            .iter()
            .find(|line| line.label == label)
            .map(|line| line.value.as_str())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}: {}", line.label, line.value)?;
        }
        Ok(())
    }
}

/// Builds the report for `params`.
///
/// # Example
///
/// ```rust
/// use bracket_csg::{report, BracketParams};
///
/// let summary = report(&BracketParams::default());
/// assert_eq!(summary.get("Total thickness"), Some("6.4 mm"));
/// assert_eq!(summary.get("Footprint"), Some("105 x 65 mm"));
/// ```
pub fn report(params: &BracketParams) -> Report {
    let total = params.total_thickness();
    let mm = |value: f64| format!("{} mm", format_length(value));
    let pair = |a: f64, b: f64| format!("{} x {} mm", format_length(a), format_length(b));

    let lines = vec![
        line("Footprint", pair(params.bracket_width, params.bracket_height)),
        line("Total thickness", mm(total)),
        line("Back plate", mm(params.back_plate_thickness)),
        line("Spacer gap", mm(params.spacer_gap)),
        line("Front plate", mm(params.front_plate_thickness)),
        line(
            "Screw spacing",
            pair(params.screw_spacing_h, params.screw_spacing_v),
        ),
        line("Recommended screw length", mm(total + SCREW_WALL_EMBED)),
    ];

    Report { lines }
}

fn line(label: &'static str, value: String) -> ReportLine {
    ReportLine { label, value }
}

// =============================================================================
// TESTS
// =============================================================================
