//! # Bracket Mesh
//!
//! Reference evaluator for the bracket CSG tree.
//! Converts a [`bracket_csg::CsgNode`] into a triangle mesh and writes it as STL.
//!
//! ## Architecture
//!
//! ```text
//! bracket-csg (CsgNode) → bracket-mesh (Mesh) → STL
//! ```
//!
//! ## Algorithms
//!
//! Pure Rust, no native dependencies:
//! - **Boolean Operations**: BSP trees (csg.js algorithm)
//! - **Primitives**: axis-aligned boxes and faceted frustums
//!
//! ## Usage
//!
//! ```rust
//! use bracket_csg::BracketParams;
//! use bracket_mesh::render;
//!
//! let params = BracketParams::default().with("segments", 8.0).unwrap();
//! let mesh = render(&params).unwrap();
//! assert!(mesh.triangle_count() > 0);
//! ```

pub mod error;
pub mod from_csg;
pub mod mesh;
pub mod ops;
pub mod primitives;
pub mod stl;

pub use error::MeshError;
pub use from_csg::csg_to_mesh;
pub use mesh::Mesh;
pub use ops::boolean::{difference, union};
pub use stl::{save_stl, write_ascii, write_binary, StlFormat};

use bracket_csg::{build, BracketParams};
use tracing::info;

/// Builds the bracket for `params` and evaluates it to a mesh.
///
/// # Errors
///
/// [`MeshError::DegenerateGeometry`] when a dimension collapses a solid
/// (for example a zero `spacer_gap`), and [`MeshError::TooManyTriangles`]
/// for extreme `segments` values.
pub fn render(params: &BracketParams) -> Result<Mesh, MeshError> {
    let tree = build(params);
    let mesh = csg_to_mesh(&tree)?;
    info!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        segments = params.segments,
        "rendered bracket"
    );
    Ok(mesh)
}
