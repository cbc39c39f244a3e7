//! # Boolean Operations
//!
//! Union and difference of closed triangle meshes, evaluated
//! on BSP trees following Evan Wallace's csg.js.
//!
//! ## Algorithm
//!
//! Each operand becomes a BSP tree. Clipping one tree against the other
//! removes the surface lying inside it; inverting a tree swaps solid and
//! empty space, which turns difference into a union of complements:
//!
//! ```text
//! A | B      clip A by B, clip B by A, drop B's faces coplanar with A
//! A - B  =  ~(~A | B)
//! ```
//!
//! Coincident faces are resolved by the BSP epsilon; callers that cut
//! through a face should extend the cutter past it.
//!
//! ## Example
//!
//! ```rust
//! use bracket_mesh::ops::boolean::difference;
//! use bracket_mesh::primitives::{create_cube, create_cylinder};
//! use glam::DVec3;
//!
//! let plate = create_cube(DVec3::new(10.0, 10.0, 3.0)).unwrap();
//! let mut hole = create_cylinder(3.2, 2.0, 2.0, 16).unwrap();
//! hole.translate(DVec3::new(5.0, 5.0, -0.1));
//! let result = difference(&plate, &hole).unwrap();
//! assert!(result.signed_volume() < 300.0);
//! ```

mod bsp;
mod plane;
mod polygon;

use config::constants::MAX_TRIANGLES;
use tracing::trace;

use crate::error::MeshError;
use crate::Mesh;
use bsp::BspNode;
use polygon::Polygon;

// =============================================================================
// OPERATIONS
// =============================================================================

/// Solid covered by either mesh.
pub fn union(a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
    if a.is_empty() {
        return Ok(b.clone());
    }
    if b.is_empty() {
        return Ok(a.clone());
    }

    let mut bsp_a = BspNode::new(mesh_to_polygons(a));
    let mut bsp_b = BspNode::new(mesh_to_polygons(b));

    // Remove each operand's surface inside the other, then drop B's copy
    // of faces coplanar with A
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();

    let mut result = bsp_a.into_polygons();
    result.extend(bsp_b.into_polygons());

    finish("union", result)
}

/// Solid of `a` outside `b`. Used for every hole and countersink cut.
pub fn difference(a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
    if a.is_empty() {
        return Ok(Mesh::new());
    }
    if b.is_empty() {
        return Ok(a.clone());
    }

    let mut bsp_a = BspNode::new(mesh_to_polygons(a));
    let mut bsp_b = BspNode::new(mesh_to_polygons(b));

    // A - B = ~(~A | B)
    bsp_a.invert();
    bsp_a.clip_to(&bsp_b);
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_b.clip_to(&bsp_a);
    bsp_b.invert();
    bsp_a.build(bsp_b.into_polygons());
    bsp_a.invert();

    finish("difference", bsp_a.into_polygons())
}

// =============================================================================
// MESH <-> POLYGONS
// =============================================================================

/// One polygon per triangle with a usable plane.
fn mesh_to_polygons(mesh: &Mesh) -> Vec<Polygon> {
    (0..mesh.triangle_count())
        .filter_map(|i| Polygon::new(mesh.triangle_corners(i).to_vec()))
        .collect()
}

/// Fan-triangulates convex polygons back into a mesh.
fn polygons_to_mesh(polygons: &[Polygon]) -> Mesh {
    let vertex_count = polygons.iter().map(|p| p.vertices().len()).sum();
    let mut mesh = Mesh::with_capacity(vertex_count, vertex_count);

    for poly in polygons {
        let vertices = poly.vertices();
        let base = mesh.vertex_count() as u32;
        for v in vertices {
            mesh.add_vertex(*v);
        }
        for i in 1..(vertices.len() as u32 - 1) {
            mesh.add_triangle(base, base + i, base + i + 1);
        }
    }

    mesh
}

fn finish(operation: &str, polygons: Vec<Polygon>) -> Result<Mesh, MeshError> {
    let mesh = polygons_to_mesh(&polygons);
    if mesh.triangle_count() > MAX_TRIANGLES {
        return Err(MeshError::TooManyTriangles {
            count: mesh.triangle_count(),
            max: MAX_TRIANGLES,
        });
    }
    trace!(
        operation,
        polygons = polygons.len(),
        triangles = mesh.triangle_count(),
        "boolean complete"
    );
    Ok(mesh)
}
