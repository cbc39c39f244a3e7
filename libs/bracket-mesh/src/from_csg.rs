//! # CSG to Mesh Conversion
//!
//! Folds a [`CsgNode`] tree into one triangle mesh: leaves are tessellated,
//! translations move the child mesh, booleans run on BSP trees in child
//! order.

use bracket_csg::CsgNode;
use config::constants::{MAX_TRIANGLES, MAX_VERTICES};
use tracing::debug;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::ops::boolean;
use crate::primitives::{create_cube, create_cylinder};

/// Converts a CSG tree to a mesh.
///
/// # Errors
///
/// [`MeshError::DegenerateGeometry`] for a primitive with a non-positive
/// size or too few segments, and [`MeshError::TooManyTriangles`] when an
/// intermediate result outgrows the triangle limit.
/// [`MeshError::ValidationFailed`] past the vertex limit.
///
/// # Example
///
/// ```rust
/// use bracket_csg::CsgNode;
/// use bracket_mesh::csg_to_mesh;
/// use glam::DVec3;
///
/// let node = CsgNode::cube(DVec3::splat(2.0)).translated(DVec3::X);
/// let mesh = csg_to_mesh(&node).unwrap();
/// assert_eq!(mesh.bounding_box().0, DVec3::X);
/// ```
pub fn csg_to_mesh(node: &CsgNode) -> Result<Mesh, MeshError> {
    let mesh = node_to_mesh(node)?;
    debug!(
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "evaluated CSG tree"
    );
    Ok(mesh)
}

fn node_to_mesh(node: &CsgNode) -> Result<Mesh, MeshError> {
    let mesh = match node {
        CsgNode::Cube { size } => create_cube(*size)?,

        CsgNode::Cylinder {
            height,
            diameter,
            segments,
        } => create_cylinder(*height, diameter / 2.0, diameter / 2.0, *segments)?,

        CsgNode::Frustum {
            height,
            diameter_bottom,
            diameter_top,
            segments,
        } => create_cylinder(*height, diameter_bottom / 2.0, diameter_top / 2.0, *segments)?,

        CsgNode::Translate { offset, child } => {
            let mut mesh = node_to_mesh(child)?;
            mesh.translate(*offset);
            mesh
        }

        CsgNode::Union { children } => {
            let mut result = Mesh::new();
            for child in children {
                result = boolean::union(&result, &node_to_mesh(child)?)?;
            }
            result
        }

        CsgNode::Difference { children } => {
            let Some((base, cuts)) = children.split_first() else {
                return Ok(Mesh::new());
            };
            let mut result = node_to_mesh(base)?;
            for cut in cuts {
                result = boolean::difference(&result, &node_to_mesh(cut)?)?;
            }
            result
        }
    };

    check_limits(&mesh)?;
    Ok(mesh)
}

fn check_limits(mesh: &Mesh) -> Result<(), MeshError> {
    if mesh.vertex_count() > MAX_VERTICES {
        return Err(MeshError::validation(format!(
            "mesh has {} vertices, limit is {MAX_VERTICES}",
            mesh.vertex_count()
        )));
    }
    if mesh.triangle_count() > MAX_TRIANGLES {
        return Err(MeshError::TooManyTriangles {
            count: mesh.triangle_count(),
            max: MAX_TRIANGLES,
        });
    }
    Ok(())
}
