//! # Cube Primitive
//!
//! Generates mesh for rectangular prisms.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Creates a rectangular prism with one corner at the origin.
///
/// # Arguments
///
/// * `size` - Dimensions [x, y, z], all strictly positive
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face).
///
/// # Example
///
/// ```rust
/// use bracket_mesh::primitives::create_cube;
/// use glam::DVec3;
///
/// let mesh = create_cube(DVec3::new(105.0, 65.0, 3.0)).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_cube(size: DVec3) -> Result<Mesh, MeshError> {
    if !size.cmpgt(DVec3::ZERO).all() {
        return Err(MeshError::degenerate(format!(
            "Cube size must be positive: {:?}",
            size.to_array()
        )));
    }

    let mut mesh = Mesh::with_capacity(8, 12);
    let (min, max) = (DVec3::ZERO, size);

    // Bottom face (z = min.z)
    let v0 = mesh.add_vertex(DVec3::new(min.x, min.y, min.z));
    let v1 = mesh.add_vertex(DVec3::new(max.x, min.y, min.z));
    let v2 = mesh.add_vertex(DVec3::new(max.x, max.y, min.z));
    let v3 = mesh.add_vertex(DVec3::new(min.x, max.y, min.z));

    // Top face (z = max.z)
    let v4 = mesh.add_vertex(DVec3::new(min.x, min.y, max.z));
    let v5 = mesh.add_vertex(DVec3::new(max.x, min.y, max.z));
    let v6 = mesh.add_vertex(DVec3::new(max.x, max.y, max.z));
    let v7 = mesh.add_vertex(DVec3::new(min.x, max.y, max.z));

    // Counter-clockwise seen from outside
    let faces = [
        [v0, v2, v1],
        [v0, v3, v2], // bottom
        [v4, v5, v6],
        [v4, v6, v7], // top
        [v0, v1, v5],
        [v0, v5, v4], // front (y = 0)
        [v2, v3, v7],
        [v2, v7, v6], // back
        [v3, v0, v4],
        [v3, v4, v7], // left (x = 0)
        [v1, v2, v6],
        [v1, v6, v5], // right
    ];
    for [a, b, c] in faces {
        mesh.add_triangle(a, b, c);
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_cube_counts() {
        let mesh = create_cube(DVec3::splat(10.0)).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(mesh.triangle_count(), 12);
    }

    #[test]
    fn test_cube_corner_at_origin() {
        let mesh = create_cube(DVec3::new(10.0, 20.0, 30.0)).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::ZERO);
        assert_eq!(max, DVec3::new(10.0, 20.0, 30.0));
    }

    #[test]
    fn test_cube_volume_and_orientation() {
        let mesh = create_cube(DVec3::new(105.0, 65.0, 3.0)).unwrap();
        assert_relative_eq!(mesh.signed_volume(), 20475.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cube_validates() {
        assert!(create_cube(DVec3::splat(10.0)).unwrap().validate().is_ok());
    }

    #[test]
    fn test_cube_zero_size() {
        let result = create_cube(DVec3::new(0.0, 10.0, 10.0));
        assert!(matches!(result, Err(MeshError::DegenerateGeometry { .. })));
    }

    #[test]
    fn test_cube_negative_size() {
        assert!(create_cube(DVec3::new(-5.0, 10.0, 10.0)).is_err());
    }

    #[test]
    fn test_cube_nan_size() {
        assert!(create_cube(DVec3::new(f64::NAN, 1.0, 1.0)).is_err());
    }
}
