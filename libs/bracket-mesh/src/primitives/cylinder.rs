//! # Cylinder Primitive
//!
//! Generates mesh for cylinder, frustum and cone shapes standing on z = 0.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::{MAX_TRIANGLES, MAX_VERTICES, MIN_SEGMENTS};
use glam::DVec3;
use std::f64::consts::TAU;

/// Creates a cylinder, frustum or cone mesh.
///
/// # Arguments
///
/// * `height` - Height along Z axis
/// * `radius_bottom` - Radius at z = 0
/// * `radius_top` - Radius at z = height
/// * `segments` - Number of segments around circumference
///
/// # Returns
///
/// A closed mesh; a zero radius collapses that end to an apex vertex.
///
/// # Example
///
/// ```rust
/// use bracket_mesh::primitives::create_cylinder;
///
/// // Through-hole
/// let hole = create_cylinder(3.2, 2.25, 2.25, 32).unwrap();
///
/// // Countersink frustum
/// let sink = create_cylinder(1.7, 4.5, 2.25, 32).unwrap();
/// assert_eq!(sink.vertex_count(), 64);
/// ```
pub fn create_cylinder(
    height: f64,
    radius_bottom: f64,
    radius_top: f64,
    segments: u32,
) -> Result<Mesh, MeshError> {
    if !(height > 0.0) {
        return Err(MeshError::degenerate(format!(
            "Cylinder height must be positive: {}",
            height
        )));
    }

    if !(radius_bottom >= 0.0 && radius_top >= 0.0) {
        return Err(MeshError::degenerate(format!(
            "Cylinder radii must be non-negative: r1={}, r2={}",
            radius_bottom, radius_top
        )));
    }

    if radius_bottom == 0.0 && radius_top == 0.0 {
        return Err(MeshError::degenerate(
            "Cylinder must have at least one non-zero radius",
        ));
    }

    if segments < MIN_SEGMENTS {
        return Err(MeshError::degenerate(format!(
            "Cylinder segments must be at least {}: {}",
            MIN_SEGMENTS, segments
        )));
    }

    // Two rings, and at most 2n side plus 2(n - 2) cap triangles
    let n = segments as usize;
    let (vertices, triangles) = (n.saturating_mul(2), n.saturating_mul(4));
    if triangles > MAX_TRIANGLES || vertices > MAX_VERTICES {
        return Err(MeshError::TooManyTriangles {
            count: triangles,
            max: MAX_TRIANGLES,
        });
    }

    let mut mesh = Mesh::with_capacity(2 * n, 4 * n);
    let bottom = ring(&mut mesh, radius_bottom, 0.0, segments);
    let top = ring(&mut mesh, radius_top, height, segments);

    // Side faces
    for j in 0..n {
        let k = (j + 1) % n;
        match (bottom.len(), top.len()) {
            (1, _) => mesh.add_triangle(bottom[0], top[k], top[j]),
            (_, 1) => mesh.add_triangle(bottom[j], bottom[k], top[0]),
            _ => {
                mesh.add_triangle(bottom[j], bottom[k], top[k]);
                mesh.add_triangle(bottom[j], top[k], top[j]);
            }
        }
    }

    // Caps (fan), skipped at an apex
    if bottom.len() > 1 {
        for j in 1..n - 1 {
            mesh.add_triangle(bottom[0], bottom[j + 1], bottom[j]);
        }
    }
    if top.len() > 1 {
        for j in 1..n - 1 {
            mesh.add_triangle(top[0], top[j], top[j + 1]);
        }
    }

    Ok(mesh)
}

/// Adds one ring of vertices at height `z`, or a single apex when
/// `radius` is zero.
fn ring(mesh: &mut Mesh, radius: f64, z: f64, segments: u32) -> Vec<u32> {
    if radius == 0.0 {
        return vec![mesh.add_vertex(DVec3::new(0.0, 0.0, z))];
    }
    (0..segments)
        .map(|j| {
            let theta = TAU * j as f64 / segments as f64;
            mesh.add_vertex(DVec3::new(radius * theta.cos(), radius * theta.sin(), z))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    /// Exact volume of a frustum over regular n-gons.
    fn polygon_frustum_volume(height: f64, r1: f64, r2: f64, n: u32) -> f64 {
        let k = n as f64 / 2.0 * (TAU / n as f64).sin();
        height / 3.0 * k * (r1 * r1 + r1 * r2 + r2 * r2)
    }

    #[test]
    fn test_cylinder_basic() {
        let mesh = create_cylinder(10.0, 5.0, 5.0, 32).unwrap();
        assert_eq!(mesh.vertex_count(), 64);
        assert_eq!(mesh.triangle_count(), 64 + 2 * 30);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_cylinder_stands_on_xy_plane() {
        let mesh = create_cylinder(10.0, 5.0, 5.0, 32).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(min.z, 0.0);
        assert_relative_eq!(max.z, 10.0);
        assert_relative_eq!(max.x, 5.0);
    }

    #[test]
    fn test_cylinder_volume() {
        let mesh = create_cylinder(3.2, 2.25, 2.25, 32).unwrap();
        assert_relative_eq!(
            mesh.signed_volume(),
            polygon_frustum_volume(3.2, 2.25, 2.25, 32),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_frustum_volume() {
        let mesh = create_cylinder(1.7, 4.5, 2.25, 32).unwrap();
        assert_relative_eq!(
            mesh.signed_volume(),
            polygon_frustum_volume(1.7, 4.5, 2.25, 32),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_cone() {
        let mesh = create_cylinder(10.0, 5.0, 0.0, 32).unwrap();
        assert_eq!(mesh.vertex_count(), 33);
        assert!(mesh.validate().is_ok());
        assert!(mesh.signed_volume() > 0.0);
    }

    #[test]
    fn test_inverted_cone() {
        let mesh = create_cylinder(10.0, 0.0, 5.0, 32).unwrap();
        assert!(mesh.validate().is_ok());
        assert!(mesh.signed_volume() > 0.0);
    }

    #[test]
    fn test_cylinder_invalid_height() {
        assert!(create_cylinder(0.0, 5.0, 5.0, 32).is_err());
        assert!(create_cylinder(f64::NAN, 5.0, 5.0, 32).is_err());
    }

    #[test]
    fn test_cylinder_both_radii_zero() {
        assert!(create_cylinder(10.0, 0.0, 0.0, 32).is_err());
    }

    #[test]
    fn test_cylinder_too_few_segments() {
        assert!(create_cylinder(10.0, 5.0, 5.0, 2).is_err());
    }

    #[test]
    fn test_cylinder_segments_over_limit() {
        assert!(matches!(
            create_cylinder(1.0, 1.0, 1.0, u32::MAX),
            Err(MeshError::TooManyTriangles { max: MAX_TRIANGLES, .. })
        ));
    }

    #[test]
    fn test_cylinder_segments_at_limit_boundary() {
        let first_rejected = (MAX_TRIANGLES / 4 + 1) as u32;
        assert!(matches!(
            create_cylinder(1.0, 1.0, 1.0, first_rejected),
            Err(MeshError::TooManyTriangles { .. })
        ));
    }
}
