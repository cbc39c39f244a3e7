//! # Mesh Data Structure
//!
//! Indexed triangle mesh produced by evaluating a CSG tree.

use config::constants::DEGENERATE_AREA_EPSILON;
use glam::DVec3;

use crate::error::MeshError;

/// Indexed triangle soup in millimeters.
///
/// All geometry calculations use f64. Narrowing to f32 only happens when
/// writing binary STL.
///
/// # Example
///
/// ```rust
/// use bracket_mesh::Mesh;
/// use glam::DVec3;
///
/// // Corner tetrahedron, outward windings
/// let mut solid = Mesh::new();
/// let o = solid.add_vertex(DVec3::ZERO);
/// let x = solid.add_vertex(DVec3::X);
/// let y = solid.add_vertex(DVec3::Y);
/// let z = solid.add_vertex(DVec3::Z);
/// for [a, b, c] in [[o, y, x], [o, x, z], [o, z, y], [x, y, z]] {
///     solid.add_triangle(a, b, c);
/// }
/// assert!((solid.signed_volume() - 1.0 / 6.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Triangle indices, counter-clockwise seen from outside
    triangles: Vec<[u32; 3]>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty mesh with room for the given counts.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Vertex count.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Triangle count.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Appends a position; returns the index to use in triangles.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Appends a triangle. Winding should be counter-clockwise from outside.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Corner positions of triangle `index`.
    #[inline]
    pub fn triangle_corners(&self, index: usize) -> [DVec3; 3] {
        self.triangles[index].map(|i| self.vertices[i as usize])
    }

    /// Unit normal of triangle `index` from its winding, or zero when the
    /// triangle has no area.
    pub fn triangle_normal(&self, index: usize) -> DVec3 {
        let [a, b, c] = self.triangle_corners(index);
        (b - a).cross(c - a).normalize_or_zero()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners; both zero for an empty mesh.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Enclosed volume from the divergence theorem.
    ///
    /// Positive for a closed mesh with outward-facing windings. Open or
    /// inside-out meshes give meaningless or negative values.
    pub fn signed_volume(&self) -> f64 {
        self.triangles
            .iter()
            .map(|tri| {
                let [a, b, c] = tri.map(|i| self.vertices[i as usize]);
                a.dot(b.cross(c))
            })
            .sum::<f64>()
            / 6.0
    }

    /// Moves every vertex by `offset`.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Structural sanity check.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No triangle repeats a vertex index
    /// - No zero-area triangles
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();

        for (index, tri) in self.triangles.iter().enumerate() {
            if tri.iter().any(|&i| i as usize >= vertex_count) {
                return Err(MeshError::validation(format!(
                    "triangle {index} references a missing vertex: {tri:?}"
                )));
            }

            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return Err(MeshError::validation(format!(
                    "triangle {index} repeats a vertex: {tri:?}"
                )));
            }

            let [a, b, c] = self.triangle_corners(index);
            if (b - a).cross(c - a).length() < DEGENERATE_AREA_EPSILON {
                return Err(MeshError::validation(format!(
                    "triangle {index} has zero area"
                )));
            }
        }

        Ok(())
    }
}
