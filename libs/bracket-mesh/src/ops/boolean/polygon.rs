//! # Polygon for BSP Operations
//!
//! Convex polygon with plane and splitting support.

use glam::DVec3;

use super::plane::{Classification, Plane};

// =============================================================================
// POLYGON
// =============================================================================

/// A convex polygon with its supporting plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    /// Vertices in counter-clockwise order seen from the front.
    vertices: Vec<DVec3>,
    /// Plane containing this polygon.
    plane: Plane,
}

/// Destination lists for [`Polygon::split`].
#[derive(Debug, Default)]
pub struct Partition {
    pub coplanar_front: Vec<Polygon>,
    pub coplanar_back: Vec<Polygon>,
    pub front: Vec<Polygon>,
    pub back: Vec<Polygon>,
}

impl Polygon {
    /// Create polygon from vertices.
    ///
    /// Returns `None` if the first three vertices do not span a plane.
    pub fn new(vertices: Vec<DVec3>) -> Option<Self> {
        if vertices.len() < 3 {
            return None;
        }
        let plane = Plane::from_points(vertices[0], vertices[1], vertices[2])?;
        Some(Self { vertices, plane })
    }

    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Reverses winding order and plane in place.
    pub fn flip(&mut self) {
        self.vertices.reverse();
        self.plane = self.plane.flipped();
    }

    /// Classify this polygon relative to a plane.
    pub fn classify(&self, plane: &Plane) -> Classification {
        self.vertices
            .iter()
            .map(|v| plane.classify_point(*v))
            .fold(Classification::Coplanar, Classification::combine)
    }

    /// Splits this polygon by `plane` into `out`.
    ///
    /// Coplanar polygons go to `coplanar_front` when they face the same way
    /// as `plane`, else to `coplanar_back`. Spanning polygons are cut along
    /// the plane; pieces keep this polygon's plane.
    pub fn split(self, plane: &Plane, out: &mut Partition) {
        match self.classify(plane) {
            Classification::Coplanar => {
                if self.plane.normal.dot(plane.normal) > 0.0 {
                    out.coplanar_front.push(self);
                } else {
                    out.coplanar_back.push(self);
                }
            }
            Classification::Front => out.front.push(self),
            Classification::Back => out.back.push(self),
            Classification::Spanning => {
                let (front, back) = self.cut(plane);
                out.front.extend(front);
                out.back.extend(back);
            }
        }
    }

    fn cut(&self, plane: &Plane) -> (Option<Polygon>, Option<Polygon>) {
        let n = self.vertices.len();
        let mut front_verts = Vec::with_capacity(n + 1);
        let mut back_verts = Vec::with_capacity(n + 1);

        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[(i + 1) % n];
            let ti = plane.classify_point(vi);
            let tj = plane.classify_point(vj);

            if ti != Classification::Back {
                front_verts.push(vi);
            }
            if ti != Classification::Front {
                back_verts.push(vi);
            }

            if ti.combine(tj) == Classification::Spanning {
                let di = plane.signed_distance(vi);
                let dj = plane.signed_distance(vj);
                let crossing = vi.lerp(vj, di / (di - dj));
                front_verts.push(crossing);
                back_verts.push(crossing);
            }
        }

        let piece = |vertices: Vec<DVec3>| {
            (vertices.len() >= 3).then(|| Polygon {
                vertices,
                plane: self.plane,
            })
        };
        (piece(front_verts), piece(back_verts))
    }
}

// =============================================================================
// TESTS
// =============================================================================
