//! # CSG Tree
//!
//! Immutable constructive-solid-geometry expression tree.
//!
//! Primitives are defined in a local frame: a cube has one corner at the
//! origin and extends along +x, +y, +z; cylinders and frustums stand on the
//! xy-plane centered on the z axis. [`CsgNode::Translate`] positions a
//! subtree. Nothing here evaluates geometry; a kernel consumes the tree.

use glam::DVec3;
use serde::{Deserialize, Serialize};

// =============================================================================
// CSG NODE
// =============================================================================

/// A node in the CSG tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CsgNode {
    // =========================================================================
    // PRIMITIVES
    // =========================================================================

    /// Axis-aligned box with its minimum corner at the local origin.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cube([x, y, z]);
    /// ```
    Cube {
        /// Size as [x, y, z].
        size: DVec3,
    },

    /// Right circular cylinder standing on z = 0.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cylinder(h=10, d=5, $fn=32);
    /// ```
    Cylinder {
        /// Height along z.
        height: f64,
        /// Diameter.
        diameter: f64,
        /// Facets approximating the circle.
        segments: u32,
    },

    /// Truncated cone standing on z = 0.
    ///
    /// ## OpenSCAD Equivalent
    ///
    /// ```text
    /// cylinder(h=2, d1=9, d2=4.5, $fn=32);
    /// ```
    Frustum {
        /// Height along z.
        height: f64,
        /// Diameter at z = 0.
        diameter_bottom: f64,
        /// Diameter at z = height.
        diameter_top: f64,
        /// Facets approximating the circles.
        segments: u32,
    },

    // =========================================================================
    // TRANSFORMS
    // =========================================================================

    /// Rigid translation of a subtree.
    Translate {
        /// Translation vector [x, y, z].
        offset: DVec3,
        /// Child geometry.
        child: Box<CsgNode>,
    },

    // =========================================================================
    // BOOLEAN OPERATIONS
    // =========================================================================

    /// Union of children (order-independent).
    Union {
        /// Child geometries.
        children: Vec<CsgNode>,
    },

    /// First child minus every later child.
    Difference {
        /// Child geometries; index 0 is the base.
        children: Vec<CsgNode>,
    },
}

impl CsgNode {
    /// Box primitive.
    pub fn cube(size: DVec3) -> Self {
        Self::Cube { size }
    }

    /// Cylinder primitive.
    pub fn cylinder(height: f64, diameter: f64, segments: u32) -> Self {
        Self::Cylinder {
            height,
            diameter,
            segments,
        }
    }

    /// Frustum primitive.
    pub fn frustum(height: f64, diameter_bottom: f64, diameter_top: f64, segments: u32) -> Self {
        Self::Frustum {
            height,
            diameter_bottom,
            diameter_top,
            segments,
        }
    }

    /// Union node.
    pub fn union(children: Vec<CsgNode>) -> Self {
        Self::Union { children }
    }

    /// Difference node.
    pub fn difference(children: Vec<CsgNode>) -> Self {
        Self::Difference { children }
    }

    /// Wraps `self` in a translation.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bracket_csg::CsgNode;
    /// use glam::DVec3;
    ///
    /// let plate = CsgNode::cube(DVec3::new(10.0, 5.0, 1.0)).translated(DVec3::Z);
    /// assert!(matches!(plate, CsgNode::Translate { .. }));
    /// ```
    pub fn translated(self, offset: DVec3) -> Self {
        Self::Translate {
            offset,
            child: Box::new(self),
        }
    }

    /// Check if this is a leaf primitive.
    pub fn is_primitive(&self) -> bool {
        matches!(
            self,
            Self::Cube { .. } | Self::Cylinder { .. } | Self::Frustum { .. }
        )
    }

    /// Direct children of this node.
    pub fn children(&self) -> &[CsgNode] {
        match self {
            Self::Translate { child, .. } => std::slice::from_ref(child.as_ref()),
            Self::Union { children } | Self::Difference { children } => children,
            _ => &[],
        }
    }

    /// Number of leaf primitives in the subtree.
    pub fn primitive_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            if node.is_primitive() {
                count += 1;
            }
            stack.extend(node.children());
        }
        count
    }

    /// Flattens the tree into its primitives with accumulated translations.
    ///
    /// Primitives are returned in depth-first, left-to-right order.
    pub fn placed_primitives(&self) -> Vec<PlacedPrimitive<'_>> {
        let mut result = Vec::new();
        // (node, accumulated offset, inside a subtrahend)
        let mut stack: Vec<(&CsgNode, DVec3, bool)> = vec![(self, DVec3::ZERO, false)];

        while let Some((node, offset, subtractive)) = stack.pop() {
            match node {
                Self::Translate { offset: local, child } => {
                    stack.push((child.as_ref(), offset + *local, subtractive));
                }
                Self::Union { children } => {
                    stack.extend(children.iter().rev().map(|c| (c, offset, subtractive)));
                }
                Self::Difference { children } => {
                    let cuts = children.iter().enumerate().rev();
                    stack.extend(cuts.map(|(i, c)| (c, offset, subtractive || i > 0)));
                }
                primitive => result.push(PlacedPrimitive {
                    primitive,
                    offset,
                    role: if subtractive {
                        Role::Subtractive
                    } else {
                        Role::Additive
                    },
                }),
            }
        }

        result
    }

    /// Axis-aligned bounds of the additive primitives, or `None` when there
    /// are none. Subtracted volume never shrinks the box.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        self.placed_primitives()
            .iter()
            .filter(|p| p.role == Role::Additive)
            .map(|p| p.bounds())
            .reduce(|(min_a, max_a), (min_b, max_b)| (min_a.min(min_b), max_a.max(max_b)))
    }
}

// =============================================================================
// PLACED PRIMITIVE
// =============================================================================

/// Whether a primitive adds material or cuts it away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Contributes volume.
    Additive,
    /// Sits in a subtrahend position of some enclosing difference.
    Subtractive,
}

/// A primitive together with its position in the model frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedPrimitive<'a> {
    /// The leaf node (always a primitive).
    pub primitive: &'a CsgNode,
    /// Sum of all enclosing translations.
    pub offset: DVec3,
    /// Additive or subtractive.
    pub role: Role,
}

impl PlacedPrimitive<'_> {
    /// The primitive's axis in the model frame: cylinders and frustums are
    /// centered on it, cubes report their minimum corner.
    pub fn axis_xy(&self) -> [f64; 2] {
        [self.offset.x, self.offset.y]
    }

    /// Axis-aligned bounds in the model frame.
    pub fn bounds(&self) -> (DVec3, DVec3) {
        let (min, max) = match *self.primitive {
            CsgNode::Cube { size } => (DVec3::ZERO.min(size), DVec3::ZERO.max(size)),
            CsgNode::Cylinder {
                height, diameter, ..
            } => radial_bounds(height, diameter.abs() / 2.0),
            CsgNode::Frustum {
                height,
                diameter_bottom,
                diameter_top,
                ..
            } => radial_bounds(height, diameter_bottom.abs().max(diameter_top.abs()) / 2.0),
            _ => (DVec3::ZERO, DVec3::ZERO),
        };
        (min + self.offset, max + self.offset)
    }
}

fn radial_bounds(height: f64, radius: f64) -> (DVec3, DVec3) {
    (
        DVec3::new(-radius, -radius, height.min(0.0)),
        DVec3::new(radius, radius, height.max(0.0)),
    )
}

// =============================================================================
// TESTS
// =============================================================================
