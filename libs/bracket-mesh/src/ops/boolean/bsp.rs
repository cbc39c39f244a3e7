//! # BSP Tree
//!
//! Solid-space partition of one operand's boundary.
//!
//! A node owns a splitting plane and the boundary polygons lying in it.
//! Everything strictly in front of the plane goes to the front subtree and
//! everything behind to the back subtree. A missing back subtree means
//! solid, a missing front subtree means empty space, which is what lets
//! [`BspNode::clip_polygons`] discard surface inside the solid.
//!
//! Cylinders with many facets make long, unbalanced chains, so every
//! traversal (drop included) walks an explicit stack.

use super::plane::Plane;
use super::polygon::{Partition, Polygon};

/// One partition node; the root owns the whole tree.
#[derive(Debug, Default)]
pub struct BspNode {
    /// Splitting plane; `None` only for an empty tree
    plane: Option<Plane>,
    /// Polygons coplanar with `plane`
    polygons: Vec<Polygon>,
    /// Space in front of `plane`
    front: Option<Box<BspNode>>,
    /// Space behind `plane`
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Partitions `polygons` into a fresh tree.
    ///
    /// The first polygon of each batch picks the splitting plane.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut root = Self::default();
        root.build(polygons);
        root
    }

    /// Inserts polygons into this tree, splitting them as needed.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        let mut stack: Vec<(&mut BspNode, Vec<Polygon>)> = vec![(self, polygons)];

        while let Some((node, polys)) = stack.pop() {
            let Some(first) = polys.first() else {
                continue;
            };
            let BspNode {
                plane,
                polygons,
                front,
                back,
            } = node;
            let plane = *plane.get_or_insert(*first.plane());

            let mut parts = Partition::default();
            for poly in polys {
                poly.split(&plane, &mut parts);
            }
            polygons.append(&mut parts.coplanar_front);
            polygons.append(&mut parts.coplanar_back);

            if !parts.front.is_empty() {
                let child = front.get_or_insert_with(Box::default);
                stack.push((child.as_mut(), parts.front));
            }
            if !parts.back.is_empty() {
                let child = back.get_or_insert_with(Box::default);
                stack.push((child.as_mut(), parts.back));
            }
        }
    }

    /// Converts solid space to empty space and vice versa.
    pub fn invert(&mut self) {
        let mut stack: Vec<&mut BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            let BspNode {
                plane,
                polygons,
                front,
                back,
            } = node;

            for poly in polygons.iter_mut() {
                poly.flip();
            }
            if let Some(plane) = plane {
                *plane = plane.flipped();
            }
            std::mem::swap(front, back);

            stack.extend(front.as_deref_mut());
            stack.extend(back.as_deref_mut());
        }
    }

    /// Removes the parts of `polygons` that lie inside this tree's solid.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack: Vec<(&BspNode, Vec<Polygon>)> = vec![(self, polygons)];

        while let Some((node, polys)) = stack.pop() {
            let Some(plane) = node.plane else {
                result.extend(polys);
                continue;
            };

            let mut parts = Partition::default();
            for poly in polys {
                poly.split(&plane, &mut parts);
            }
            let mut front = parts.front;
            front.append(&mut parts.coplanar_front);
            let mut back = parts.back;
            back.append(&mut parts.coplanar_back);

            match &node.front {
                Some(child) => stack.push((child.as_ref(), front)),
                None => result.extend(front),
            }
            // Without a back subtree the back side is solid: drop them
            if let Some(child) = &node.back {
                stack.push((child.as_ref(), back));
            }
        }

        result
    }

    /// Removes the parts of this tree's polygons inside `other`.
    pub fn clip_to(&mut self, other: &BspNode) {
        let mut stack: Vec<&mut BspNode> = vec![self];

        while let Some(node) = stack.pop() {
            node.polygons = other.clip_polygons(std::mem::take(&mut node.polygons));
            stack.extend(node.front.as_deref_mut());
            stack.extend(node.back.as_deref_mut());
        }
    }

    /// Moves all polygons out of this tree, leaving it empty.
    pub fn into_polygons(mut self) -> Vec<Polygon> {
        let mut result = std::mem::take(&mut self.polygons);
        let mut stack: Vec<Box<BspNode>> = Vec::new();
        stack.extend(self.front.take());
        stack.extend(self.back.take());

        while let Some(mut node) = stack.pop() {
            result.append(&mut node.polygons);
            stack.extend(node.front.take());
            stack.extend(node.back.take());
        }

        result
    }

}

impl Drop for BspNode {
    fn drop(&mut self) {
        let mut stack = Vec::new();
        stack.extend(self.front.take());
        stack.extend(self.back.take());

        while let Some(mut node) = stack.pop() {
            // Children are detached first so this drop never recurses
            stack.extend(node.front.take());
            stack.extend(node.back.take());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn triangle_at(z: f64) -> Polygon {
        Polygon::new(vec![
            DVec3::new(0.0, 0.0, z),
            DVec3::new(1.0, 0.0, z),
            DVec3::new(0.0, 1.0, z),
        ])
        .unwrap()
    }

    #[test]
    fn test_bsp_new_empty() {
        let tree = BspNode::new(vec![]);
        assert!(tree.polygons.is_empty());
        assert!(tree.plane.is_none());
        assert!(tree.front.is_none() && tree.back.is_none());
    }

    #[test]
    fn test_bsp_new_multiple() {
        let tree = BspNode::new(vec![triangle_at(0.0), triangle_at(1.0), triangle_at(-1.0)]);
        assert_eq!(tree.polygons.len(), 1);
        assert!(tree.front.is_some());
        assert!(tree.back.is_some());
        assert_eq!(tree.into_polygons().len(), 3);
    }

    #[test]
    fn test_bsp_coplanar_polygons_share_node() {
        let tree = BspNode::new(vec![triangle_at(0.0), triangle_at(0.0)]);
        assert_eq!(tree.polygons.len(), 2);
        assert!(tree.front.is_none());
    }

    #[test]
    fn test_bsp_invert() {
        let mut tree = BspNode::new(vec![triangle_at(0.0), triangle_at(1.0)]);
        tree.invert();
        assert_eq!(tree.polygons[0].plane().normal, -DVec3::Z);
        assert!(tree.front.is_none());
        assert!(tree.back.is_some());
    }

    #[test]
    fn test_bsp_clip_polygons_front() {
        let tree = BspNode::new(vec![triangle_at(0.0)]);
        let result = tree.clip_polygons(vec![triangle_at(1.0)]);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_bsp_clip_polygons_back() {
        let tree = BspNode::new(vec![triangle_at(0.0)]);
        let result = tree.clip_polygons(vec![triangle_at(-1.0)]);
        assert!(result.is_empty());
    }

    #[test]
    fn test_bsp_into_polygons() {
        let tree = BspNode::new(vec![triangle_at(0.0), triangle_at(2.0), triangle_at(-2.0)]);
        assert_eq!(tree.into_polygons().len(), 3);
    }

    #[test]
    fn test_bsp_deep_tree_drops() {
        let mut tree = BspNode::default();
        for _ in 0..200_000 {
            let mut parent = BspNode::default();
            parent.front = Some(Box::new(tree));
            tree = parent;
        }
        assert!(tree.front.is_some());
        drop(tree);
    }
}
