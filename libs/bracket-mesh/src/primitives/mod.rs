//! # Primitives
//!
//! Mesh generation for the CSG leaf shapes (box, cylinder, frustum).

pub mod cube;
pub mod cylinder;

pub use cube::create_cube;
pub use cylinder::create_cylinder;
