//! # Mesh Operations
//!
//! Boolean operations on closed triangle meshes.

pub mod boolean;

pub use boolean::{difference, union};
