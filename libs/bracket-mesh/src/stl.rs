//! # STL Export
//!
//! Writes a [`Mesh`] as ASCII or binary STL.
//!
//! ## Binary layout
//!
//! ```text
//! UINT8[80]    header
//! UINT32       triangle count (little-endian)
//! per triangle:
//!   REAL32[3]  normal
//!   REAL32[3]  vertex 1, 2, 3
//!   UINT16     attribute byte count (0)
//! ```
//!
//! ## ASCII layout
//!
//! ```text
//! solid name
//!   facet normal ni nj nk
//!     outer loop
//!       vertex x y z
//!       ...
//!     endloop
//!   endfacet
//! endsolid name
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glam::DVec3;
use tracing::info;

use crate::error::MeshError;
use crate::mesh::Mesh;

const HEADER_SIZE: usize = 80;

/// STL encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StlFormat {
    #[default]
    Binary,
    Ascii,
}

/// Writes `mesh` as binary STL.
pub fn write_binary<W: Write>(mesh: &Mesh, name: &str, mut writer: W) -> Result<(), MeshError> {
    let mut header = [b' '; HEADER_SIZE];
    let text = format!("binary STL: {name}");
    let len = text.len().min(HEADER_SIZE);
    header[..len].copy_from_slice(&text.as_bytes()[..len]);
    writer.write_all(&header)?;

    let count = u32::try_from(mesh.triangle_count()).map_err(|_| MeshError::TooManyTriangles {
        count: mesh.triangle_count(),
        max: u32::MAX as usize,
    })?;
    writer.write_all(&count.to_le_bytes())?;

    for index in 0..mesh.triangle_count() {
        write_vector(&mut writer, mesh.triangle_normal(index))?;
        for corner in mesh.triangle_corners(index) {
            write_vector(&mut writer, corner)?;
        }
        writer.write_all(&0u16.to_le_bytes())?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes `mesh` as ASCII STL.
pub fn write_ascii<W: Write>(mesh: &Mesh, name: &str, mut writer: W) -> Result<(), MeshError> {
    writeln!(writer, "solid {name}")?;

    for index in 0..mesh.triangle_count() {
        let n = mesh.triangle_normal(index);
        writeln!(writer, "  facet normal {:.6e} {:.6e} {:.6e}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for v in mesh.triangle_corners(index) {
            writeln!(writer, "      vertex {:.6e} {:.6e} {:.6e}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid {name}")?;
    writer.flush()?;
    Ok(())
}

/// Saves `mesh` to `path`, named after the file stem.
pub fn save_stl<P: AsRef<Path>>(path: P, mesh: &Mesh, format: StlFormat) -> Result<(), MeshError> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "bracket".to_string());
    let writer = BufWriter::new(File::create(path)?);

    match format {
        StlFormat::Binary => write_binary(mesh, &name, writer)?,
        StlFormat::Ascii => write_ascii(mesh, &name, writer)?,
    }

    info!(
        path = %path.display(),
        triangles = mesh.triangle_count(),
        ?format,
        "wrote STL"
    );
    Ok(())
}

fn write_vector<W: Write>(writer: &mut W, v: DVec3) -> std::io::Result<()> {
    for component in v.as_vec3().to_array() {
        writer.write_all(&component.to_le_bytes())?;
    }
    Ok(())
}
