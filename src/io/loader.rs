// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Printshelf Inc.

//! Geometry file loading

use crate::catalog::ModelFormat;
use crate::error::{Error, Result};
use crate::geometry::{Mesh, Triangle};
use nalgebra::Point3;
use std::fs::File;
use std::io;
use std::path::Path;
use stl_io::read_stl;

/// Result of asking for a renderable mesh from one model file.
///
/// OBJ and 3MF previews are intentionally not produced; those files are
/// offered for download instead. That is a product decision, so it is a
/// variant here rather than an error.
#[derive(Debug, Clone)]
pub enum LoadOutcome {
    Loaded(Mesh),
    DownloadOnly(ModelFormat),
}

/// Load one geometry file according to its declared format tag.
pub fn load_model_file(path: &Path, format: ModelFormat) -> Result<LoadOutcome> {
    match format {
        ModelFormat::Stl => Ok(LoadOutcome::Loaded(load_stl(path)?)),
        other => Ok(LoadOutcome::DownloadOnly(other)),
    }
}

/// Parse an STL file into a mesh. Binary and ASCII layouts are detected
/// transparently by `stl_io`.
///
/// A corrupt or truncated file fails with [`Error::MalformedGeometry`]
/// carrying the offending path; it never panics.
pub fn load_stl(path: &Path) -> Result<Mesh> {
    let mut file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => Error::NotFound(path.to_path_buf()),
        _ => Error::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let stl = read_stl(&mut file).map_err(|err| Error::malformed(path, err.to_string()))?;

    if stl.faces.is_empty() {
        return Err(Error::malformed(path, "no triangles"));
    }

    let mut mesh = Mesh::with_capacity(stl.vertices.len(), stl.faces.len());
    for vertex in &stl.vertices {
        mesh.add_vertex(Point3::new(vertex[0], vertex[1], vertex[2]));
    }
    for face in &stl.faces {
        if face.vertices.iter().any(|&i| i >= mesh.vertex_count()) {
            return Err(Error::malformed(path, "face index out of range"));
        }
        mesh.add_triangle(Triangle::new(face.vertices));
    }

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const ASCII_TRIANGLE: &str = "solid preview\n\
          facet normal 0 0 1\n\
            outer loop\n\
              vertex 0 0 0\n\
              vertex 2 0 0\n\
              vertex 0 2 0\n\
            endloop\n\
          endfacet\n\
        endsolid preview\n";

    #[test]
    fn test_load_ascii_stl() {
        let mut file = NamedTempFile::with_suffix(".stl").unwrap();
        file.write_all(ASCII_TRIANGLE.as_bytes()).unwrap();

        let mesh = load_stl(file.path()).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_load_binary_stl() {
        let mut file = NamedTempFile::with_suffix(".stl").unwrap();

        // 80-byte header, one-triangle body.
        let mut bytes = vec![0u8; 80];
        bytes.extend_from_slice(&1u32.to_le_bytes());
        for component in [0.0f32, 0.0, 1.0] {
            bytes.extend_from_slice(&component.to_le_bytes());
        }
        for vertex in [[0.0f32, 0.0, 0.0], [2.0, 0.0, 0.0], [0.0, 2.0, 0.0]] {
            for component in vertex {
                bytes.extend_from_slice(&component.to_le_bytes());
            }
        }
        bytes.extend_from_slice(&0u16.to_le_bytes());
        file.write_all(&bytes).unwrap();

        let mesh = load_stl(file.path()).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_garbage_is_malformed_not_a_panic() {
        let mut file = NamedTempFile::with_suffix(".stl").unwrap();
        file.write_all(b"this is not geometry").unwrap();

        match load_stl(file.path()) {
            Err(Error::MalformedGeometry { path, .. }) => {
                assert_eq!(path, file.path());
            }
            other => panic!("expected MalformedGeometry, got {other:?}"),
        }
    }

    #[test]
    fn test_truncated_binary_is_malformed() {
        let mut file = NamedTempFile::with_suffix(".stl").unwrap();

        let mut bytes = vec![0u8; 80];
        bytes.extend_from_slice(&1000u32.to_le_bytes());
        bytes.extend_from_slice(&[1, 2, 3, 4]);
        file.write_all(&bytes).unwrap();

        assert!(matches!(
            load_stl(file.path()),
            Err(Error::MalformedGeometry { .. })
        ));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        assert!(matches!(
            load_stl(Path::new("/nope/missing.stl")),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn test_obj_and_3mf_are_download_only() {
        let obj = load_model_file(Path::new("spin.obj"), ModelFormat::Obj).unwrap();
        assert!(matches!(obj, LoadOutcome::DownloadOnly(ModelFormat::Obj)));

        let threemf = load_model_file(Path::new("part.3mf"), ModelFormat::ThreeMf).unwrap();
        assert!(matches!(
            threemf,
            LoadOutcome::DownloadOnly(ModelFormat::ThreeMf)
        ));
    }
}
