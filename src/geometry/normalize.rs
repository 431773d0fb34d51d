// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Printshelf Inc.

//! Mesh normalization: centering, uniform rescale, face normals

use super::{Mesh, Triangle};
use crate::error::{Error, Result};
use nalgebra::Vector3;

/// Largest dimension of a normalized mesh, in model units.
pub const TARGET_EXTENT: f32 = 100.0;

const DEGENERATE_EPS: f32 = 1e-12;

/// Outcome of normalizing one mesh.
///
/// Degeneracy is a warning, not an error: the mesh is still usable, it just
/// could not be rescaled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizeReport {
    /// Uniform scale factor applied after centering (1.0 when degenerate).
    pub scale: f32,
    /// True when every bounding-box extent was zero and rescaling was skipped.
    pub degenerate: bool,
}

/// Center a mesh on its mass centroid, rescale its largest extent to
/// [`TARGET_EXTENT`], and compute per-face normals.
///
/// The centroid is the mean of all vertex positions. Rescaling divides by the
/// largest axis extent; a single-point mesh has no extent, so it is centered,
/// flagged degenerate, and left unscaled. An empty mesh is rejected.
pub fn normalize(mesh: &mut Mesh) -> Result<NormalizeReport> {
    let centroid = mesh.centroid().ok_or(Error::EmptyMesh)?;

    for vertex in &mut mesh.vertices {
        *vertex -= centroid.coords;
    }

    let max_extent = mesh.bounding_box().max_extent();
    let report = if max_extent > DEGENERATE_EPS {
        let scale = TARGET_EXTENT / max_extent;
        for vertex in &mut mesh.vertices {
            vertex.coords *= scale;
        }
        NormalizeReport {
            scale,
            degenerate: false,
        }
    } else {
        NormalizeReport {
            scale: 1.0,
            degenerate: true,
        }
    };

    compute_face_normals(mesh);

    Ok(report)
}

/// Compute per-face normals as the normalized cross product of two edge
/// vectors, in winding order.
///
/// A face whose cross product has zero length (collinear vertices) receives
/// the average of the valid normals of faces sharing any of its vertices, or
/// the unit +Z vector when no such neighbor exists.
pub fn compute_face_normals(mesh: &mut Mesh) {
    let raw: Vec<Option<Vector3<f32>>> = mesh
        .triangles
        .iter()
        .map(|triangle| face_normal(mesh, triangle))
        .collect();

    // Vertex -> incident faces, used only to repair degenerate faces.
    let mut vertex_faces: Vec<Vec<usize>> = vec![Vec::new(); mesh.vertices.len()];
    for (face_idx, triangle) in mesh.triangles.iter().enumerate() {
        for &vertex_idx in &triangle.indices {
            vertex_faces[vertex_idx].push(face_idx);
        }
    }

    let normals: Vec<Vector3<f32>> = raw
        .iter()
        .enumerate()
        .map(|(face_idx, normal)| match normal {
            Some(normal) => *normal,
            None => fallback_normal(face_idx, &mesh.triangles[face_idx], &raw, &vertex_faces),
        })
        .collect();

    mesh.face_normals = Some(normals);
}

fn face_normal(mesh: &Mesh, triangle: &Triangle) -> Option<Vector3<f32>> {
    let [i0, i1, i2] = triangle.indices;
    if i0 >= mesh.vertices.len() || i1 >= mesh.vertices.len() || i2 >= mesh.vertices.len() {
        return None;
    }

    let edge1 = mesh.vertices[i1] - mesh.vertices[i0];
    let edge2 = mesh.vertices[i2] - mesh.vertices[i0];
    let cross = edge1.cross(&edge2);

    let length = cross.norm();
    if length > DEGENERATE_EPS {
        Some(cross / length)
    } else {
        None
    }
}

fn fallback_normal(
    face_idx: usize,
    triangle: &Triangle,
    raw: &[Option<Vector3<f32>>],
    vertex_faces: &[Vec<usize>],
) -> Vector3<f32> {
    let mut seen: Vec<usize> = Vec::new();
    let mut sum = Vector3::zeros();

    for &vertex_idx in &triangle.indices {
        let Some(neighbors) = vertex_faces.get(vertex_idx) else {
            continue;
        };
        for &neighbor in neighbors {
            if neighbor == face_idx || seen.contains(&neighbor) {
                continue;
            }
            seen.push(neighbor);
            if let Some(normal) = raw[neighbor] {
                sum += normal;
            }
        }
    }

    let length = sum.norm();
    if length > DEGENERATE_EPS {
        sum / length
    } else {
        Vector3::z()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Point3;

    fn triangle_mesh() -> Mesh {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let b = mesh.add_vertex(Point3::new(2.0, 0.0, 0.0));
        let c = mesh.add_vertex(Point3::new(0.0, 2.0, 0.0));
        mesh.add_triangle(Triangle::new([a, b, c]));
        mesh
    }

    #[test]
    fn test_normalize_centers_and_rescales() {
        let mut mesh = triangle_mesh();
        let report = normalize(&mut mesh).unwrap();

        // Longest original extent is 2, so the scale factor is 50.
        assert!(!report.degenerate);
        assert_relative_eq!(report.scale, 50.0, epsilon = 1e-4);
        assert_relative_eq!(mesh.bounding_box().max_extent(), TARGET_EXTENT, epsilon = 1e-3);

        let centroid = mesh.centroid().unwrap();
        assert!(centroid.coords.norm() <= 1e-6 * TARGET_EXTENT);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let mut mesh = triangle_mesh();
        normalize(&mut mesh).unwrap();
        let first: Vec<_> = mesh.vertices.clone();

        normalize(&mut mesh).unwrap();
        for (a, b) in first.iter().zip(&mesh.vertices) {
            assert!((a - b).norm() < 1e-3);
        }
    }

    #[test]
    fn test_normalize_single_point_is_degenerate() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Point3::new(7.0, -3.0, 2.0));

        let report = normalize(&mut mesh).unwrap();
        assert!(report.degenerate);
        assert_eq!(report.scale, 1.0);
        // Centered, but not rescaled.
        assert_relative_eq!(mesh.vertices[0].coords.norm(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_empty_mesh_is_rejected() {
        let mut mesh = Mesh::new();
        assert!(matches!(normalize(&mut mesh), Err(Error::EmptyMesh)));
    }

    #[test]
    fn test_face_normal_winding() {
        let mut mesh = triangle_mesh();
        compute_face_normals(&mut mesh);

        let normals = mesh.face_normals.as_ref().unwrap();
        assert_eq!(normals.len(), 1);
        // Counter-clockwise in the XY plane points +Z.
        assert_relative_eq!(normals[0].z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_degenerate_face_borrows_neighbor_normal() {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let b = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        let c = mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
        let d = mesh.add_vertex(Point3::new(2.0, 0.0, 0.0));
        mesh.add_triangle(Triangle::new([a, b, c]));
        // Collinear: zero-length cross product.
        mesh.add_triangle(Triangle::new([a, b, d]));

        compute_face_normals(&mut mesh);
        let normals = mesh.face_normals.as_ref().unwrap();
        assert_relative_eq!(normals[1].z, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_degenerate_face_without_neighbors_gets_up_vector() {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let b = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        let c = mesh.add_vertex(Point3::new(2.0, 0.0, 0.0));
        mesh.add_triangle(Triangle::new([a, b, c]));

        compute_face_normals(&mut mesh);
        let normals = mesh.face_normals.as_ref().unwrap();
        assert_eq!(normals[0], Vector3::z());
    }
}
