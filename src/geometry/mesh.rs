// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Printshelf Inc.

//! Mesh representation and utilities

use super::BoundingBox;
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Triangle defined by three vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangle {
    pub indices: [usize; 3],
}

impl Triangle {
    pub fn new(indices: [usize; 3]) -> Self {
        Self { indices }
    }
}

/// Triangular mesh loaded from a single model file.
///
/// Vertex positions are shared between triangles through indices. Per-face
/// normals are absent until normalization computes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Point3<f32>>,
    pub triangles: Vec<Triangle>,
    pub face_normals: Option<Vec<Vector3<f32>>>,
}

impl Mesh {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            triangles: Vec::new(),
            face_normals: None,
        }
    }

    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            face_normals: None,
        }
    }

    /// Add a vertex and return its index
    pub fn add_vertex(&mut self, position: Point3<f32>) -> usize {
        let index = self.vertices.len();
        self.vertices.push(position);
        index
    }

    /// Add a triangle
    pub fn add_triangle(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Compute bounding box
    pub fn bounding_box(&self) -> BoundingBox {
        BoundingBox::from_points(&self.vertices)
    }

    /// Mean of all vertex positions. `None` for an empty mesh.
    ///
    /// This is the mass-centroid approximation used for recentering; it is
    /// cheap and close enough to the volumetric center for preview purposes.
    pub fn centroid(&self) -> Option<Point3<f32>> {
        if self.vertices.is_empty() {
            return None;
        }

        let mut sum = Vector3::zeros();
        for vertex in &self.vertices {
            sum += vertex.coords;
        }
        Some(Point3::from(sum / self.vertices.len() as f32))
    }
}

impl Default for Mesh {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_count() {
        let mut mesh = Mesh::new();
        let a = mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        let b = mesh.add_vertex(Point3::new(1.0, 0.0, 0.0));
        let c = mesh.add_vertex(Point3::new(0.0, 1.0, 0.0));
        mesh.add_triangle(Triangle::new([a, b, c]));

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert!(mesh.face_normals.is_none());
    }

    #[test]
    fn test_centroid() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(Point3::new(0.0, 0.0, 0.0));
        mesh.add_vertex(Point3::new(2.0, 0.0, 0.0));
        mesh.add_vertex(Point3::new(0.0, 2.0, 0.0));

        let centroid = mesh.centroid().unwrap();
        assert!((centroid.x - 2.0 / 3.0).abs() < 1e-6);
        assert!((centroid.y - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(centroid.z, 0.0);
    }

    #[test]
    fn test_centroid_empty() {
        assert!(Mesh::new().centroid().is_none());
    }
}
