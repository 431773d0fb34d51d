// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Printshelf Inc.

//! Geometry module - mesh representation and preview normalization

mod bbox;
mod mesh;
mod normalize;

pub use bbox::BoundingBox;
pub use mesh::{Mesh, Triangle};
pub use normalize::{compute_face_normals, normalize, NormalizeReport, TARGET_EXTENT};
