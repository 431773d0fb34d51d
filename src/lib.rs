// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Printshelf Inc.

//! Printshelf
//!
//! Catalogs a tree of downloaded 3D-model packages on disk and prepares any
//! selected model's mesh for rendering: heuristic discovery of thumbnails,
//! descriptions, and geometry files, plus the load → normalize → colorize
//! preview pipeline.

pub mod catalog;
pub mod cli;
pub mod error;
pub mod geometry;
pub mod io;
pub mod style;

pub use catalog::{build_catalog, build_catalog_filtered, Catalog, LookupOutcome, ModelFormat};
pub use error::{Error, Result};
pub use geometry::{normalize, Mesh, NormalizeReport, TARGET_EXTENT};
pub use io::{load_model_file, LoadOutcome};
pub use style::{resolve, ColorSpec, RenderStyle};

use std::path::Path;

/// A mesh prepared for display, with its color mapping and the
/// normalization report.
#[derive(Debug, Clone)]
pub struct Preview {
    pub mesh: Mesh,
    pub colors: ColorSpec,
    pub report: NormalizeReport,
}

/// Outcome of preparing one model file for display.
#[derive(Debug, Clone)]
pub enum PreviewOutcome {
    Ready(Preview),
    /// The format is offered for download instead of preview.
    DownloadOnly(ModelFormat),
}

/// Main entry point for the preview pipeline: load a geometry file,
/// normalize the mesh, and attach a color mapping.
pub fn prepare_preview(
    path: &Path,
    format: ModelFormat,
    style: RenderStyle,
    opacity: f32,
) -> Result<PreviewOutcome> {
    match io::load_model_file(path, format)? {
        LoadOutcome::DownloadOnly(format) => Ok(PreviewOutcome::DownloadOnly(format)),
        LoadOutcome::Loaded(mut mesh) => {
            let report = geometry::normalize(&mut mesh)?;
            let colors = style::resolve(style, opacity, &mesh);
            Ok(PreviewOutcome::Ready(Preview {
                mesh,
                colors,
                report,
            }))
        }
    }
}
