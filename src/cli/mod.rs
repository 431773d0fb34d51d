// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Printshelf Inc.

//! CLI subsystem for Printshelf

pub mod reporter;

pub use reporter::Reporter;

use crate::catalog::{self, LookupOutcome, ModelFormat};
use crate::style::RenderStyle;
use crate::{prepare_preview, PreviewOutcome};
use anyhow::{bail, Context, Result};
use std::fs;
use std::path::Path;

/// Build and print the catalog under `root`, optionally filtered.
pub fn scan_command(root: &Path, filter: Option<&str>) -> Result<()> {
    let catalog = match filter {
        Some(filter) => catalog::build_catalog_filtered(root, filter),
        None => catalog::build_catalog(root),
    };
    Reporter::report_catalog(&catalog);
    Ok(())
}

/// Look up one model by name and print its details.
///
/// A miss in the hinted category is reported separately from an overall
/// miss; the overall miss exits nonzero.
pub fn show_command(root: &Path, model_name: &str, category_hint: Option<&str>) -> Result<()> {
    let catalog = catalog::build_catalog(root);

    match catalog.find_model(model_name, category_hint) {
        LookupOutcome::Found {
            category,
            model,
            hint_missed,
        } => {
            if hint_missed {
                if let Some(hint) = category_hint {
                    Reporter::report_hint_miss(model_name, hint);
                }
            }
            Reporter::report_model(&category.name, model);
            Ok(())
        }
        LookupOutcome::NotFound { hint_missed } => {
            if hint_missed {
                if let Some(hint) = category_hint {
                    Reporter::report_hint_miss(model_name, hint);
                }
            }
            Reporter::report_not_found(model_name);
            std::process::exit(1);
        }
    }
}

/// Prepare one geometry file for display and print the prepared buffer.
pub fn preview_command(file: &Path, style_name: &str, opacity: f32) -> Result<()> {
    let format = ModelFormat::from_path(file)
        .with_context(|| format!("unrecognized geometry extension: {}", file.display()))?;

    let Some(style) = RenderStyle::parse(style_name) else {
        bail!(
            "unknown style '{style_name}' (expected viridis, plasma, inferno, magma, \
             cividis, rainbow, solid-blue, or solid-green)"
        );
    };

    match prepare_preview(file, format, style, opacity)? {
        PreviewOutcome::Ready(preview) => {
            Reporter::report_preview(&file.display().to_string(), &preview);
        }
        PreviewOutcome::DownloadOnly(format) => {
            Reporter::report_download_only(&file.display().to_string(), format.label());
        }
    }
    Ok(())
}

/// Serialize the catalog snapshot as pretty JSON to a file or stdout.
pub fn export_command(root: &Path, output: Option<&Path>) -> Result<()> {
    let catalog = catalog::build_catalog(root);
    let json = serde_json::to_string_pretty(&catalog).context("Failed to serialize catalog")?;

    match output {
        Some(path) => {
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Exported {} models to {}", catalog.model_count(), path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
