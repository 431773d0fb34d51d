// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Printshelf Inc.

//! Catalog assembly over a category/model directory hierarchy

use super::model::{Catalog, Category};
use super::scanner;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Build a catalog of every category and model under `root`.
pub fn build_catalog(root: &Path) -> Catalog {
    build_catalog_filtered(root, "")
}

/// Build a catalog, retaining only models whose name, pack id, or
/// description contains `filter` (case-insensitive). An empty filter keeps
/// everything.
///
/// Immediate subdirectories of the root are categories, with no exclusions;
/// their immediate subdirectories are models. Models inside one category are
/// scanned on the rayon pool; the indexed collect keeps results in scan
/// order regardless of completion order.
pub fn build_catalog_filtered(root: &Path, filter: &str) -> Catalog {
    let mut categories: Vec<Category> = immediate_subdirs(root)
        .into_iter()
        .map(|(name, path)| scan_category(&name, &path, filter))
        .collect();

    categories.sort_by(|a, b| a.name.cmp(&b.name));

    Catalog {
        root: root.to_path_buf(),
        categories,
    }
}

fn scan_category(name: &str, path: &Path, filter: &str) -> Category {
    let models = immediate_subdirs(path)
        .par_iter()
        .map(|(model_name, model_path)| scanner::scan_model(model_name, model_path))
        .filter(|model| model.matches_filter(filter))
        .collect();

    Category {
        name: name.to_string(),
        models,
    }
}

/// Immediate subdirectories of `path`, name-sorted. An unreadable directory
/// yields an empty list rather than an error so partial catalogs stay
/// browsable.
fn immediate_subdirs(path: &Path) -> Vec<(String, PathBuf)> {
    let Ok(entries) = fs::read_dir(path) else {
        return Vec::new();
    };

    let mut subdirs: Vec<(String, PathBuf)> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_dir()).unwrap_or(false))
        .filter_map(|entry| {
            let name = entry.file_name().to_str()?.to_string();
            Some((name, entry.path()))
        })
        .collect();

    subdirs.sort_by(|a, b| a.0.cmp(&b.0));
    subdirs
}
