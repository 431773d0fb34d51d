// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Printshelf Inc.

//! Catalog module - discovery and assembly of downloaded model packages

mod builder;
mod model;
mod scanner;

pub use builder::{build_catalog, build_catalog_filtered};
pub use model::{
    extract_pack_id, Catalog, CatalogStats, Category, Description, LookupOutcome, ModelEntry,
    ModelFile, ModelFormat,
};
pub use scanner::{find_description_file, find_model_files, find_thumbnail, read_description, scan_model};
