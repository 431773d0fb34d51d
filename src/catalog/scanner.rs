// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Printshelf Inc.

//! Per-model artifact discovery: thumbnail, description, geometry files

use super::model::{extract_pack_id, Description, ModelEntry, ModelFile, ModelFormat};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Image extensions accepted inside an `images` subdirectory.
const IMAGE_EXTENSIONS: [&str; 3] = [".png", ".jpg", ".jpeg"];

/// Candidate description filenames, checked in the model root in this exact
/// order before falling back to a recursive case-insensitive search.
const DESCRIPTION_CANDIDATES: [&str; 12] = [
    "README.txt",
    "readme.txt",
    "ReadMe.txt",
    "Readme.txt",
    "README.md",
    "readme.md",
    "ReadMe.md",
    "Readme.md",
    "instructions.txt",
    "Instructions.txt",
    "description.txt",
    "Description.txt",
];

/// Scan one model directory into a catalog entry.
pub fn scan_model(name: &str, path: &Path) -> ModelEntry {
    let pack_id = extract_pack_id(name);
    let thumbnail = find_thumbnail(path, pack_id.as_deref());
    let description = read_description(path);
    let model_files = find_model_files(path);

    ModelEntry {
        name: name.to_string(),
        path: path.to_path_buf(),
        pack_id,
        thumbnail,
        description,
        model_files,
    }
}

/// A single thumbnail-search heuristic.
///
/// Strategies run in a fixed priority order; the first non-empty result
/// wins. A strategy failing to read the directory reports nothing.
trait ThumbnailStrategy {
    fn attempt(&self, dir: &Path) -> Option<PathBuf>;
}

/// Strategy 1: first image inside an `images` subdirectory.
struct ImagesSubdir;

impl ThumbnailStrategy for ImagesSubdir {
    fn attempt(&self, dir: &Path) -> Option<PathBuf> {
        let images_dir = dir.join("images");
        first_match(&images_dir, |name| {
            IMAGE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
        })
    }
}

/// Strategy 2: `*_Thumbnail*.png` in the model root.
struct RootThumbnail;

impl ThumbnailStrategy for RootThumbnail {
    fn attempt(&self, dir: &Path) -> Option<PathBuf> {
        first_match(dir, |name| {
            name.ends_with(".png") && name.contains("_Thumbnail")
        })
    }
}

/// Strategy 3: `*<pack_id>*Thumbnail*.png` in the model root.
struct PackIdThumbnail(String);

impl ThumbnailStrategy for PackIdThumbnail {
    fn attempt(&self, dir: &Path) -> Option<PathBuf> {
        let id = self.0.as_str();
        first_match(dir, |name| {
            name.ends_with(".png")
                && name
                    .match_indices(id)
                    .any(|(pos, _)| name[pos + id.len()..].contains("Thumbnail"))
        })
    }
}

/// Strategy 4: any `*.png` in the model root.
struct AnyPng;

impl ThumbnailStrategy for AnyPng {
    fn attempt(&self, dir: &Path) -> Option<PathBuf> {
        first_match(dir, |name| name.ends_with(".png"))
    }
}

/// Resolve the best available thumbnail for a model directory.
///
/// The pack-id strategy is skipped when no identifier was extractable from
/// the directory name. Yielding nothing is a normal outcome, not an error.
pub fn find_thumbnail(dir: &Path, pack_id: Option<&str>) -> Option<PathBuf> {
    let mut strategies: Vec<Box<dyn ThumbnailStrategy>> =
        vec![Box::new(ImagesSubdir), Box::new(RootThumbnail)];
    if let Some(id) = pack_id {
        strategies.push(Box::new(PackIdThumbnail(id.to_string())));
    }
    strategies.push(Box::new(AnyPng));

    strategies.iter().find_map(|strategy| strategy.attempt(dir))
}

/// Lexicographically-first file in `dir` whose name satisfies the predicate.
fn first_match(dir: &Path, predicate: impl Fn(&str) -> bool) -> Option<PathBuf> {
    let entries = fs::read_dir(dir).ok()?;

    let mut matches: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .map(|entry| entry.path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .map(&predicate)
                .unwrap_or(false)
        })
        .collect();

    matches.sort();
    matches.into_iter().next()
}

/// Locate a description file for a model directory.
///
/// Exact candidate names in the root win; otherwise the whole tree is walked
/// and the first file whose lowercased name matches a lowercased candidate is
/// taken.
pub fn find_description_file(dir: &Path) -> Option<PathBuf> {
    for candidate in DESCRIPTION_CANDIDATES {
        let path = dir.join(candidate);
        if path.is_file() {
            return Some(path);
        }
    }

    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .find(|entry| {
            let name = entry.file_name().to_string_lossy().to_lowercase();
            DESCRIPTION_CANDIDATES
                .iter()
                .any(|candidate| candidate.to_lowercase() == name)
        })
        .map(|entry| entry.into_path())
}

/// Read a model's description text.
///
/// Invalid UTF-8 is replaced rather than failing; a read failure degrades to
/// a visible error string so the catalog stays browsable.
pub fn read_description(dir: &Path) -> Option<Description> {
    let path = find_description_file(dir)?;
    let text = match fs::read(&path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) => format!("Error reading description: {err}"),
    };
    Some(Description { path, text })
}

/// Enumerate every geometry file under a model directory, recursively.
///
/// Extension matching is case-insensitive; order is walk order. Unreadable
/// subdirectories are skipped, never fatal.
pub fn find_model_files(dir: &Path) -> Vec<ModelFile> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let absolute_path = entry.into_path();
            let format = ModelFormat::from_path(&absolute_path)?;
            let relative_path = absolute_path
                .strip_prefix(dir)
                .unwrap_or(&absolute_path)
                .to_path_buf();
            Some(ModelFile {
                relative_path,
                absolute_path,
                format,
            })
        })
        .collect()
}
