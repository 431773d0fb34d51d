// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Printshelf Inc.

//! Catalog data model: categories, models, and their files

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Geometry file format recognized by the catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelFormat {
    Stl,
    Obj,
    ThreeMf,
}

impl ModelFormat {
    /// Map a file extension (without the dot, any case) to a format tag.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "stl" => Some(ModelFormat::Stl),
            "obj" => Some(ModelFormat::Obj),
            "3mf" => Some(ModelFormat::ThreeMf),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelFormat::Stl => "stl",
            ModelFormat::Obj => "obj",
            ModelFormat::ThreeMf => "3mf",
        }
    }

    /// Uppercase label for display ("STL", "OBJ", "3MF").
    pub fn label(&self) -> &'static str {
        match self {
            ModelFormat::Stl => "STL",
            ModelFormat::Obj => "OBJ",
            ModelFormat::ThreeMf => "3MF",
        }
    }
}

/// One geometry file inside a model package
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelFile {
    /// Path relative to the model's root directory.
    pub relative_path: PathBuf,
    pub absolute_path: PathBuf,
    pub format: ModelFormat,
}

/// Description text discovered in a model package, with its source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub path: PathBuf,
    pub text: String,
}

/// One downloaded model package
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelEntry {
    /// Directory name of the package.
    pub name: String,
    pub path: PathBuf,
    /// First run of ASCII digits in the directory name, when present.
    pub pack_id: Option<String>,
    pub thumbnail: Option<PathBuf>,
    pub description: Option<Description>,
    pub model_files: Vec<ModelFile>,
}

impl ModelEntry {
    /// Number of geometry files in this package.
    pub fn model_count(&self) -> usize {
        self.model_files.len()
    }

    /// Case-insensitive substring match across name, pack id, and
    /// description text. An empty filter retains everything.
    pub fn matches_filter(&self, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        let filter = filter.to_lowercase();

        if self.name.to_lowercase().contains(&filter) {
            return true;
        }
        if self
            .pack_id
            .as_deref()
            .is_some_and(|id| id.contains(&filter))
        {
            return true;
        }
        self.description
            .as_ref()
            .is_some_and(|d| d.text.to_lowercase().contains(&filter))
    }
}

/// Top-level grouping directory holding model packages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub models: Vec<ModelEntry>,
}

impl Category {
    pub fn model_count(&self) -> usize {
        self.models.len()
    }
}

/// Summary statistics over one catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub categories: usize,
    pub models: usize,
    pub total_bytes: u64,
}

/// Result of a lookup by model name
#[derive(Debug, Clone, Copy)]
pub enum LookupOutcome<'a> {
    Found {
        category: &'a Category,
        model: &'a ModelEntry,
        /// True when a category hint was given but the model was not there.
        hint_missed: bool,
    },
    NotFound {
        hint_missed: bool,
    },
}

/// In-memory catalog of every category and model under one library root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub root: PathBuf,
    /// Name-sorted for stable display.
    pub categories: Vec<Category>,
}

impl Catalog {
    pub fn model_count(&self) -> usize {
        self.categories.iter().map(Category::model_count).sum()
    }

    /// Find a model by directory name.
    ///
    /// A hinted category is checked first; a miss there is reported
    /// distinctly but the search still falls through to every category,
    /// returning the first match in catalog order.
    pub fn find_model(&self, name: &str, category_hint: Option<&str>) -> LookupOutcome<'_> {
        let mut hint_missed = false;

        if let Some(hint) = category_hint {
            if let Some(category) = self.categories.iter().find(|c| c.name == hint) {
                if let Some(model) = category.models.iter().find(|m| m.name == name) {
                    return LookupOutcome::Found {
                        category,
                        model,
                        hint_missed: false,
                    };
                }
            }
            hint_missed = true;
        }

        for category in &self.categories {
            if let Some(model) = category.models.iter().find(|m| m.name == name) {
                return LookupOutcome::Found {
                    category,
                    model,
                    hint_missed,
                };
            }
        }

        LookupOutcome::NotFound { hint_missed }
    }

    /// Category/model counts plus total bytes on disk under the root.
    ///
    /// Unreadable entries are skipped; the byte count is best-effort.
    pub fn stats(&self) -> CatalogStats {
        let total_bytes = WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| entry.metadata().ok())
            .map(|metadata| metadata.len())
            .sum();

        CatalogStats {
            categories: self.categories.len(),
            models: self.model_count(),
            total_bytes,
        }
    }
}

/// Extract the first run of ASCII digits from a directory name.
pub fn extract_pack_id(name: &str) -> Option<String> {
    let start = name.find(|c: char| c.is_ascii_digit())?;
    let digits: String = name[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    Some(digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, pack_id: Option<&str>, description: Option<&str>) -> ModelEntry {
        ModelEntry {
            name: name.to_string(),
            path: PathBuf::from(name),
            pack_id: pack_id.map(String::from),
            thumbnail: None,
            description: description.map(|text| Description {
                path: PathBuf::from("readme.md"),
                text: text.to_string(),
            }),
            model_files: Vec::new(),
        }
    }

    #[test]
    fn test_extract_pack_id() {
        assert_eq!(extract_pack_id("thing_12345"), Some("12345".to_string()));
        assert_eq!(extract_pack_id("12345_benchy"), Some("12345".to_string()));
        assert_eq!(extract_pack_id("v2_rev3"), Some("2".to_string()));
        assert_eq!(extract_pack_id("benchy"), None);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(ModelFormat::from_extension("STL"), Some(ModelFormat::Stl));
        assert_eq!(ModelFormat::from_extension("obj"), Some(ModelFormat::Obj));
        assert_eq!(
            ModelFormat::from_extension("3MF"),
            Some(ModelFormat::ThreeMf)
        );
        assert_eq!(ModelFormat::from_extension("gcode"), None);
    }

    #[test]
    fn test_matches_filter_fields() {
        let model = entry("thing_12345", Some("12345"), Some("A calibration cube"));

        assert!(model.matches_filter(""));
        assert!(model.matches_filter("THING"));
        assert!(model.matches_filter("123"));
        assert!(model.matches_filter("calibration"));
        assert!(!model.matches_filter("benchy"));
    }

    #[test]
    fn test_find_model_hint_semantics() {
        let catalog = Catalog {
            root: PathBuf::from("/library"),
            categories: vec![
                Category {
                    name: "Tools".to_string(),
                    models: vec![entry("wrench", None, None)],
                },
                Category {
                    name: "Toys".to_string(),
                    models: vec![entry("benchy", Some("42"), None)],
                },
            ],
        };

        // Hit inside the hinted category.
        match catalog.find_model("wrench", Some("Tools")) {
            LookupOutcome::Found {
                category,
                hint_missed,
                ..
            } => {
                assert_eq!(category.name, "Tools");
                assert!(!hint_missed);
            }
            _ => panic!("expected a hit in the hinted category"),
        }

        // Miss in the hint, hit elsewhere.
        match catalog.find_model("benchy", Some("Tools")) {
            LookupOutcome::Found {
                category,
                hint_missed,
                ..
            } => {
                assert_eq!(category.name, "Toys");
                assert!(hint_missed);
            }
            _ => panic!("expected a fallback hit"),
        }

        // Miss everywhere.
        assert!(matches!(
            catalog.find_model("teapot", None),
            LookupOutcome::NotFound { hint_missed: false }
        ));
        assert!(matches!(
            catalog.find_model("teapot", Some("Ships")),
            LookupOutcome::NotFound { hint_missed: true }
        ));
    }
}
