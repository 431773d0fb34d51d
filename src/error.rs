// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Printshelf Inc.

//! Error types for catalog and geometry operations

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Printshelf operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    #[error("malformed geometry in {path}: {cause}")]
    MalformedGeometry { path: PathBuf, cause: String },

    #[error("mesh has no vertices")]
    EmptyMesh,

    #[error("I/O failure on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Build a `MalformedGeometry` error for a file, keeping the offending
    /// path so the caller can show a per-file message.
    pub fn malformed(path: impl Into<PathBuf>, cause: impl Into<String>) -> Self {
        Error::MalformedGeometry {
            path: path.into(),
            cause: cause.into(),
        }
    }
}

/// Result type alias for Printshelf operations
pub type Result<T> = std::result::Result<T, Error>;
