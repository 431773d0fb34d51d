// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Printshelf Inc.

//! I/O module - geometry file loading

mod loader;

pub use loader::{load_model_file, load_stl, LoadOutcome};
