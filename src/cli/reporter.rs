// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Printshelf Inc.

//! CLI output reporter with colored formatting

use crate::catalog::{Catalog, Category, ModelEntry};
use crate::geometry::Mesh;
use crate::style::ColorMode;
use crate::{NormalizeReport, Preview};
use colored::*;

/// CLI reporter for formatted output
pub struct Reporter;

impl Reporter {
    /// Print the whole catalog, category by category.
    pub fn report_catalog(catalog: &Catalog) {
        if catalog.categories.is_empty() {
            println!("{}", "No models found. Download a model to get started.".yellow());
            return;
        }

        for category in &catalog.categories {
            Self::report_category(category);
        }

        let stats = catalog.stats();
        println!("\n{}", "Statistics:".bold());
        println!("  {} {}", "Categories:".bright_black(), stats.categories);
        println!("  {} {}", "Models:".bright_black(), stats.models);
        println!(
            "  {} {:.1} MB",
            "Storage used:".bright_black(),
            stats.total_bytes as f64 / (1024.0 * 1024.0)
        );
    }

    fn report_category(category: &Category) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!(
            "{} {}",
            category.name.cyan().bold(),
            format!("({} models)", category.model_count()).bright_black()
        );
        println!("{}", "━".repeat(80).bright_black());

        for model in &category.models {
            let id = model.pack_id.as_deref().unwrap_or("-");
            println!(
                "  {} {} | {} geometry files",
                model.name.bold(),
                format!("(id {id})").bright_black(),
                model.model_count()
            );
        }
    }

    /// Print one model's details.
    pub fn report_model(category_name: &str, model: &ModelEntry) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "Model:".bold(), model.name.cyan());
        println!("{}", "━".repeat(80).bright_black());

        println!(
            "{} {}",
            "Pack ID:".bold(),
            model.pack_id.as_deref().unwrap_or("Unknown")
        );
        println!("{} {}", "Category:".bold(), category_name);
        println!("{} {}", "Geometry files:".bold(), model.model_count());
        println!("{} {}", "Location:".bold(), model.path.display());

        match &model.thumbnail {
            Some(path) => println!("{} {}", "Thumbnail:".bold(), path.display()),
            None => println!("{}", "No preview image available".yellow()),
        }

        for file in &model.model_files {
            println!(
                "  📄 {} ({})",
                file.relative_path.display(),
                file.format.label()
            );
        }

        match &model.description {
            Some(description) => {
                println!("\n{}", "Description:".bold());
                println!("{}", description.text);
                println!(
                    "{}",
                    format!("Source: {}", description.path.display()).bright_black()
                );
            }
            None => println!("\n{}", "No description or README file found.".yellow()),
        }
    }

    /// Warn that the hinted category did not contain the model.
    pub fn report_hint_miss(model_name: &str, category: &str) {
        println!(
            "{}",
            format!("Model '{model_name}' not found in the '{category}' category.").yellow()
        );
    }

    pub fn report_not_found(model_name: &str) {
        println!(
            "{}",
            format!("Model '{model_name}' not found in any category.").red()
        );
    }

    /// Print a prepared preview buffer's summary.
    pub fn report_preview(file: &str, preview: &Preview) {
        println!("\n{}", "━".repeat(80).bright_black());
        println!("{} {}", "File:".bold(), file.cyan());
        println!("{}", "━".repeat(80).bright_black());

        Self::report_mesh(&preview.mesh, &preview.report);

        match &preview.colors.mode {
            ColorMode::Gradient { name, .. } => {
                println!("{} {} gradient over height", "Color:".bold(), name)
            }
            ColorMode::Solid(color) => println!(
                "{} solid rgb({}, {}, {})",
                "Color:".bold(),
                color.r,
                color.g,
                color.b
            ),
        }
        println!("{} {:.1}", "Opacity:".bold(), preview.colors.opacity);

        println!(
            "\n{} {}",
            "✅".green(),
            "Mesh ready for rendering".green().bold()
        );
    }

    fn report_mesh(mesh: &Mesh, report: &NormalizeReport) {
        let bbox = mesh.bounding_box();
        let extents = bbox.extents();

        println!("{} {}", "Vertices:".bold(), mesh.vertex_count());
        println!("{} {}", "Triangles:".bold(), mesh.triangle_count());
        println!(
            "{} {:.2} × {:.2} × {:.2}",
            "Extents:".bold(),
            extents.x,
            extents.y,
            extents.z
        );
        println!("{} {:.4}", "Scale applied:".bold(), report.scale);

        if report.degenerate {
            println!(
                "{}",
                "Warning: degenerate geometry; mesh centered but not rescaled".yellow()
            );
        }
    }

    /// Print the download-only notice for formats without preview support.
    pub fn report_download_only(file: &str, format_label: &str) {
        println!(
            "{}",
            format!(
                "Preview for {format_label} files is currently only available for download. \
                 Download {file} to view it in your preferred 3D model viewer."
            )
            .blue()
        );
    }

    pub fn report_error(message: &str) {
        eprintln!("{} {}", "❌".red(), message.red().bold());
    }
}
