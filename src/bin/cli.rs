// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Printshelf Inc.

//! Printshelf CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use printshelf::cli;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "printshelf")]
#[command(about = "Printshelf - catalog and preview downloaded 3D-model packages", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan a library root and list every category and model
    Scan {
        /// Library root directory
        root: PathBuf,

        /// Keep only models whose name, pack id, or description contains this text
        #[arg(short, long)]
        filter: Option<String>,
    },

    /// Show one model's details
    Show {
        /// Library root directory
        root: PathBuf,

        /// Model directory name
        model: String,

        /// Category to check first
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Prepare a geometry file for display
    Preview {
        /// Path to a .stl, .obj, or .3mf file
        file: PathBuf,

        /// Color style (viridis, plasma, inferno, magma, cividis, rainbow, solid-blue, solid-green)
        #[arg(short, long, default_value = "viridis")]
        style: String,

        /// Opacity, clamped to [0.1, 1.0]
        #[arg(short, long, default_value = "1.0")]
        opacity: f32,
    },

    /// Export the catalog snapshot as JSON
    Export {
        /// Library root directory
        root: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show version information
    Version,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    match &args.command {
        Commands::Scan { root, filter } => {
            cli::scan_command(root, filter.as_deref())?;
        }
        Commands::Show {
            root,
            model,
            category,
        } => {
            cli::show_command(root, model, category.as_deref())?;
        }
        Commands::Preview {
            file,
            style,
            opacity,
        } => {
            cli::preview_command(file, style, *opacity)?;
        }
        Commands::Export { root, output } => {
            cli::export_command(root, output.as_deref())?;
        }
        Commands::Version => {
            println!("Printshelf v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
