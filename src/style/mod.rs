// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Printshelf Inc.

//! Style module - color/opacity presets for mesh preview

use crate::geometry::Mesh;
use serde::{Deserialize, Serialize};

/// Opacity bounds applied to every style.
pub const OPACITY_MIN: f32 = 0.1;
pub const OPACITY_MAX: f32 = 1.0;

/// Solid RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Solid presets carried over from the browser's style picker.
pub const ROYAL_BLUE: Color = Color::rgb(65, 105, 225);
pub const MEDIUM_SEA_GREEN: Color = Color::rgb(60, 179, 113);

/// Named color/opacity preset for mesh display
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RenderStyle {
    Viridis,
    Plasma,
    Inferno,
    Magma,
    Cividis,
    Rainbow,
    Solid(Color),
}

impl RenderStyle {
    /// Lowercase gradient identifier understood by the renderer, `None` for
    /// solid styles.
    pub fn gradient_name(&self) -> Option<&'static str> {
        match self {
            RenderStyle::Viridis => Some("viridis"),
            RenderStyle::Plasma => Some("plasma"),
            RenderStyle::Inferno => Some("inferno"),
            RenderStyle::Magma => Some("magma"),
            RenderStyle::Cividis => Some("cividis"),
            RenderStyle::Rainbow => Some("rainbow"),
            RenderStyle::Solid(_) => None,
        }
    }

    /// Parse a user-facing style name, case-insensitively.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "viridis" => Some(RenderStyle::Viridis),
            "plasma" => Some(RenderStyle::Plasma),
            "inferno" => Some(RenderStyle::Inferno),
            "magma" => Some(RenderStyle::Magma),
            "cividis" => Some(RenderStyle::Cividis),
            "rainbow" => Some(RenderStyle::Rainbow),
            "solid-blue" => Some(RenderStyle::Solid(ROYAL_BLUE)),
            "solid-green" => Some(RenderStyle::Solid(MEDIUM_SEA_GREEN)),
            _ => None,
        }
    }
}

/// How the renderer should color the mesh
#[derive(Debug, Clone, PartialEq)]
pub enum ColorMode {
    /// Named gradient over a per-vertex scalar field.
    Gradient {
        name: &'static str,
        intensity: Vec<f32>,
    },
    /// One RGB triple for the whole mesh; no scalar field.
    Solid(Color),
}

/// Resolved color specification for one prepared mesh
#[derive(Debug, Clone, PartialEq)]
pub struct ColorSpec {
    pub mode: ColorMode,
    /// Clamped to `[OPACITY_MIN, OPACITY_MAX]`.
    pub opacity: f32,
}

/// Map a style and opacity onto a mesh.
///
/// Gradient styles take the vertex z coordinate as the scalar field; solid
/// styles replace the field with a single color. Pure and stateless.
pub fn resolve(style: RenderStyle, opacity: f32, mesh: &Mesh) -> ColorSpec {
    let opacity = if opacity.is_finite() {
        opacity.clamp(OPACITY_MIN, OPACITY_MAX)
    } else {
        OPACITY_MAX
    };

    let mode = match style.gradient_name() {
        Some(name) => ColorMode::Gradient {
            name,
            intensity: mesh.vertices.iter().map(|v| v.z).collect(),
        },
        None => match style {
            RenderStyle::Solid(color) => ColorMode::Solid(color),
            _ => unreachable!("gradient styles always carry a name"),
        },
    };

    ColorSpec { mode, opacity }
}
