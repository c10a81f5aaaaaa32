use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::foundation::core::{CanvasSize, PlacementRect};

// Photo tiles are fixed squares; source aspect ratio does not change them.
const TILE: u32 = 480;
const GAP: u32 = 60;

// Vertical strip chrome.
const STRIP_SIDE_PADDING: u32 = 80;
const STRIP_TOP_PADDING: u32 = 40;
const STRIP_BOTTOM_SPACE: u32 = 120;

// Grid and horizontal-triple chrome.
const GRID_PADDING: u32 = 60;
const GRID_BOTTOM_SPACE: u32 = 100;

/// The chosen arrangement of photo tiles on the output canvas.
///
/// Five public tags map onto three geometries: the vertical strip (which
/// accepts any count and doubles as the fallback), the 2-column grid, and
/// the fixed horizontal triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    /// Vertical strip; any photo count >= 1.
    ClassicStrip,
    /// 2-column grid for 4 photos.
    #[serde(rename = "grid-2x2")]
    Grid2x2,
    /// 2-column grid for 6 photos.
    #[serde(rename = "grid-2x3")]
    Grid2x3,
    /// 2-column grid for 8 photos.
    #[serde(rename = "grid-2x4")]
    Grid2x4,
    /// Three tiles side by side; extra photos are dropped.
    #[serde(rename = "grid-3x1")]
    Grid3x1,
}

impl LayoutKind {
    /// Resolve a string tag against the known layouts.
    ///
    /// Unknown tags fall back to the vertical strip (a soft fallback
    /// reported via `tracing`, never an error).
    pub fn resolve(tag: &str) -> LayoutKind {
        match tag.trim().to_ascii_lowercase().as_str() {
            "classic-strip" => LayoutKind::ClassicStrip,
            "grid-2x2" => LayoutKind::Grid2x2,
            "grid-2x3" => LayoutKind::Grid2x3,
            "grid-2x4" => LayoutKind::Grid2x4,
            "grid-3x1" => LayoutKind::Grid3x1,
            other => {
                warn!(tag = other, "unknown layout tag, using the vertical strip");
                LayoutKind::ClassicStrip
            }
        }
    }
}

/// Canvas size plus ordered placement rectangles, one per placed image.
///
/// Computed fresh on every render call; never cached. A layout or photo
/// count change requires recomputation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutResult {
    /// Output canvas dimensions.
    pub canvas: CanvasSize,
    /// Destination rectangles in source-image order.
    pub placements: Vec<PlacementRect>,
    /// Height of the bottom band reserved for branding/timestamp clearance.
    pub bottom_space: u32,
}

/// Compute the canvas size and placement rectangles for a collage.
///
/// Deterministic and side-effect-free. `aspect_ratio` is the first image's
/// width over height; the current policy renders every tile as a fixed
/// square regardless, so the parameter is accepted but unused.
///
/// `image_count = 0` yields zero placements and the padding-only minimum
/// canvas rather than an error.
pub fn compute_layout(kind: LayoutKind, image_count: usize, aspect_ratio: f64) -> LayoutResult {
    let _ = aspect_ratio;
    match kind {
        LayoutKind::ClassicStrip => strip_layout(image_count),
        LayoutKind::Grid2x2 | LayoutKind::Grid2x3 | LayoutKind::Grid2x4 => {
            grid_layout(image_count, 2)
        }
        LayoutKind::Grid3x1 => triple_layout(image_count),
    }
}

fn strip_layout(count: usize) -> LayoutResult {
    let n = count as u32;
    let width = TILE + STRIP_SIDE_PADDING * 2;
    let height = STRIP_TOP_PADDING
        + TILE * n
        + GAP * n.saturating_sub(1)
        + STRIP_BOTTOM_SPACE
        + GAP;

    let placements = (0..n)
        .map(|i| PlacementRect {
            x: STRIP_SIDE_PADDING,
            y: STRIP_TOP_PADDING + i * (TILE + GAP),
            width: TILE,
            height: TILE,
        })
        .collect();

    LayoutResult {
        canvas: CanvasSize { width, height },
        placements,
        bottom_space: STRIP_BOTTOM_SPACE,
    }
}

fn grid_layout(count: usize, columns: u32) -> LayoutResult {
    let n = count as u32;
    let rows = n.div_ceil(columns);
    let width = GRID_PADDING * 2 + TILE * columns + GAP * (columns - 1);
    let height = GRID_PADDING + TILE * rows + GAP * rows.saturating_sub(1) + GRID_BOTTOM_SPACE;

    let placements = (0..n)
        .map(|i| PlacementRect {
            x: GRID_PADDING + (i % columns) * (TILE + GAP),
            y: GRID_PADDING + (i / columns) * (TILE + GAP),
            width: TILE,
            height: TILE,
        })
        .collect();

    LayoutResult {
        canvas: CanvasSize { width, height },
        placements,
        bottom_space: GRID_BOTTOM_SPACE,
    }
}

fn triple_layout(count: usize) -> LayoutResult {
    // Exactly three slots; images beyond the third get no placement.
    let n = (count as u32).min(3);
    let width = GRID_PADDING * 2 + TILE * 3 + GAP * 2;
    let height = GRID_PADDING + TILE + GRID_BOTTOM_SPACE;

    let placements = (0..n)
        .map(|i| PlacementRect {
            x: GRID_PADDING + i * (TILE + GAP),
            y: GRID_PADDING,
            width: TILE,
            height: TILE,
        })
        .collect();

    LayoutResult {
        canvas: CanvasSize { width, height },
        placements,
        bottom_space: GRID_BOTTOM_SPACE,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/collage.rs"]
mod tests;
