//! Photostrip is a photobooth collage compositing and filter-effects engine.
//!
//! Given an ordered set of decoded photos, a layout selection, a frame color,
//! and a filter id, it deterministically computes a canvas size and per-image
//! placement rectangles, then renders the final collage raster through a
//! strictly ordered multi-pass draw.
//!
//! # Pipeline overview
//!
//! 1. **Resolve**: filter id -> [`FilterDescriptor`] (unknown ids fall back to `none`)
//! 2. **Layout**: `(LayoutKind, image count, aspect ratio) -> LayoutResult` (pure, deterministic)
//! 3. **Composite**: background fill, then per image in capture order:
//!    filtered blit -> grain -> vignette -> LED timestamp
//! 4. **Brand**: wordmark overlay in the reserved bottom space
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **No IO in the engine**: photos are decoded up front by the caller
//!   (see [`decode_image`]); the compositor only reads pixels.
//! - **No hidden drawing state**: the color transform is an explicit
//!   parameter of the image blit, so timestamp and branding passes cannot
//!   inherit it.
//! - **Injectable randomness and clock**: [`render_with`] takes the grain
//!   RNG and the render time; [`render`] supplies OS entropy and the wall
//!   clock.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod filters;
mod foundation;
mod layout;
mod render;

pub use assets::decode::decode_image;
pub use filters::catalog::{ColorOp, FilterDescriptor, FilterId, catalog};
pub use filters::color::apply_color_ops;
pub use filters::grain::apply_grain;
pub use filters::vignette::{apply_vignette, vignette_sample};
pub use foundation::core::{CanvasSize, PlacementRect, Point, Rgb, Vec2};
pub use foundation::error::{CollageError, CollageResult};
pub use layout::collage::{LayoutKind, LayoutResult, compute_layout};
pub use render::compositor::{RenderOptions, RenderRequest, render, render_with};
pub use render::surface::Surface;
pub use render::text::{draw_led_text, draw_text, text_width};
