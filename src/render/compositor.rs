use chrono::{DateTime, Duration, Local};
use image::RgbaImage;
use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::debug;

use crate::{
    filters::{catalog::FilterId, grain, vignette},
    foundation::core::{PlacementRect, Rgb},
    foundation::error::{CollageError, CollageResult},
    layout::collage::{LayoutKind, LayoutResult, compute_layout},
    render::{surface::Surface, text},
};

// Timestamp inset from a placement's bottom-right corner.
const TIMESTAMP_INSET_X: u32 = 15;
const TIMESTAMP_INSET_Y: u32 = 14;

const BRAND_SCALE: u32 = 2;

/// The compositor's sole external input: decoded photos in capture order
/// plus the user's layout, frame color, and filter choices.
///
/// The caller owns the images; the compositor only reads their pixels.
#[derive(Clone, Copy, Debug)]
pub struct RenderRequest<'a> {
    /// Decoded photos in capture order. Must be non-empty with non-zero
    /// dimensions; position determines placement and timestamp offset.
    pub images: &'a [RgbaImage],
    /// Tile arrangement on the canvas.
    pub layout: LayoutKind,
    /// Solid background / frame color.
    pub frame_color: Rgb,
    /// Visual style applied to each photo.
    pub filter: FilterId,
}

/// Product-tunable knobs of the decoration passes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Seconds added per photo index to the synthetic capture time shown in
    /// the timestamp overlay. Cosmetic: no real capture time reaches the
    /// engine, so a burst is approximated from the render time.
    pub timestamp_offset_secs: i64,
    /// Wordmark drawn in the reserved bottom space. Empty disables branding.
    pub brand_mark: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            timestamp_offset_secs: 3,
            brand_mark: "PHOTOBOOTH".to_string(),
        }
    }
}

/// Render a collage with default options, the wall clock, and OS entropy
/// for the grain pass.
///
/// Each call is a fresh, total function of its request: nothing is cached
/// or shared across calls. Repeated calls with identical inputs produce
/// pixel-identical output except for the timestamp text and the grain
/// noise; use [`render_with`] to pin both.
pub fn render(req: &RenderRequest<'_>) -> CollageResult<Surface> {
    render_with(
        req,
        &RenderOptions::default(),
        Local::now(),
        &mut StdRng::from_os_rng(),
    )
}

/// Render a collage with explicit options, render time, and grain RNG.
///
/// Steps, strictly ordered: resolve the filter descriptor, compute the
/// layout from the image count and the first image's aspect ratio, allocate
/// and fill the surface with the frame color, then for each image in order
/// blit it filtered, grain it, vignette it, and stamp its timestamp;
/// finally draw the branding overlay. Timestamp and branding render in
/// true color: the color transform is scoped to the blit and cannot leak.
#[tracing::instrument(skip_all, fields(layout = ?req.layout, filter = ?req.filter, images = req.images.len()))]
pub fn render_with<R: Rng + ?Sized>(
    req: &RenderRequest<'_>,
    opts: &RenderOptions,
    now: DateTime<Local>,
    rng: &mut R,
) -> CollageResult<Surface> {
    validate_images(req.images)?;

    let descriptor = req.filter.descriptor();
    let first = &req.images[0];
    let aspect_ratio = f64::from(first.width()) / f64::from(first.height());
    let layout = compute_layout(req.layout, req.images.len(), aspect_ratio);

    let mut surface = Surface::new(layout.canvas)?;
    surface.fill(req.frame_color);
    debug!(
        width = layout.canvas.width,
        height = layout.canvas.height,
        placements = layout.placements.len(),
        "compositing collage"
    );

    // zip() drops images beyond the placement list, which is how the
    // horizontal triple truncates counts above three.
    for (i, (img, rect)) in req
        .images
        .iter()
        .zip(layout.placements.iter().copied())
        .enumerate()
    {
        surface.blit_filtered(img, rect, descriptor.color_ops);
        grain::apply_grain(&mut surface, rect, descriptor.grain_intensity, rng);
        vignette::apply_vignette(&mut surface, rect, descriptor.vignette_strength);

        let captured = now + Duration::seconds(opts.timestamp_offset_secs * i as i64);
        draw_timestamp(&mut surface, rect, captured);
    }

    draw_branding(&mut surface, &layout, &opts.brand_mark);
    Ok(surface)
}

fn validate_images(images: &[RgbaImage]) -> CollageResult<()> {
    if images.is_empty() {
        return Err(CollageError::invalid_input(
            "image sequence must be non-empty",
        ));
    }
    for (i, img) in images.iter().enumerate() {
        if img.width() == 0 || img.height() == 0 {
            return Err(CollageError::invalid_input(format!(
                "image {i} has zero dimensions ({}x{})",
                img.width(),
                img.height()
            )));
        }
    }
    Ok(())
}

fn draw_timestamp(surface: &mut Surface, rect: PlacementRect, captured: DateTime<Local>) {
    let stamp = captured.format("%d %m %y").to_string();
    let w = text::text_width(&stamp, 1);
    let x = i64::from(rect.right()) - i64::from(TIMESTAMP_INSET_X + w);
    let y = i64::from(rect.bottom()) - i64::from(TIMESTAMP_INSET_Y + text::GLYPH_HEIGHT);
    text::draw_led_text(surface, &stamp, x, y, 1);
}

fn draw_branding(surface: &mut Surface, layout: &LayoutResult, mark: &str) {
    if mark.is_empty() {
        return;
    }
    let w = text::text_width(mark, BRAND_SCALE);
    let h = text::GLYPH_HEIGHT * BRAND_SCALE;
    let x = i64::from(layout.canvas.width.saturating_sub(w)) / 2;
    let band_top = layout.canvas.height.saturating_sub(layout.bottom_space);
    let y = i64::from(band_top + layout.bottom_space.saturating_sub(h) / 2);
    text::draw_led_text(surface, mark, x, y, BRAND_SCALE);
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
