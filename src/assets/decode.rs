use anyhow::Context as _;
use image::RgbaImage;

use crate::foundation::error::CollageResult;

/// Decode encoded photo bytes into an RGBA8 raster image.
///
/// Decoding is the caller's job and happens before rendering: the
/// compositor itself performs no IO and consumes only already-decoded
/// images, in capture order.
pub fn decode_image(bytes: &[u8]) -> CollageResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Ok(dyn_img.to_rgba8())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
