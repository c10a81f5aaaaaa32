use spleen_font::{FONT_12X24, PSF2Font};

use crate::render::surface::Surface;

/// Glyph cell width of the Spleen 12x24 face, in pixels.
pub const GLYPH_WIDTH: u32 = 12;
/// Glyph cell height of the Spleen 12x24 face, in pixels.
pub const GLYPH_HEIGHT: u32 = 24;

/// Accent color of the dilated glow pass.
pub const LED_GLOW: [u8; 3] = [0xff, 0x88, 0x00];
/// Accent color of the bright pass drawn on top.
pub const LED_BRIGHT: [u8; 3] = [0xff, 0xaa, 0x33];

const GLOW_ALPHA: f32 = 0.18;

/// Pixel width of `text` at the given integer glyph scale.
pub fn text_width(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * GLYPH_WIDTH * scale
}

/// Draw bitmap text with its top-left corner at `(x, y)`.
///
/// Glyphs come from the embedded Spleen 12x24 face, magnified by the integer
/// `scale`. Pixels falling outside the surface are clipped. This routine
/// never sees a color transform; text always renders in true color.
pub fn draw_text(surface: &mut Surface, text: &str, x: i64, y: i64, scale: u32, color: [u8; 3], alpha: f32) {
    let Ok(mut font) = PSF2Font::new(FONT_12X24) else {
        return;
    };
    let scale = scale.max(1);

    let mut pen_x = x;
    for ch in text.chars() {
        let utf8 = ch.to_string();
        if let Some(glyph) = font.glyph_for_utf8(utf8.as_bytes()) {
            for (gy, row) in glyph.enumerate() {
                for (gx, on) in row.enumerate() {
                    if !on {
                        continue;
                    }
                    stamp_block(
                        surface,
                        pen_x + (gx as u32 * scale) as i64,
                        y + (gy as u32 * scale) as i64,
                        scale,
                        color,
                        alpha,
                    );
                }
            }
        }
        pen_x += i64::from(GLYPH_WIDTH * scale);
    }
}

/// Draw text in the LED-display style: a dilated low-opacity glow pass in
/// one accent color directly under a narrower, brighter pass in a second.
pub fn draw_led_text(surface: &mut Surface, text: &str, x: i64, y: i64, scale: u32) {
    for dy in -1..=1_i64 {
        for dx in -1..=1_i64 {
            draw_text(surface, text, x + dx, y + dy, scale, LED_GLOW, GLOW_ALPHA);
        }
    }
    draw_text(surface, text, x, y, scale, LED_BRIGHT, 1.0);
}

fn stamp_block(surface: &mut Surface, x: i64, y: i64, scale: u32, color: [u8; 3], alpha: f32) {
    for sy in 0..i64::from(scale) {
        for sx in 0..i64::from(scale) {
            let px = x + sx;
            let py = y + sy;
            if px >= 0 && py >= 0 {
                surface.blend_pixel(px as u32, py as u32, color, alpha);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
