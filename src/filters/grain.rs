use rand::Rng;

use crate::{foundation::core::PlacementRect, render::surface::Surface};

/// Add monochromatic film grain to a rectangular region of the surface.
///
/// Every pixel gets one independent uniform noise sample
/// `n = (u - 0.5) * intensity * 255`, added to the red, green, and blue
/// channels (never alpha) and clamped. The same scalar goes to all three
/// channels of a pixel, so the grain is luminance noise, not colored noise.
///
/// `intensity = 0` is a strict no-op: the region is left bit-identical.
/// The random source is injected so tests can seed it; production rendering
/// supplies OS entropy.
pub fn apply_grain<R: Rng + ?Sized>(
    surface: &mut Surface,
    rect: PlacementRect,
    intensity: f32,
    rng: &mut R,
) {
    if intensity <= 0.0 {
        return;
    }

    let x_end = rect.right().min(surface.width());
    let y_end = rect.bottom().min(surface.height());
    for y in rect.y..y_end {
        for x in rect.x..x_end {
            let n = (rng.random::<f32>() - 0.5) * intensity * 255.0;
            let px = surface.pixel_mut(x, y);
            for c in &mut px[..3] {
                *c = (f32::from(*c) + n).clamp(0.0, 255.0) as u8;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filters/grain.rs"]
mod tests;
