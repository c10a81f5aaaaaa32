use crate::{
    foundation::core::{PlacementRect, Point},
    render::surface::Surface,
};

// Radial gradient geometry: inner radius as a fraction of the region's
// corner-distance radius. Inside the inner radius the gradient pads with
// its first stop; outside the outer radius with its last.
const INNER_RADIUS_FRACTION: f64 = 0.3;

/// Sample the vignette overlay at normalized gradient offset `t` in `[0, 1]`.
///
/// Returns the overlay color and its alpha. Two modes, selected by the sign
/// of `strength` (magnitude `s`):
///
/// - normal (`strength > 0`): darkening black overlay,
///   alpha `0 -> 0.2*s -> s` across stops at offsets 0 / 0.5 / 1;
/// - inverted (`strength < 0`): brightening white overlay,
///   alpha `0.3*s -> 0.15*s -> 0` (a light-leak glow strongest at center).
pub fn vignette_sample(strength: f32, t: f32) -> ([u8; 3], f32) {
    let s = strength.abs();
    let t = t.clamp(0.0, 1.0);
    if strength >= 0.0 {
        ([0, 0, 0], stops_lerp(0.0, 0.2 * s, s, t))
    } else {
        ([255, 255, 255], stops_lerp(0.3 * s, 0.15 * s, 0.0, t))
    }
}

// Piecewise-linear interpolation over stops at offsets 0, 0.5, and 1.
fn stops_lerp(a0: f32, a_mid: f32, a1: f32, t: f32) -> f32 {
    if t < 0.5 {
        a0 + (a_mid - a0) * (t / 0.5)
    } else {
        a_mid + (a1 - a_mid) * ((t - 0.5) / 0.5)
    }
}

/// Shade a rectangular region with the radial vignette overlay.
///
/// The gradient is centered on the region, with inner radius 0.3x and outer
/// radius 1.0x of the center-to-corner distance, and is filled across the
/// entire region (not masked to the image silhouette). `strength = 0` is a
/// strict no-op.
pub fn apply_vignette(surface: &mut Surface, rect: PlacementRect, strength: f32) {
    if strength == 0.0 || rect.width == 0 || rect.height == 0 {
        return;
    }

    let center = rect.center();
    let outer = center.distance(Point::new(f64::from(rect.x), f64::from(rect.y)));
    let inner = outer * INNER_RADIUS_FRACTION;
    let span = outer - inner;

    let x_end = rect.right().min(surface.width());
    let y_end = rect.bottom().min(surface.height());
    for y in rect.y..y_end {
        for x in rect.x..x_end {
            let d = center.distance(Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5));
            let t = ((d - inner) / span).clamp(0.0, 1.0) as f32;
            let (color, alpha) = vignette_sample(strength, t);
            surface.blend_pixel(x, y, color, alpha);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/filters/vignette.rs"]
mod tests;
