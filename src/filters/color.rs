use crate::filters::catalog::ColorOp;

// BT.709 luma coefficients, shared by the saturate/grayscale mixes.
const LUMA_R: f32 = 0.2126;
const LUMA_G: f32 = 0.7152;
const LUMA_B: f32 = 0.0722;

/// Apply a color-op chain to one normalized RGB pixel, left to right.
///
/// Each op clamps its output to `[0, 1]` before the next op runs, matching
/// sequential adjustments to the same pixel source. An empty chain is the
/// identity.
pub fn apply_color_ops(ops: &[ColorOp], px: [f32; 3]) -> [f32; 3] {
    ops.iter().fold(px, |acc, &op| clamp3(apply_op(op, acc)))
}

/// Apply a color-op chain to one 8-bit RGB pixel.
pub fn apply_color_ops_u8(ops: &[ColorOp], px: [u8; 3]) -> [u8; 3] {
    if ops.is_empty() {
        return px;
    }
    let out = apply_color_ops(ops, [norm(px[0]), norm(px[1]), norm(px[2])]);
    [denorm(out[0]), denorm(out[1]), denorm(out[2])]
}

fn apply_op(op: ColorOp, [r, g, b]: [f32; 3]) -> [f32; 3] {
    match op {
        ColorOp::Contrast(v) => {
            let shift = 0.5 * (1.0 - v);
            [r * v + shift, g * v + shift, b * v + shift]
        }
        ColorOp::Brightness(v) => [r * v, g * v, b * v],
        ColorOp::Saturate(v) => {
            let gray = luma(r, g, b);
            [
                gray + (r - gray) * v,
                gray + (g - gray) * v,
                gray + (b - gray) * v,
            ]
        }
        ColorOp::Grayscale(v) => {
            let gray = luma(r, g, b);
            [
                r + (gray - r) * v,
                g + (gray - g) * v,
                b + (gray - b) * v,
            ]
        }
        ColorOp::Sepia(v) => {
            let sr = 0.393 * r + 0.769 * g + 0.189 * b;
            let sg = 0.349 * r + 0.686 * g + 0.168 * b;
            let sb = 0.272 * r + 0.534 * g + 0.131 * b;
            [
                r + (sr - r) * v,
                g + (sg - g) * v,
                b + (sb - b) * v,
            ]
        }
        ColorOp::HueRotate(deg) => {
            // Hue-rotation color matrix from the SVG/CSS filter-effects model.
            let (sin, cos) = deg.to_radians().sin_cos();
            [
                (0.213 + cos * 0.787 - sin * 0.213) * r
                    + (0.715 - cos * 0.715 - sin * 0.715) * g
                    + (0.072 - cos * 0.072 + sin * 0.928) * b,
                (0.213 - cos * 0.213 + sin * 0.143) * r
                    + (0.715 + cos * 0.285 + sin * 0.140) * g
                    + (0.072 - cos * 0.072 - sin * 0.283) * b,
                (0.213 - cos * 0.213 - sin * 0.787) * r
                    + (0.715 - cos * 0.715 + sin * 0.715) * g
                    + (0.072 + cos * 0.928 + sin * 0.072) * b,
            ]
        }
    }
}

fn luma(r: f32, g: f32, b: f32) -> f32 {
    LUMA_R * r + LUMA_G * g + LUMA_B * b
}

fn clamp3([r, g, b]: [f32; 3]) -> [f32; 3] {
    [r.clamp(0.0, 1.0), g.clamp(0.0, 1.0), b.clamp(0.0, 1.0)]
}

fn norm(c: u8) -> f32 {
    f32::from(c) / 255.0
}

fn denorm(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[cfg(test)]
#[path = "../../tests/unit/filters/color.rs"]
mod tests;
