use super::*;

fn close(a: [f32; 3], b: [f32; 3]) -> bool {
    a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-4)
}

#[test]
fn empty_chain_is_identity() {
    let px = [0.25, 0.5, 0.75];
    assert_eq!(apply_color_ops(&[], px), px);
    assert_eq!(apply_color_ops_u8(&[], [10, 20, 30]), [10, 20, 30]);
}

#[test]
fn brightness_scales_channels() {
    let out = apply_color_ops(&[ColorOp::Brightness(2.0)], [0.2, 0.3, 0.6]);
    assert!(close(out, [0.4, 0.6, 1.0])); // blue clamps
}

#[test]
fn contrast_below_one_pulls_toward_mid_gray() {
    let out = apply_color_ops(&[ColorOp::Contrast(0.5)], [0.0, 0.5, 1.0]);
    assert!(close(out, [0.25, 0.5, 0.75]));
}

#[test]
fn contrast_one_is_identity() {
    let px = [0.1, 0.4, 0.9];
    assert!(close(apply_color_ops(&[ColorOp::Contrast(1.0)], px), px));
}

#[test]
fn grayscale_full_equalizes_channels() {
    let [r, g, b] = apply_color_ops(&[ColorOp::Grayscale(1.0)], [1.0, 0.0, 0.0]);
    assert!((r - g).abs() < 1e-6 && (g - b).abs() < 1e-6);
    assert!((r - 0.2126).abs() < 1e-4); // BT.709 red luma
}

#[test]
fn saturate_zero_matches_full_grayscale() {
    let px = [0.8, 0.3, 0.1];
    let desat = apply_color_ops(&[ColorOp::Saturate(0.0)], px);
    let gray = apply_color_ops(&[ColorOp::Grayscale(1.0)], px);
    assert!(close(desat, gray));
}

#[test]
fn saturate_one_is_identity() {
    let px = [0.8, 0.3, 0.1];
    assert!(close(apply_color_ops(&[ColorOp::Saturate(1.0)], px), px));
}

#[test]
fn sepia_full_on_white_hits_the_matrix_row_sums() {
    let out = apply_color_ops(&[ColorOp::Sepia(1.0)], [1.0, 1.0, 1.0]);
    // Row sums 1.351 / 1.203 / 0.937, clamped per stage.
    assert!(close(out, [1.0, 1.0, 0.937]));
}

#[test]
fn sepia_zero_is_identity() {
    let px = [0.2, 0.6, 0.4];
    assert!(close(apply_color_ops(&[ColorOp::Sepia(0.0)], px), px));
}

#[test]
fn hue_rotate_zero_is_identity() {
    let px = [0.3, 0.5, 0.7];
    assert!(close(apply_color_ops(&[ColorOp::HueRotate(0.0)], px), px));
}

#[test]
fn hue_rotate_full_turn_returns_home() {
    let px = [0.3, 0.5, 0.7];
    assert!(close(apply_color_ops(&[ColorOp::HueRotate(360.0)], px), px));
}

#[test]
fn ops_compose_left_to_right() {
    // brightness then contrast differs from contrast then brightness
    let px = [0.2, 0.2, 0.2];
    let a = apply_color_ops(&[ColorOp::Brightness(2.0), ColorOp::Contrast(2.0)], px);
    let b = apply_color_ops(&[ColorOp::Contrast(2.0), ColorOp::Brightness(2.0)], px);
    assert!(close(a, [0.3, 0.3, 0.3]));
    assert!(!close(a, b));
}

#[test]
fn u8_path_rounds_symmetrically() {
    let out = apply_color_ops_u8(&[ColorOp::Brightness(1.0)], [0, 128, 255]);
    assert_eq!(out, [0, 128, 255]);
}
