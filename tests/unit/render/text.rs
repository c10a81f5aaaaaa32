use super::*;
use crate::foundation::core::{CanvasSize, Rgb};

fn black_surface(w: u32, h: u32) -> Surface {
    let mut s = Surface::new(CanvasSize {
        width: w,
        height: h,
    })
    .unwrap();
    s.fill(Rgb::new(0, 0, 0));
    s
}

fn lit_pixels(s: &Surface) -> Vec<(u32, u32)> {
    let mut out = Vec::new();
    for y in 0..s.height() {
        for x in 0..s.width() {
            if s.pixel(x, y)[..3] != [0, 0, 0] {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn text_width_counts_glyph_cells() {
    assert_eq!(text_width("", 1), 0);
    assert_eq!(text_width("01 02 26", 1), 8 * GLYPH_WIDTH);
    assert_eq!(text_width("AB", 3), 2 * GLYPH_WIDTH * 3);
}

#[test]
fn draw_text_stays_inside_the_glyph_box() {
    let mut s = black_surface(40, 40);
    draw_text(&mut s, "8", 10, 10, 1, [255, 255, 255], 1.0);
    let lit = lit_pixels(&s);
    assert!(!lit.is_empty(), "glyph should mark pixels");
    for (x, y) in lit {
        assert!((10..10 + GLYPH_WIDTH).contains(&x), "x {x}");
        assert!((10..10 + GLYPH_HEIGHT).contains(&y), "y {y}");
    }
}

#[test]
fn scale_doubles_the_footprint() {
    let mut s1 = black_surface(80, 80);
    let mut s2 = black_surface(80, 80);
    draw_text(&mut s1, "0", 0, 0, 1, [255, 255, 255], 1.0);
    draw_text(&mut s2, "0", 0, 0, 2, [255, 255, 255], 1.0);
    assert_eq!(lit_pixels(&s2).len(), 4 * lit_pixels(&s1).len());
}

#[test]
fn offscreen_text_is_clipped_without_panicking() {
    let mut s = black_surface(10, 10);
    draw_text(&mut s, "42", -30, -30, 1, [255, 255, 255], 1.0);
    draw_text(&mut s, "42", 8, 8, 2, [255, 255, 255], 1.0);
}

#[test]
fn led_text_layers_glow_under_bright() {
    let mut s = black_surface(60, 40);
    draw_led_text(&mut s, "7", 20, 8, 1);
    let lit = lit_pixels(&s);
    assert!(!lit.is_empty());
    // The dilated glow pass reaches one pixel beyond the glyph box.
    for (x, y) in &lit {
        assert!((19..=20 + GLYPH_WIDTH).contains(x), "x {x}");
        assert!((7..=8 + GLYPH_HEIGHT).contains(y), "y {y}");
    }
    // At least one pixel carries the bright accent exactly (the top pass is
    // opaque), and at least one only the dimmer glow.
    assert!(lit.iter().any(|&(x, y)| {
        let p = s.pixel(x, y);
        [p[0], p[1], p[2]] == LED_BRIGHT
    }));
    assert!(lit.iter().any(|&(x, y)| {
        let p = s.pixel(x, y);
        [p[0], p[1], p[2]] != LED_BRIGHT
    }));
}
