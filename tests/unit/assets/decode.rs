use super::*;
use std::io::Cursor;

fn png_bytes(w: u32, h: u32) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba([12, 34, 56, 255]));
    let mut out = Cursor::new(Vec::new());
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut out, image::ImageFormat::Png)
        .unwrap();
    out.into_inner()
}

#[test]
fn decodes_png_to_rgba8() {
    let img = decode_image(&png_bytes(7, 5)).unwrap();
    assert_eq!(img.dimensions(), (7, 5));
    assert_eq!(img.get_pixel(3, 2).0, [12, 34, 56, 255]);
}

#[test]
fn garbage_bytes_fail_with_context() {
    let err = decode_image(b"definitely not an image").unwrap_err();
    assert!(err.to_string().contains("decode image"));
}
