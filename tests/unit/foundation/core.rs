use super::*;

#[test]
fn parses_long_hex() {
    assert_eq!(Rgb::parse("#1a1a2e").unwrap(), Rgb::new(0x1a, 0x1a, 0x2e));
    assert_eq!(Rgb::parse("#FFFFFF").unwrap(), Rgb::new(255, 255, 255));
}

#[test]
fn parses_short_hex() {
    assert_eq!(Rgb::parse("#f80").unwrap(), Rgb::new(0xff, 0x88, 0x00));
    assert_eq!(Rgb::parse("#000").unwrap(), Rgb::new(0, 0, 0));
}

#[test]
fn parses_named_colors() {
    assert_eq!(Rgb::parse("white").unwrap(), Rgb::new(255, 255, 255));
    assert_eq!(Rgb::parse("Black").unwrap(), Rgb::new(0, 0, 0));
    assert_eq!(Rgb::parse("cream").unwrap(), Rgb::new(0xff, 0xfd, 0xd0));
}

#[test]
fn rejects_malformed_colors() {
    assert!(Rgb::parse("#12345").is_err());
    assert!(Rgb::parse("#gggggg").is_err());
    assert!(Rgb::parse("chartreuse-ish").is_err());
}

#[test]
fn from_str_delegates_to_parse() {
    let c: Rgb = "#102030".parse().unwrap();
    assert_eq!(c, Rgb::new(0x10, 0x20, 0x30));
}

#[test]
fn rect_edges_and_center() {
    let r = PlacementRect {
        x: 80,
        y: 40,
        width: 480,
        height: 480,
    };
    assert_eq!(r.right(), 560);
    assert_eq!(r.bottom(), 520);
    assert_eq!(r.center(), Point::new(320.0, 280.0));
}

#[test]
fn rect_intersection_is_exclusive_at_edges() {
    let a = PlacementRect {
        x: 0,
        y: 0,
        width: 10,
        height: 10,
    };
    let touching = PlacementRect {
        x: 10,
        y: 0,
        width: 10,
        height: 10,
    };
    let overlapping = PlacementRect {
        x: 9,
        y: 9,
        width: 10,
        height: 10,
    };
    assert!(!a.intersects(touching));
    assert!(a.intersects(overlapping));
    assert!(a.intersects(a));
}

#[test]
fn rect_fits_in_canvas() {
    let canvas = CanvasSize {
        width: 100,
        height: 50,
    };
    let inside = PlacementRect {
        x: 90,
        y: 40,
        width: 10,
        height: 10,
    };
    let outside = PlacementRect {
        x: 91,
        y: 40,
        width: 10,
        height: 10,
    };
    assert!(inside.fits_in(canvas));
    assert!(!outside.fits_in(canvas));
}
