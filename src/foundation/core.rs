use crate::foundation::error::{CollageError, CollageResult};

pub use kurbo::{Point, Vec2};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CanvasSize {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
}

/// Destination box, in output pixel coordinates, where one source image is
/// drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlacementRect {
    /// Left edge in pixels.
    pub x: u32,
    /// Top edge in pixels.
    pub y: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PlacementRect {
    /// Exclusive right edge.
    pub fn right(self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge.
    pub fn bottom(self) -> u32 {
        self.y + self.height
    }

    /// Geometric center of the rectangle.
    pub fn center(self) -> Point {
        Point::new(
            f64::from(self.x) + f64::from(self.width) / 2.0,
            f64::from(self.y) + f64::from(self.height) / 2.0,
        )
    }

    /// True when the two rectangles share at least one pixel.
    pub fn intersects(self, other: PlacementRect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// True when this rectangle lies entirely inside `canvas`.
    pub fn fits_in(self, canvas: CanvasSize) -> bool {
        self.right() <= canvas.width && self.bottom() <= canvas.height
    }
}

/// Solid sRGB frame color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Construct from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a frame color from `#rgb` / `#rrggbb` hex or a small named set.
    pub fn parse(s: &str) -> CollageResult<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        match s.to_ascii_lowercase().as_str() {
            "white" => Ok(Self::new(0xff, 0xff, 0xff)),
            "black" => Ok(Self::new(0x00, 0x00, 0x00)),
            "gray" | "grey" => Ok(Self::new(0x80, 0x80, 0x80)),
            "silver" => Ok(Self::new(0xc0, 0xc0, 0xc0)),
            "red" => Ok(Self::new(0xff, 0x00, 0x00)),
            "orange" => Ok(Self::new(0xff, 0xa5, 0x00)),
            "yellow" => Ok(Self::new(0xff, 0xff, 0x00)),
            "green" => Ok(Self::new(0x00, 0x80, 0x00)),
            "blue" => Ok(Self::new(0x00, 0x00, 0xff)),
            "purple" => Ok(Self::new(0x80, 0x00, 0x80)),
            "pink" => Ok(Self::new(0xff, 0xc0, 0xcb)),
            "cream" => Ok(Self::new(0xff, 0xfd, 0xd0)),
            other => Err(CollageError::invalid_input(format!(
                "unknown color \"{other}\" (expected #rgb, #rrggbb, or a named color)"
            ))),
        }
    }
}

impl std::str::FromStr for Rgb {
    type Err = CollageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn parse_hex(s: &str) -> CollageResult<Rgb> {
    fn hex_byte(pair: &str) -> CollageResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| CollageError::invalid_input(format!("invalid hex byte \"{pair}\"")))
    }

    fn hex_nibble(ch: &str) -> CollageResult<u8> {
        // #abc expands to #aabbcc
        let v = u8::from_str_radix(ch, 16)
            .map_err(|_| CollageError::invalid_input(format!("invalid hex digit \"{ch}\"")))?;
        Ok(v * 17)
    }

    match s.len() {
        3 => Ok(Rgb::new(
            hex_nibble(&s[0..1])?,
            hex_nibble(&s[1..2])?,
            hex_nibble(&s[2..3])?,
        )),
        6 => Ok(Rgb::new(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
        )),
        _ => Err(CollageError::invalid_input(
            "hex color must be #rgb or #rrggbb (case-insensitive)",
        )),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
