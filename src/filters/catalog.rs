use serde::{Deserialize, Serialize};
use tracing::warn;

/// A single named color adjustment with its numeric parameter.
///
/// Ops compose left to right as sequential adjustments to the same pixel;
/// each op clamps its output to the valid channel range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", content = "amount", rename_all = "kebab-case")]
pub enum ColorOp {
    /// Linear contrast around mid-gray; 1.0 is identity.
    Contrast(f32),
    /// Channel multiplier; 1.0 is identity.
    Brightness(f32),
    /// Saturation toward/away from luma; 1.0 is identity.
    Saturate(f32),
    /// Mix toward the sepia matrix; 0.0 is identity.
    Sepia(f32),
    /// Hue rotation in degrees; 0.0 is identity.
    HueRotate(f32),
    /// Mix toward luma gray; 0.0 is identity.
    Grayscale(f32),
}

/// Typed id of a catalog filter, resolvable from its string tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterId {
    /// Clean, unfiltered photo. Always present; the fallback for unknown ids.
    None,
    /// Warm nostalgic look with sunset tones.
    DramaticWarm,
    /// Faded 1970s print, washed-out and soft.
    OldFilm,
    /// Black-and-white, soft contrast, slightly cool-blue tint.
    SoftPhotoboothBw,
    /// Film camera direct-flash with center glow.
    FilmFlashStrip,
    /// Retro contact sheet scan, beige/sepia tint.
    StudioContactSheet,
    /// Late-90s disposable camera, yellow-green cast.
    #[serde(rename = "disposable-camera-1998")]
    DisposableCamera1998,
    /// Natural real-film feel, warm and gentle.
    EverydayFilm,
    /// Cinematic, slightly green shadows, lifted blacks.
    MoodyElevatorFilm,
}

impl FilterId {
    /// All catalog ids, in presentation order.
    pub const ALL: [FilterId; 9] = [
        FilterId::None,
        FilterId::DramaticWarm,
        FilterId::OldFilm,
        FilterId::SoftPhotoboothBw,
        FilterId::FilmFlashStrip,
        FilterId::StudioContactSheet,
        FilterId::DisposableCamera1998,
        FilterId::EverydayFilm,
        FilterId::MoodyElevatorFilm,
    ];

    /// Resolve a string id against the catalog.
    ///
    /// Unknown ids fall back to [`FilterId::None`] (a soft fallback reported
    /// via `tracing`, never an error surfaced to the user).
    pub fn resolve(id: &str) -> FilterId {
        match id.trim().to_ascii_lowercase().as_str() {
            "none" => FilterId::None,
            "dramatic-warm" => FilterId::DramaticWarm,
            "old-film" => FilterId::OldFilm,
            "soft-photobooth-bw" => FilterId::SoftPhotoboothBw,
            "film-flash-strip" => FilterId::FilmFlashStrip,
            "studio-contact-sheet" => FilterId::StudioContactSheet,
            "disposable-camera-1998" => FilterId::DisposableCamera1998,
            "everyday-film" => FilterId::EverydayFilm,
            "moody-elevator-film" => FilterId::MoodyElevatorFilm,
            other => {
                warn!(id = other, "unknown filter id, using the unfiltered fallback");
                FilterId::None
            }
        }
    }

    /// The canonical string tag of this id.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterId::None => "none",
            FilterId::DramaticWarm => "dramatic-warm",
            FilterId::OldFilm => "old-film",
            FilterId::SoftPhotoboothBw => "soft-photobooth-bw",
            FilterId::FilmFlashStrip => "film-flash-strip",
            FilterId::StudioContactSheet => "studio-contact-sheet",
            FilterId::DisposableCamera1998 => "disposable-camera-1998",
            FilterId::EverydayFilm => "everyday-film",
            FilterId::MoodyElevatorFilm => "moody-elevator-film",
        }
    }

    /// The immutable descriptor for this id.
    pub fn descriptor(self) -> &'static FilterDescriptor {
        CATALOG.iter().find(|d| d.id == self).unwrap_or(&CATALOG[0])
    }
}

/// The named bundle of color transform, grain, and vignette parameters
/// defining one visual style. Immutable once defined; resolved from the
/// fixed catalog by [`FilterId`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct FilterDescriptor {
    /// Catalog id.
    pub id: FilterId,
    /// Display name shown by the filter picker.
    pub name: &'static str,
    /// One-line description shown by the filter picker.
    pub description: &'static str,
    /// Color adjustments, applied left to right during the image blit.
    pub color_ops: &'static [ColorOp],
    /// Grain strength in `[0, 1]`; 0 disables grain.
    pub grain_intensity: f32,
    /// Vignette strength in `[-1, 1]`; 0 disables, negative inverts
    /// (bright center light-leak instead of dark edges).
    pub vignette_strength: f32,
}

/// The fixed, named filter catalog.
pub fn catalog() -> &'static [FilterDescriptor] {
    &CATALOG
}

static CATALOG: [FilterDescriptor; 9] = [
    FilterDescriptor {
        id: FilterId::None,
        name: "Original",
        description: "Clean, unfiltered photo",
        color_ops: &[],
        grain_intensity: 0.0,
        vignette_strength: 0.0,
    },
    FilterDescriptor {
        id: FilterId::DramaticWarm,
        name: "Dramatic Warm",
        description: "Warm nostalgic look with sunset tones",
        color_ops: &[
            ColorOp::Contrast(0.9),
            ColorOp::Brightness(0.98),
            ColorOp::Sepia(0.55),
            ColorOp::Saturate(0.95),
            ColorOp::HueRotate(-8.0),
        ],
        grain_intensity: 0.32,
        vignette_strength: 0.32,
    },
    FilterDescriptor {
        id: FilterId::OldFilm,
        name: "Old Film",
        description: "Faded 1970s print, washed-out and soft",
        color_ops: &[
            ColorOp::Contrast(0.78),
            ColorOp::Brightness(1.08),
            ColorOp::Saturate(0.75),
            ColorOp::Sepia(0.5),
        ],
        grain_intensity: 0.38,
        vignette_strength: 0.28,
    },
    FilterDescriptor {
        id: FilterId::SoftPhotoboothBw,
        name: "Soft Photobooth B&W",
        description: "Black-and-white, soft contrast, slightly cool-blue tint",
        color_ops: &[
            ColorOp::Grayscale(1.0),
            ColorOp::Brightness(1.02),
            ColorOp::Contrast(0.88),
            ColorOp::Sepia(0.1),
            ColorOp::HueRotate(6.0),
        ],
        grain_intensity: 0.28,
        vignette_strength: 0.28,
    },
    FilterDescriptor {
        id: FilterId::FilmFlashStrip,
        name: "Film Flash Strip",
        description: "Film camera direct-flash with center glow",
        color_ops: &[
            ColorOp::Contrast(0.92),
            ColorOp::Brightness(1.05),
            ColorOp::Saturate(0.9),
            ColorOp::Sepia(0.2),
        ],
        grain_intensity: 0.30,
        vignette_strength: 0.35,
    },
    FilterDescriptor {
        id: FilterId::StudioContactSheet,
        name: "Studio Contact Sheet",
        description: "Retro contact sheet scan, beige/sepia tint",
        color_ops: &[
            ColorOp::Contrast(0.8),
            ColorOp::Brightness(1.04),
            ColorOp::Saturate(0.82),
            ColorOp::Sepia(0.55),
            ColorOp::HueRotate(-4.0),
        ],
        grain_intensity: 0.40,
        vignette_strength: 0.22,
    },
    FilterDescriptor {
        id: FilterId::DisposableCamera1998,
        name: "Disposable Camera 1998",
        description: "Late-90s disposable camera, yellow-green cast",
        color_ops: &[
            ColorOp::Contrast(0.84),
            ColorOp::Brightness(1.06),
            ColorOp::Saturate(0.9),
            ColorOp::Sepia(0.45),
            ColorOp::HueRotate(-10.0),
        ],
        grain_intensity: 0.42,
        vignette_strength: 0.18,
    },
    FilterDescriptor {
        id: FilterId::EverydayFilm,
        name: "Everyday Film",
        description: "Natural real-film feel, warm and gentle",
        color_ops: &[
            ColorOp::Contrast(0.9),
            ColorOp::Brightness(1.02),
            ColorOp::Saturate(0.95),
            ColorOp::Sepia(0.25),
            ColorOp::HueRotate(-6.0),
        ],
        grain_intensity: 0.32,
        vignette_strength: 0.14,
    },
    FilterDescriptor {
        id: FilterId::MoodyElevatorFilm,
        name: "Moody Elevator Film",
        description: "Cinematic, slightly green shadows, lifted blacks",
        color_ops: &[
            ColorOp::Contrast(0.88),
            ColorOp::Brightness(0.95),
            ColorOp::Saturate(0.85),
            ColorOp::Sepia(0.3),
            ColorOp::HueRotate(14.0),
        ],
        grain_intensity: 0.40,
        vignette_strength: 0.36,
    },
];

#[cfg(test)]
#[path = "../../tests/unit/filters/catalog.rs"]
mod tests;
