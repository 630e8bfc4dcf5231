//! Core type definitions for render engines, output formats and priorities.
//!
//! The host exposes all of these as free-form strings. Each enum here is the
//! closed set the submitter understands. Engines, output formats and priority
//! tiers parse case-insensitively, through `FromStr` and serde alike, and
//! reject anything else with [`Error::InvalidValue`]. The engine-specific
//! modes only accept the host's exact identifiers.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Render engine active on a scene. Serialized as its host identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RenderEngine {
    /// Path-tracing engine. The only tile-capable engine.
    Cycles,
    /// Real-time rasterizer.
    Eevee,
    /// Viewport-style solid shading engine.
    Workbench,
}

impl RenderEngine {
    /// Identifier used by the host application.
    pub fn host_id(&self) -> &'static str {
        match self {
            Self::Cycles => "CYCLES",
            Self::Eevee => "BLENDER_EEVEE",
            Self::Workbench => "BLENDER_WORKBENCH",
        }
    }

    /// Whether the engine renders in independent tiles.
    pub fn supports_tiles(&self) -> bool {
        matches!(self, Self::Cycles)
    }
}

impl fmt::Display for RenderEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.host_id())
    }
}

impl FromStr for RenderEngine {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CYCLES" => Ok(Self::Cycles),
            "BLENDER_EEVEE" | "BLENDER_EEVEE_NEXT" | "EEVEE" => Ok(Self::Eevee),
            "BLENDER_WORKBENCH" | "WORKBENCH" => Ok(Self::Workbench),
            _ => Err(Error::invalid_value("render engine", s)),
        }
    }
}

impl TryFrom<String> for RenderEngine {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<RenderEngine> for String {
    fn from(engine: RenderEngine) -> Self {
        engine.host_id().to_string()
    }
}

/// Image or movie format of rendered output.
///
/// On the wire a format is always its lower-case short name (`"png"`,
/// `"exr"`, `"tga"`), regardless of whether it came from the scene (host
/// identifiers such as `OPEN_EXR`) or from job options (`EXR`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum OutputFormat {
    Bmp,
    Iris,
    Png,
    Jpeg,
    Jpeg2000,
    Targa,
    TargaRaw,
    Cineon,
    Dpx,
    OpenExr,
    OpenExrMultilayer,
    Hdr,
    Tiff,
    WebP,
    Ffmpeg,
    AviJpeg,
    AviRaw,
}

impl OutputFormat {
    /// Lower-case name sent to the intake service.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bmp => "bmp",
            Self::Iris => "iris",
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Jpeg2000 => "jpeg2000",
            Self::Targa => "tga",
            Self::TargaRaw => "tga_raw",
            Self::Cineon => "cineon",
            Self::Dpx => "dpx",
            Self::OpenExr => "exr",
            Self::OpenExrMultilayer => "exr_multilayer",
            Self::Hdr => "hdr",
            Self::Tiff => "tiff",
            Self::WebP => "webp",
            Self::Ffmpeg => "ffmpeg",
            Self::AviJpeg => "avi_jpeg",
            Self::AviRaw => "avi_raw",
        }
    }

    /// Identifier used by the host's image settings.
    pub fn host_id(&self) -> &'static str {
        match self {
            Self::Bmp => "BMP",
            Self::Iris => "IRIS",
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Jpeg2000 => "JPEG2000",
            Self::Targa => "TARGA",
            Self::TargaRaw => "TARGA_RAW",
            Self::Cineon => "CINEON",
            Self::Dpx => "DPX",
            Self::OpenExr => "OPEN_EXR",
            Self::OpenExrMultilayer => "OPEN_EXR_MULTILAYER",
            Self::Hdr => "HDR",
            Self::Tiff => "TIFF",
            Self::WebP => "WEBP",
            Self::Ffmpeg => "FFMPEG",
            Self::AviJpeg => "AVI_JPEG",
            Self::AviRaw => "AVI_RAW",
        }
    }

    /// Whether the format produces a movie container rather than one file per frame.
    pub fn is_movie(&self) -> bool {
        matches!(self, Self::Ffmpeg | Self::AviJpeg | Self::AviRaw)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let format = match s.trim().to_ascii_uppercase().as_str() {
            "BMP" => Self::Bmp,
            "IRIS" | "RGB" => Self::Iris,
            "PNG" => Self::Png,
            "JPEG" | "JPG" => Self::Jpeg,
            "JPEG2000" | "JP2" => Self::Jpeg2000,
            "TARGA" | "TGA" => Self::Targa,
            "TARGA_RAW" | "TGA_RAW" => Self::TargaRaw,
            "CINEON" | "CIN" => Self::Cineon,
            "DPX" => Self::Dpx,
            "OPEN_EXR" | "EXR" => Self::OpenExr,
            "OPEN_EXR_MULTILAYER" | "EXR_MULTILAYER" => Self::OpenExrMultilayer,
            "HDR" => Self::Hdr,
            "TIFF" | "TIF" => Self::Tiff,
            "WEBP" => Self::WebP,
            "FFMPEG" => Self::Ffmpeg,
            "AVI_JPEG" => Self::AviJpeg,
            "AVI_RAW" => Self::AviRaw,
            _ => return Err(Error::invalid_value("file format", s)),
        };
        Ok(format)
    }
}

impl TryFrom<String> for OutputFormat {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<OutputFormat> for String {
    fn from(format: OutputFormat) -> Self {
        format.as_str().to_string()
    }
}

/// Service tier a job is queued under.
///
/// Serialized as its lower-case name; deserialized through `FromStr`, so the
/// host's enum ids and any casing are accepted too.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum PriorityTier {
    /// Lowest tier, the default.
    #[default]
    Standard,
    Business,
    Premium,
}

impl PriorityTier {
    /// Numeric priority transmitted for this tier.
    pub fn value(&self) -> u32 {
        match self {
            Self::Standard => 0,
            Self::Business => 1,
            Self::Premium => 2,
        }
    }

    /// All tiers, lowest first.
    pub fn all() -> [PriorityTier; 3] {
        [Self::Standard, Self::Business, Self::Premium]
    }
}

impl fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Business => write!(f, "business"),
            Self::Premium => write!(f, "premium"),
        }
    }
}

impl FromStr for PriorityTier {
    type Err = Error;

    /// Accepts tier names as well as the host's enum ids (`"0"`, `"1"`, `"2"`).
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "0" => Ok(Self::Standard),
            "business" | "1" => Ok(Self::Business),
            "premium" | "2" => Ok(Self::Premium),
            _ => Err(Error::invalid_value("priority tier", s)),
        }
    }
}

impl TryFrom<String> for PriorityTier {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<PriorityTier> for String {
    fn from(tier: PriorityTier) -> Self {
        tier.to_string()
    }
}

/// Light-path integration mode of the path-tracing engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Integrator {
    #[default]
    Path,
    BranchedPath,
}

/// Lighting model of the workbench engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkbenchLighting {
    #[default]
    Studio,
    Matcap,
    Flat,
}

impl WorkbenchLighting {
    /// Whether a studio light (HDRI or matcap) is selected for this model.
    pub fn uses_studio_light(&self) -> bool {
        matches!(self, Self::Studio | Self::Matcap)
    }
}

/// Object colouring mode of the workbench engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShadingColorType {
    #[default]
    Material,
    Object,
    Single,
    Random,
    Vertex,
    Texture,
}
