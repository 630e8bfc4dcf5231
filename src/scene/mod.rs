//! Read-only view of the host application's scene state.
//!
//! [`SceneSnapshotProvider`] is the only surface the extractor reads from.
//! The structs here mirror the host's settings groups field for field; they
//! carry no logic beyond defaults matching a fresh host scene.

mod document;

pub use document::SceneDocument;

use renderdock_common::paths::resolve_host_path;
use renderdock_common::{
    Integrator, OutputFormat, RenderEngine, ShadingColorType, WorkbenchLighting,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Read-only access to one scene, one method per settings group.
///
/// Implementations are either a binding onto a live host or a plain
/// in-memory value such as [`SceneDocument`].
pub trait SceneSnapshotProvider {
    /// Display name of the scene.
    fn scene_name(&self) -> &str;

    /// Path of the saved scene file as the host reports it, `None` when the
    /// scene has never been saved.
    fn scene_file(&self) -> Option<&str>;

    /// Global frame range of the scene.
    fn frames(&self) -> &FrameSettings;

    /// Render and output settings.
    fn render(&self) -> &RenderSettings;

    /// Colour management settings.
    fn color_management(&self) -> &ColorManagement;

    /// Path-tracing engine settings.
    fn cycles(&self) -> &CyclesSettings;

    /// Real-time engine settings.
    fn eevee(&self) -> &EeveeSettings;

    /// Workbench engine shading settings.
    fn workbench(&self) -> &WorkbenchShading;

    /// Every image registered on the scene, in host order.
    fn images(&self) -> &[ImageAsset];

    /// Installed add-ons.
    fn addons(&self) -> &[AddonInfo];

    /// Turn a possibly scene-relative host path into an absolute one.
    fn resolve_path(&self, raw: &str) -> Option<PathBuf> {
        let base_dir = self
            .scene_file()
            .and_then(|file| resolve_host_path(file, None))
            .and_then(|file| file.parent().map(Path::to_path_buf));
        resolve_host_path(raw, base_dir.as_deref())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameSettings {
    pub frame_start: i32,
    pub frame_end: i32,
    pub frame_step: i32,
}

impl Default for FrameSettings {
    fn default() -> Self {
        Self {
            frame_start: 1,
            frame_end: 250,
            frame_step: 1,
        }
    }
}

/// Render, dimension and output settings of a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub engine: RenderEngine,

    pub resolution_x: u32,
    pub resolution_y: u32,
    pub resolution_percentage: u32,
    pub pixel_aspect_x: f32,
    pub pixel_aspect_y: f32,
    pub use_border: bool,
    pub use_crop_to_border: bool,
    pub fps: u32,
    pub frame_map_old: i32,
    pub frame_map_new: i32,

    /// Tile size configured for the tile-capable engine.
    pub tile_x: u32,
    pub tile_y: u32,

    pub filepath: String,
    pub use_overwrite: bool,
    pub use_placeholder: bool,
    pub use_file_extension: bool,
    pub use_render_cache: bool,
    pub image_settings: ImageSettings,

    pub use_multiview: bool,
    /// Stereo setup mode, `STEREO_3D` or `MULTIVIEW`.
    pub views_format: String,
    pub views: Vec<RenderView>,

    pub stamp: StampSettings,

    pub use_compositing: bool,
    pub use_sequencer: bool,
    pub dither_intensity: f32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            engine: RenderEngine::Eevee,
            resolution_x: 1920,
            resolution_y: 1080,
            resolution_percentage: 100,
            pixel_aspect_x: 1.0,
            pixel_aspect_y: 1.0,
            use_border: false,
            use_crop_to_border: false,
            fps: 24,
            frame_map_old: 100,
            frame_map_new: 100,
            tile_x: 64,
            tile_y: 64,
            filepath: "/tmp/".to_string(),
            use_overwrite: true,
            use_placeholder: false,
            use_file_extension: true,
            use_render_cache: false,
            image_settings: ImageSettings::default(),
            use_multiview: false,
            views_format: "STEREO_3D".to_string(),
            views: Vec::new(),
            stamp: StampSettings::default(),
            use_compositing: true,
            use_sequencer: true,
            dither_intensity: 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageSettings {
    pub file_format: OutputFormat,
    pub color_mode: String,
    pub color_depth: String,
    /// Lossless compression level, 0–100.
    pub compression: u32,
    /// Lossy quality, 0–100.
    pub quality: u32,
    pub views_format: String,
}

impl Default for ImageSettings {
    fn default() -> Self {
        Self {
            file_format: OutputFormat::Png,
            color_mode: "RGBA".to_string(),
            color_depth: "8".to_string(),
            compression: 15,
            quality: 90,
            views_format: "INDIVIDUAL".to_string(),
        }
    }
}

/// One stereo/multi-view render view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderView {
    pub name: String,
    #[serde(rename = "use")]
    pub enabled: bool,
    pub file_suffix: String,
    pub camera_suffix: String,
}

/// Metadata stamp toggles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StampSettings {
    pub use_stamp_date: bool,
    pub use_stamp_time: bool,
    pub use_stamp_render_time: bool,
    pub use_stamp_frame: bool,
    pub use_stamp_frame_range: bool,
    pub use_stamp_memory: bool,
    pub use_stamp_hostname: bool,
    pub use_stamp_camera: bool,
    pub use_stamp_lens: bool,
    pub use_stamp_scene: bool,
    pub use_stamp_marker: bool,
    pub use_stamp_filename: bool,
    pub use_stamp_sequencer_strip: bool,
    pub use_stamp_strip_meta: bool,
    pub stamp_note_text: String,
    /// Burn the stamp into the rendered image.
    pub use_stamp: bool,
    pub stamp_font_size: u32,
    pub use_stamp_labels: bool,
    pub stamp_foreground: [f32; 4],
    pub stamp_background: [f32; 4],
}

impl Default for StampSettings {
    fn default() -> Self {
        Self {
            use_stamp_date: true,
            use_stamp_time: true,
            use_stamp_render_time: true,
            use_stamp_frame: true,
            use_stamp_frame_range: false,
            use_stamp_memory: false,
            use_stamp_hostname: false,
            use_stamp_camera: true,
            use_stamp_lens: false,
            use_stamp_scene: true,
            use_stamp_marker: false,
            use_stamp_filename: true,
            use_stamp_sequencer_strip: false,
            use_stamp_strip_meta: false,
            stamp_note_text: String::new(),
            use_stamp: false,
            stamp_font_size: 12,
            use_stamp_labels: true,
            stamp_foreground: [0.8, 0.8, 0.8, 1.0],
            stamp_background: [0.0, 0.0, 0.0, 0.25],
        }
    }
}

/// Display and view transform settings. Shared by every engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorManagement {
    pub display_device: String,
    pub view_transform: String,
    pub look: String,
    pub exposure: f32,
    pub gamma: f32,
    /// Colour space of the sequencer.
    pub sequencer: String,
}

impl Default for ColorManagement {
    fn default() -> Self {
        Self {
            display_device: "sRGB".to_string(),
            view_transform: "Filmic".to_string(),
            look: "None".to_string(),
            exposure: 0.0,
            gamma: 1.0,
            sequencer: "sRGB".to_string(),
        }
    }
}

/// Path-tracing engine settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CyclesSettings {
    pub progressive: Integrator,
    pub samples: u32,
    pub preview_samples: u32,

    pub diffuse_samples: u32,
    pub glossy_samples: u32,
    pub transmission_samples: u32,
    pub ao_samples: u32,
    pub mesh_light_samples: u32,
    pub subsurface_samples: u32,
    pub volume_samples: u32,

    pub max_bounces: u32,
    pub diffuse_bounces: u32,
    pub glossy_bounces: u32,
    pub transparent_max_bounces: u32,
    pub transmission_bounces: u32,
    pub volume_bounces: u32,

    pub sample_clamp_direct: f32,
    pub sample_clamp_indirect: f32,

    pub blur_glossy: f32,
    pub caustics_reflective: bool,
    pub caustics_refractive: bool,
}

impl Default for CyclesSettings {
    fn default() -> Self {
        Self {
            progressive: Integrator::Path,
            samples: 128,
            preview_samples: 32,
            diffuse_samples: 1,
            glossy_samples: 1,
            transmission_samples: 1,
            ao_samples: 1,
            mesh_light_samples: 1,
            subsurface_samples: 1,
            volume_samples: 1,
            max_bounces: 12,
            diffuse_bounces: 4,
            glossy_bounces: 4,
            transparent_max_bounces: 8,
            transmission_bounces: 12,
            volume_bounces: 0,
            sample_clamp_direct: 0.0,
            sample_clamp_indirect: 10.0,
            blur_glossy: 1.0,
            caustics_reflective: true,
            caustics_refractive: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EeveeSettings {
    pub taa_render_samples: u32,
    pub taa_samples: u32,
}

impl Default for EeveeSettings {
    fn default() -> Self {
        Self {
            taa_render_samples: 64,
            taa_samples: 16,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkbenchShading {
    pub light: WorkbenchLighting,
    pub studio_light: String,
    pub color_type: ShadingColorType,
    pub single_color: [f32; 3],
}

impl Default for WorkbenchShading {
    fn default() -> Self {
        Self {
            light: WorkbenchLighting::Studio,
            studio_light: "Default".to_string(),
            color_type: ShadingColorType::Material,
            single_color: [0.8, 0.8, 0.8],
        }
    }
}

/// An image datablock registered on the scene.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageAsset {
    pub name: String,
    /// Path as stored by the host, possibly `//`-relative.
    pub filepath: String,
    /// Number of datablocks referencing this image.
    pub users: u32,
    /// Image data is embedded in the scene file.
    pub packed: bool,
}

/// An installed host add-on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonInfo {
    pub name: String,
    #[serde(default)]
    pub version: Vec<u32>,
}
