//! Output panel settings gathered for the snapshot file.

use crate::scene::{FrameSettings, RenderSettings};
use renderdock_common::{OutputFormat, RenderEngine};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    pub dimensions: Dimensions,
    pub output: OutputFile,
    pub metadata: Metadata,
    pub stereoscopy: Stereoscopy,
    pub postprocessing: PostProcessing,
    pub renderer: RenderEngine,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub resolution: Resolution,
    pub aspect: Aspect,
    pub border: bool,
    /// Only meaningful when rendering a border region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<bool>,
    pub frame: FrameInfo,
    pub time_remapping: TimeRemapping,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub x: u32,
    pub y: u32,
    pub percentage: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInfo {
    pub start: i32,
    pub end: i32,
    pub step: i32,
    pub rate: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRemapping {
    pub old: i32,
    pub new: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputFile {
    pub path: String,
    pub overwrite: bool,
    pub placeholders: bool,
    pub file_extensions: bool,
    pub cache_result: bool,
    pub file_format: OutputFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_depth: Option<String>,
    /// Compression level for lossless formats, quality for JPEG.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compression: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub views_format: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub date: bool,
    pub time: bool,
    pub render_time: bool,
    pub frame: bool,
    pub frame_range: bool,
    pub memory: bool,
    pub hostname: bool,
    pub camera: bool,
    pub lens: bool,
    pub scene: bool,
    pub marker: bool,
    pub filename: bool,
    pub strip_name: bool,
    pub use_strip_metadata: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note_text: Option<String>,
    pub burn_into_image: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draw_labels: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_color: Option<[f32; 4]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<[f32; 4]>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stereoscopy {
    #[serde(rename = "use")]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup_stereo_mode: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub views: Vec<ViewRecord>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewRecord {
    pub name: String,
    pub used: bool,
    pub suffix: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PostProcessing {
    pub compositing: bool,
    pub sequencer: bool,
    pub dither: f32,
}

impl OutputSettings {
    pub fn gather(render: &RenderSettings, frames: &FrameSettings) -> Self {
        Self {
            dimensions: Dimensions {
                resolution: Resolution {
                    x: render.resolution_x,
                    y: render.resolution_y,
                    percentage: render.resolution_percentage,
                },
                aspect: Aspect {
                    x: render.pixel_aspect_x,
                    y: render.pixel_aspect_y,
                },
                border: render.use_border,
                crop: render.use_border.then_some(render.use_crop_to_border),
                frame: FrameInfo {
                    start: frames.frame_start,
                    end: frames.frame_end,
                    step: frames.frame_step,
                    rate: render.fps,
                },
                time_remapping: TimeRemapping {
                    old: render.frame_map_old,
                    new: render.frame_map_new,
                },
            },
            output: output_file(render),
            metadata: metadata(render),
            stereoscopy: stereoscopy(render),
            postprocessing: PostProcessing {
                compositing: render.use_compositing,
                sequencer: render.use_sequencer,
                dither: render.dither_intensity,
            },
            renderer: render.engine,
        }
    }
}

fn output_file(render: &RenderSettings) -> OutputFile {
    let image = &render.image_settings;

    let (color, color_depth, compression) = match image.file_format {
        OutputFormat::Png | OutputFormat::Tiff => (
            Some(image.color_mode.clone()),
            Some(image.color_depth.clone()),
            Some(image.compression),
        ),
        OutputFormat::Jpeg => (Some(image.color_mode.clone()), None, Some(image.quality)),
        OutputFormat::Bmp => (Some(image.color_mode.clone()), None, None),
        _ => (None, None, None),
    };

    OutputFile {
        path: render.filepath.clone(),
        overwrite: render.use_overwrite,
        placeholders: render.use_placeholder,
        file_extensions: render.use_file_extension,
        cache_result: render.use_render_cache,
        file_format: image.file_format,
        color,
        color_depth,
        compression,
        views_format: render.use_multiview.then(|| image.views_format.clone()),
    }
}

fn metadata(render: &RenderSettings) -> Metadata {
    let stamp = &render.stamp;
    let burn = stamp.use_stamp;

    Metadata {
        date: stamp.use_stamp_date,
        time: stamp.use_stamp_time,
        render_time: stamp.use_stamp_render_time,
        frame: stamp.use_stamp_frame,
        frame_range: stamp.use_stamp_frame_range,
        memory: stamp.use_stamp_memory,
        hostname: stamp.use_stamp_hostname,
        camera: stamp.use_stamp_camera,
        lens: stamp.use_stamp_lens,
        scene: stamp.use_stamp_scene,
        marker: stamp.use_stamp_marker,
        filename: stamp.use_stamp_filename,
        strip_name: stamp.use_stamp_sequencer_strip,
        use_strip_metadata: stamp.use_stamp_strip_meta,
        note_text: stamp
            .use_stamp_strip_meta
            .then(|| stamp.stamp_note_text.clone()),
        burn_into_image: burn,
        font_size: burn.then_some(stamp.stamp_font_size),
        draw_labels: burn.then_some(stamp.use_stamp_labels),
        text_color: burn.then_some(stamp.stamp_foreground),
        background: burn.then_some(stamp.stamp_background),
    }
}

fn stereoscopy(render: &RenderSettings) -> Stereoscopy {
    if !render.use_multiview {
        return Stereoscopy {
            enabled: false,
            setup_stereo_mode: None,
            views: Vec::new(),
        };
    }

    let multiview = render.views_format == "MULTIVIEW";
    let views = render
        .views
        .iter()
        .map(|view| ViewRecord {
            name: view.name.clone(),
            used: view.enabled,
            suffix: if multiview {
                view.camera_suffix.clone()
            } else {
                view.file_suffix.clone()
            },
        })
        .collect();

    Stereoscopy {
        enabled: true,
        setup_stereo_mode: Some(render.views_format.clone()),
        views,
    }
}
