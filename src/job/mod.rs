//! The job description sent to the intake service.
//!
//! A [`JobDescription`] is assembled once per submission from a [`JobDraft`]
//! and never mutated afterwards. Its JSON form is the wire payload: the
//! field set here is exactly what the intake service receives.

mod options;

pub use options::{JobOptions, PrioritySetting};

use crate::error::{Error, Result};
use crate::extract::EngineSettings;
use renderdock_common::OutputFormat;
use serde::{Deserialize, Serialize};

/// Inclusive range of frames to render. Not checked for `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRange {
    pub start: i32,
    pub end: i32,
}

/// Tile configuration of a job.
///
/// Width and height are only present when tiling is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileSettings {
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl TileSettings {
    /// Marker for engines that do not render in tiles.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            width: None,
            height: None,
        }
    }

    pub fn tiled(width: u32, height: u32) -> Self {
        Self {
            enabled: true,
            width: Some(width),
            height: Some(height),
        }
    }
}

/// The saved scene file the farm renders from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneIdentity {
    pub name: String,
    pub absolute_path: String,
}

/// A texture file the scene depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextureRef {
    pub name: String,
    pub absolute_path: String,
}

/// Numeric job priority as transmitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(u32);

impl Priority {
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<PrioritySetting> for Priority {
    fn from(setting: PrioritySetting) -> Self {
        Self(setting.value())
    }
}

/// Everything needed to build a [`JobDescription`], not yet validated.
#[derive(Debug, Clone)]
pub struct JobDraft {
    pub name: String,
    pub priority: PrioritySetting,
    pub frames: FrameRange,
    pub output_format: OutputFormat,
    pub tile_settings: TileSettings,
    pub scene_identity: SceneIdentity,
    pub textures: Vec<TextureRef>,
    pub engine_settings: EngineSettings,
}

/// A validated render job.
///
/// Deserializing goes through the same checks as building from a draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "JobFields")]
pub struct JobDescription {
    name: String,
    priority: Priority,
    frames: FrameRange,
    output_format: OutputFormat,
    tile_settings: TileSettings,
    scene_identity: SceneIdentity,
    textures: Vec<TextureRef>,
    engine_settings: EngineSettings,
}

/// Unchecked wire form of a [`JobDescription`].
#[derive(Deserialize)]
struct JobFields {
    name: String,
    priority: Priority,
    frames: FrameRange,
    output_format: OutputFormat,
    tile_settings: TileSettings,
    scene_identity: SceneIdentity,
    textures: Vec<TextureRef>,
    engine_settings: EngineSettings,
}

impl TryFrom<JobFields> for JobDescription {
    type Error = Error;

    fn try_from(fields: JobFields) -> Result<Self> {
        validate_job_name(&fields.name)?;
        if fields.scene_identity.absolute_path.trim().is_empty() {
            return Err(Error::UnsavedScene);
        }

        Ok(Self {
            name: fields.name,
            priority: fields.priority,
            frames: fields.frames,
            output_format: fields.output_format,
            tile_settings: fields.tile_settings,
            scene_identity: fields.scene_identity,
            textures: fields.textures,
            engine_settings: fields.engine_settings,
        })
    }
}

impl TryFrom<JobDraft> for JobDescription {
    type Error = Error;

    fn try_from(draft: JobDraft) -> Result<Self> {
        Self::try_from(JobFields {
            name: draft.name,
            priority: draft.priority.into(),
            frames: draft.frames,
            output_format: draft.output_format,
            tile_settings: draft.tile_settings,
            scene_identity: draft.scene_identity,
            textures: draft.textures,
            engine_settings: draft.engine_settings,
        })
    }
}

impl JobDescription {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn frames(&self) -> FrameRange {
        self.frames
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn tile_settings(&self) -> TileSettings {
        self.tile_settings
    }

    pub fn scene_identity(&self) -> &SceneIdentity {
        &self.scene_identity
    }

    pub fn textures(&self) -> &[TextureRef] {
        &self.textures
    }

    pub fn engine_settings(&self) -> &EngineSettings {
        &self.engine_settings
    }
}

/// Reject job names that are empty or whitespace only.
pub fn validate_job_name(name: &str) -> Result<&str> {
    if name.trim().is_empty() {
        return Err(Error::validation("Job name is empty"));
    }
    Ok(name)
}
