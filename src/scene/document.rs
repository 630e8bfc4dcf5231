//! Scene state exported by the host as a JSON document.

use super::{
    AddonInfo, ColorManagement, CyclesSettings, EeveeSettings, FrameSettings, ImageAsset,
    RenderSettings, SceneSnapshotProvider, WorkbenchShading,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// A complete, owned copy of a scene's settings.
///
/// Missing groups fall back to the defaults of a fresh host scene, so an
/// export only needs to carry what differs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneDocument {
    pub name: String,
    /// Saved scene file; absent or empty for an unsaved scene.
    pub filepath: Option<String>,
    pub frames: FrameSettings,
    pub render: RenderSettings,
    pub color_management: ColorManagement,
    pub cycles: CyclesSettings,
    pub eevee: EeveeSettings,
    pub workbench: WorkbenchShading,
    pub images: Vec<ImageAsset>,
    pub addons: Vec<AddonInfo>,
}

impl SceneDocument {
    /// Load a scene export from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene file: {:?}", path))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse scene file: {:?}", path))
    }
}

impl SceneSnapshotProvider for SceneDocument {
    fn scene_name(&self) -> &str {
        &self.name
    }

    fn scene_file(&self) -> Option<&str> {
        self.filepath.as_deref()
    }

    fn frames(&self) -> &FrameSettings {
        &self.frames
    }

    fn render(&self) -> &RenderSettings {
        &self.render
    }

    fn color_management(&self) -> &ColorManagement {
        &self.color_management
    }

    fn cycles(&self) -> &CyclesSettings {
        &self.cycles
    }

    fn eevee(&self) -> &EeveeSettings {
        &self.eevee
    }

    fn workbench(&self) -> &WorkbenchShading {
        &self.workbench
    }

    fn images(&self) -> &[ImageAsset] {
        &self.images
    }

    fn addons(&self) -> &[AddonInfo] {
        &self.addons
    }
}
