//! Local record of the scene settings at submission time.

use crate::error::Result;
use crate::extract::{CyclesRecord, EeveeRecord, GatheredSettings, OutputSettings, WorkbenchRecord};
use crate::job::TextureRef;
use crate::scene::AddonInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Every settings group of the scene, written next to the submission for later
/// inspection. Nothing in here is sent to the intake service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub gathered_at: DateTime<Utc>,
    pub cycles: CyclesRecord,
    pub eevee: EeveeRecord,
    pub workbench: WorkbenchRecord,
    pub output: OutputSettings,
    pub textures: Vec<TextureRef>,
    pub add_ons: Vec<AddonInfo>,
}

impl SceneSnapshot {
    pub fn new(gathered: &GatheredSettings) -> Self {
        Self {
            gathered_at: Utc::now(),
            cycles: gathered.cycles.clone(),
            eevee: gathered.eevee.clone(),
            workbench: gathered.workbench.clone(),
            output: gathered.output.clone(),
            textures: gathered.textures.textures.clone(),
            add_ons: gathered.addons.clone(),
        }
    }

    /// Write as pretty JSON, replacing any previous snapshot at `path`.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        tracing::debug!("Wrote scene snapshot to {:?}", path);
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
