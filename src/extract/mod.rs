//! Scene configuration extraction.
//!
//! [`SceneConfigExtractor`] reads a [`SceneSnapshotProvider`] and turns the
//! host's flat settings into the records a job and its snapshot are built
//! from. It never writes to the scene.

mod engine;
mod output;
mod textures;

pub use engine::{
    Caustics, Clamping, CyclesRecord, CyclesSampling, EeveeRecord, EeveeSampling, EngineSettings,
    LightPaths, MaxBounces, SubSamples, WorkbenchColor, WorkbenchLightingRecord, WorkbenchRecord,
};
pub use output::{
    Aspect, Dimensions, FrameInfo, Metadata, OutputFile, OutputSettings, PostProcessing,
    Resolution, Stereoscopy, TimeRemapping, ViewRecord,
};
pub use textures::{resolve_texture, MissingAsset, TextureInventory, RESERVED_IMAGE_NAMES};

use crate::error::{Error, Result};
use crate::job::{FrameRange, JobOptions, SceneIdentity, TileSettings};
use crate::scene::{AddonInfo, SceneSnapshotProvider};
use renderdock_common::{OutputFormat, RenderEngine};
use tracing::{debug, warn};

/// Every settings group of a scene, read in one pass.
#[derive(Debug, Clone)]
pub struct GatheredSettings {
    pub frames: FrameRange,
    pub tile_settings: TileSettings,
    pub output_format: OutputFormat,
    pub textures: TextureInventory,
    pub engine_settings: EngineSettings,
    pub cycles: CyclesRecord,
    pub eevee: EeveeRecord,
    pub workbench: WorkbenchRecord,
    pub output: OutputSettings,
    pub addons: Vec<AddonInfo>,
}

pub struct SceneConfigExtractor<'a, S: SceneSnapshotProvider + ?Sized> {
    scene: &'a S,
}

impl<'a, S: SceneSnapshotProvider + ?Sized> SceneConfigExtractor<'a, S> {
    pub fn new(scene: &'a S) -> Self {
        Self { scene }
    }

    /// Frame range to render: the scene's global range, or the job's own.
    pub fn extract_frame_range(&self, options: &JobOptions) -> FrameRange {
        if options.use_scene_frame_range {
            let frames = self.scene.frames();
            FrameRange {
                start: frames.frame_start,
                end: frames.frame_end,
            }
        } else {
            FrameRange {
                start: options.frame_start,
                end: options.frame_end,
            }
        }
    }

    /// Tile size for tile-capable engines, the disabled marker otherwise.
    pub fn extract_tile_settings(&self, options: &JobOptions) -> TileSettings {
        let render = self.scene.render();
        if !render.engine.supports_tiles() {
            return TileSettings::disabled();
        }

        if options.use_scene_tile_settings {
            TileSettings::tiled(render.tile_x, render.tile_y)
        } else {
            TileSettings::tiled(options.tile_width, options.tile_height)
        }
    }

    /// Output format: the scene's, or the job's own. Both serialize the same way.
    pub fn extract_output_format(&self, options: &JobOptions) -> OutputFormat {
        if options.use_scene_format {
            self.scene.render().image_settings.file_format
        } else {
            options.output_format
        }
    }

    /// Texture files referenced by the scene, in host order.
    pub fn extract_texture_inventory(&self) -> TextureInventory {
        let inventory: TextureInventory = self
            .scene
            .images()
            .iter()
            .filter_map(|image| resolve_texture(self.scene, image))
            .collect();

        for missing in &inventory.missing {
            warn!(
                texture = %missing.name,
                path = %missing.path.display(),
                "Texture file not found, excluding it from the job"
            );
        }
        debug!(
            found = inventory.textures.len(),
            missing = inventory.missing.len(),
            "Texture inventory gathered"
        );

        inventory
    }

    /// Settings of whichever engine is active.
    pub fn extract_engine_settings(&self) -> EngineSettings {
        match self.scene.render().engine {
            RenderEngine::Cycles => EngineSettings::Cycles(self.cycles_settings()),
            RenderEngine::Eevee => EngineSettings::Eevee(self.eevee_settings()),
            RenderEngine::Workbench => EngineSettings::Workbench(self.workbench_settings()),
        }
    }

    pub fn cycles_settings(&self) -> CyclesRecord {
        CyclesRecord::gather(self.scene.color_management(), self.scene.cycles())
    }

    pub fn eevee_settings(&self) -> EeveeRecord {
        EeveeRecord::gather(self.scene.color_management(), self.scene.eevee())
    }

    pub fn workbench_settings(&self) -> WorkbenchRecord {
        WorkbenchRecord::gather(self.scene.color_management(), self.scene.workbench())
    }

    pub fn output_settings(&self) -> OutputSettings {
        OutputSettings::gather(self.scene.render(), self.scene.frames())
    }

    pub fn addons(&self) -> Vec<AddonInfo> {
        self.scene.addons().to_vec()
    }

    /// Name and absolute file path of the scene.
    ///
    /// Fails with [`Error::UnsavedScene`] when the scene has no file path.
    pub fn scene_identity(&self) -> Result<SceneIdentity> {
        let absolute_path = self
            .scene
            .scene_file()
            .filter(|file| !file.trim().is_empty())
            .and_then(|file| self.scene.resolve_path(file))
            .map(|path| path.to_string_lossy().into_owned())
            .filter(|path| !path.is_empty())
            .ok_or(Error::UnsavedScene)?;

        Ok(SceneIdentity {
            name: self.scene.scene_name().to_string(),
            absolute_path,
        })
    }

    /// Read every settings group the workflow needs.
    pub fn gather(&self, options: &JobOptions) -> GatheredSettings {
        let gathered = GatheredSettings {
            frames: self.extract_frame_range(options),
            tile_settings: self.extract_tile_settings(options),
            output_format: self.extract_output_format(options),
            textures: self.extract_texture_inventory(),
            engine_settings: self.extract_engine_settings(),
            cycles: self.cycles_settings(),
            eevee: self.eevee_settings(),
            workbench: self.workbench_settings(),
            output: self.output_settings(),
            addons: self.addons(),
        };

        debug!(
            scene = %self.scene.scene_name(),
            engine = %self.scene.render().engine,
            frames = ?gathered.frames,
            tiles = ?gathered.tile_settings,
            format = %gathered.output_format,
            "Scene settings gathered"
        );

        gathered
    }
}
