//! Shared fixtures for integration tests.
//!
//! Scenes are plain [`SceneDocument`] values, so no host runtime is needed.
//! Texture files are created under a [`tempfile::TempDir`] that the caller
//! keeps alive for the duration of the test.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use renderdock_common::{OutputFormat, PriorityTier, RenderEngine};
use renderdock_submit::config::{Config, IntakeConfig, SnapshotConfig};
use renderdock_submit::extract::{EeveeRecord, EngineSettings};
use renderdock_submit::job::{
    FrameRange, JobDescription, JobDraft, JobOptions, PrioritySetting, SceneIdentity,
    TextureRef, TileSettings,
};
use renderdock_submit::scene::{
    AddonInfo, ColorManagement, EeveeSettings, ImageAsset, SceneDocument,
};

/// Path to a file under `tests/fixtures`.
pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// A saved scene whose file lives in `dir`.
pub fn saved_scene(dir: &Path, engine: RenderEngine) -> SceneDocument {
    let mut scene = SceneDocument {
        name: "wall".to_string(),
        filepath: Some(dir.join("wall.blend").to_string_lossy().into_owned()),
        addons: vec![AddonInfo {
            name: "renderdock".to_string(),
            version: vec![0, 1, 0],
        }],
        ..Default::default()
    };
    scene.render.engine = engine;
    scene.render.image_settings.file_format = OutputFormat::Jpeg;
    scene.frames.frame_start = 10;
    scene.frames.frame_end = 20;
    scene
}

/// Create an empty texture file and return its absolute path.
pub fn write_texture(dir: &Path, relative: &str) -> PathBuf {
    let path = dir.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, b"").unwrap();
    path
}

pub fn image(name: &str, filepath: &str) -> ImageAsset {
    ImageAsset {
        name: name.to_string(),
        filepath: filepath.to_string(),
        users: 1,
        packed: false,
    }
}

pub fn job_options(name: &str) -> JobOptions {
    JobOptions {
        job_name: name.to_string(),
        ..Default::default()
    }
}

/// Config pointing at `url`, with the snapshot written into `dir`.
pub fn config_for(url: &str, timeout_ms: Option<u64>, dir: &Path) -> Config {
    Config {
        intake: IntakeConfig {
            url: url.to_string(),
            timeout_ms,
        },
        snapshot: SnapshotConfig {
            enabled: true,
            path: dir.join("scene_settings.txt"),
        },
        ..Default::default()
    }
}

/// A valid job for a saved Eevee scene, built the way the workflow builds it.
pub fn sample_job(name: &str) -> JobDescription {
    JobDescription::try_from(JobDraft {
        name: name.to_string(),
        priority: PrioritySetting::Tier(PriorityTier::Business),
        frames: FrameRange { start: 0, end: 1 },
        output_format: OutputFormat::Jpeg,
        tile_settings: TileSettings::disabled(),
        scene_identity: SceneIdentity {
            name: "wall".to_string(),
            absolute_path: "/home/artist/blends/wall/wall.blend".to_string(),
        },
        textures: vec![TextureRef {
            name: "balcony_1k.hdr".to_string(),
            absolute_path: "/home/artist/blends/wall/textures/balcony_1k.hdr".to_string(),
        }],
        engine_settings: EngineSettings::Eevee(EeveeRecord::gather(
            &ColorManagement::default(),
            &EeveeSettings::default(),
        )),
    })
    .unwrap()
}
