//! Scene extraction tests
//!
//! Frame range, tiles, output format, textures and scene identity, read
//! through in-memory scene documents.

mod common;

use assert_matches::assert_matches;
use renderdock_common::{
    Integrator, OutputFormat, RenderEngine, ShadingColorType, WorkbenchLighting,
};
use renderdock_submit::extract::{EngineSettings, SceneConfigExtractor};
use renderdock_submit::job::{FrameRange, JobOptions, TileSettings};
use renderdock_submit::scene::{ImageAsset, SceneDocument};
use renderdock_submit::Error;
use tempfile::tempdir;

use common::{image, job_options, saved_scene, write_texture};

// ============================================================================
// Frame range
// ============================================================================

#[test]
fn test_scene_frame_range_ignores_job_values() {
    let dir = tempdir().unwrap();
    let scene = saved_scene(dir.path(), RenderEngine::Cycles);
    let extractor = SceneConfigExtractor::new(&scene);

    for (start, end) in [(0, 0), (5, 1), (-10, 10_000)] {
        let options = JobOptions {
            use_scene_frame_range: true,
            frame_start: start,
            frame_end: end,
            ..Default::default()
        };
        assert_eq!(
            extractor.extract_frame_range(&options),
            FrameRange { start: 10, end: 20 }
        );
    }
}

#[test]
fn test_job_frame_range_is_copied_unchecked() {
    let dir = tempdir().unwrap();
    let scene = saved_scene(dir.path(), RenderEngine::Cycles);
    let extractor = SceneConfigExtractor::new(&scene);

    for (start, end) in [(1, 250), (30, 3), (-5, -1)] {
        let options = JobOptions {
            use_scene_frame_range: false,
            frame_start: start,
            frame_end: end,
            ..Default::default()
        };
        assert_eq!(extractor.extract_frame_range(&options), FrameRange { start, end });
    }
}

// ============================================================================
// Tiles
// ============================================================================

#[test]
fn test_non_tiling_engine_disables_tiles() {
    let dir = tempdir().unwrap();
    for engine in [RenderEngine::Eevee, RenderEngine::Workbench] {
        let scene = saved_scene(dir.path(), engine);
        let tiles = SceneConfigExtractor::new(&scene).extract_tile_settings(&JobOptions::default());

        assert_eq!(tiles, TileSettings::disabled());
        assert_eq!(
            serde_json::to_value(tiles).unwrap(),
            serde_json::json!({ "enabled": false })
        );
    }
}

#[test]
fn test_cycles_uses_job_tiles_when_asked() {
    let dir = tempdir().unwrap();
    let mut scene = saved_scene(dir.path(), RenderEngine::Cycles);
    scene.render.tile_x = 256;
    scene.render.tile_y = 128;

    let options = JobOptions {
        use_scene_tile_settings: false,
        tile_width: 64,
        tile_height: 64,
        ..Default::default()
    };
    let tiles = SceneConfigExtractor::new(&scene).extract_tile_settings(&options);
    assert_eq!(
        serde_json::to_value(tiles).unwrap(),
        serde_json::json!({ "enabled": true, "width": 64, "height": 64 })
    );
}

#[test]
fn test_cycles_uses_scene_tiles_by_default() {
    let dir = tempdir().unwrap();
    let mut scene = saved_scene(dir.path(), RenderEngine::Cycles);
    scene.render.tile_x = 256;
    scene.render.tile_y = 128;

    let tiles = SceneConfigExtractor::new(&scene).extract_tile_settings(&JobOptions::default());
    assert_eq!(tiles, TileSettings::tiled(256, 128));
}

// ============================================================================
// Output format
// ============================================================================

#[test]
fn test_output_format_is_lower_case_on_both_paths() {
    let dir = tempdir().unwrap();
    let mut scene = saved_scene(dir.path(), RenderEngine::Cycles);
    scene.render.image_settings.file_format = OutputFormat::OpenExr;
    let extractor = SceneConfigExtractor::new(&scene);

    let from_scene = extractor.extract_output_format(&JobOptions::default());
    assert_eq!(from_scene, OutputFormat::OpenExr);
    assert_eq!(serde_json::to_value(from_scene).unwrap(), "exr");

    let options = JobOptions {
        use_scene_format: false,
        output_format: OutputFormat::Targa,
        ..Default::default()
    };
    let from_job = extractor.extract_output_format(&options);
    assert_eq!(serde_json::to_value(from_job).unwrap(), "tga");
}

// ============================================================================
// Textures
// ============================================================================

#[test]
fn test_texture_inventory_filters_and_orders() {
    let dir = tempdir().unwrap();
    let brick = write_texture(dir.path(), "textures/brick.png");
    let hdr = write_texture(dir.path(), "hdri/balcony_1k.hdr");

    let mut scene = saved_scene(dir.path(), RenderEngine::Cycles);
    scene.images = vec![
        image("brick.png", "//textures/brick.png"),
        ImageAsset {
            users: 0,
            ..image("unused.png", "//textures/brick.png")
        },
        image("Render Result", ""),
        image("Viewer Node", ""),
        ImageAsset {
            packed: true,
            ..image("packed.png", "//textures/packed.png")
        },
        image("balcony_1k.hdr", &hdr.to_string_lossy()),
    ];

    let inventory = SceneConfigExtractor::new(&scene).extract_texture_inventory();
    assert!(inventory.is_complete());

    let names: Vec<&str> = inventory.textures.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["brick.png", "balcony_1k.hdr"]);
    assert_eq!(
        inventory.textures[0].absolute_path,
        brick.to_string_lossy().into_owned()
    );
}

#[test]
fn test_missing_texture_is_reported_and_excluded() {
    let dir = tempdir().unwrap();
    write_texture(dir.path(), "textures/brick.png");

    let mut scene = saved_scene(dir.path(), RenderEngine::Eevee);
    scene.images = vec![
        image("gone.png", "//textures/gone.png"),
        image("brick.png", "//textures/brick.png"),
    ];

    let inventory = SceneConfigExtractor::new(&scene).extract_texture_inventory();
    assert_eq!(inventory.textures.len(), 1);
    assert_eq!(inventory.textures[0].name, "brick.png");

    assert_eq!(inventory.missing.len(), 1);
    assert_eq!(inventory.missing[0].name, "gone.png");
    assert_eq!(inventory.missing[0].path, dir.path().join("textures/gone.png"));
    assert!(inventory.missing[0].to_string().starts_with("File not found"));
}

#[test]
fn test_relative_texture_of_unsaved_scene_is_missing() {
    let mut scene = SceneDocument::default();
    scene.images = vec![image("brick.png", "//textures/brick.png")];

    let inventory = SceneConfigExtractor::new(&scene).extract_texture_inventory();
    assert!(inventory.textures.is_empty());
    assert_eq!(inventory.missing.len(), 1);
}

// ============================================================================
// Engine settings
// ============================================================================

#[test]
fn test_engine_settings_follow_active_engine() {
    let dir = tempdir().unwrap();

    let scene = saved_scene(dir.path(), RenderEngine::Eevee);
    assert_matches!(
        SceneConfigExtractor::new(&scene).extract_engine_settings(),
        EngineSettings::Eevee(ref record) if record.sampling.render == 64
    );

    let scene = saved_scene(dir.path(), RenderEngine::Workbench);
    assert_matches!(
        SceneConfigExtractor::new(&scene).extract_engine_settings(),
        EngineSettings::Workbench(_)
    );
}

#[test]
fn test_cycles_sub_samples_only_for_branched_path() {
    let dir = tempdir().unwrap();
    let mut scene = saved_scene(dir.path(), RenderEngine::Cycles);

    let value = serde_json::to_value(SceneConfigExtractor::new(&scene).extract_engine_settings())
        .unwrap();
    assert_eq!(value["engine"], "CYCLES");
    assert!(value["sampling"].get("sub_samples").is_none());

    scene.cycles.progressive = Integrator::BranchedPath;
    scene.cycles.diffuse_samples = 3;
    let value = serde_json::to_value(SceneConfigExtractor::new(&scene).extract_engine_settings())
        .unwrap();
    assert_eq!(value["sampling"]["integrator"], "BRANCHED_PATH");
    assert_eq!(value["sampling"]["sub_samples"]["diffuse"], 3);
}

#[test]
fn test_workbench_optional_fields() {
    let dir = tempdir().unwrap();
    let mut scene = saved_scene(dir.path(), RenderEngine::Workbench);
    scene.workbench.light = WorkbenchLighting::Flat;
    scene.workbench.color_type = ShadingColorType::Single;

    let record = SceneConfigExtractor::new(&scene).workbench_settings();
    assert!(record.lighting.studio_light.is_none());
    assert!(record.color.red.is_some());

    scene.workbench.light = WorkbenchLighting::Matcap;
    scene.workbench.color_type = ShadingColorType::Object;
    let record = SceneConfigExtractor::new(&scene).workbench_settings();
    assert_eq!(record.lighting.studio_light.as_deref(), Some("Default"));
    assert!(record.color.red.is_none());
}

// ============================================================================
// Scene identity
// ============================================================================

#[test]
fn test_scene_identity_of_saved_scene() {
    let dir = tempdir().unwrap();
    let scene = saved_scene(dir.path(), RenderEngine::Cycles);

    let identity = SceneConfigExtractor::new(&scene).scene_identity().unwrap();
    assert_eq!(identity.name, "wall");
    assert_eq!(
        identity.absolute_path,
        dir.path().join("wall.blend").to_string_lossy().into_owned()
    );
}

#[test]
fn test_scene_identity_without_path_is_unsaved() {
    let scene = SceneDocument {
        name: "wall".to_string(),
        filepath: None,
        ..Default::default()
    };
    assert_matches!(
        SceneConfigExtractor::new(&scene).scene_identity(),
        Err(Error::UnsavedScene)
    );

    let scene = SceneDocument {
        filepath: Some(String::new()),
        ..scene
    };
    assert_matches!(
        SceneConfigExtractor::new(&scene).scene_identity(),
        Err(Error::UnsavedScene)
    );
}

#[test]
fn test_gather_from_fixture_export() {
    let scene = SceneDocument::load(&common::fixture("scene_cycles.json")).unwrap();
    let gathered = SceneConfigExtractor::new(&scene).gather(&job_options("fixture"));

    assert_eq!(gathered.frames, FrameRange { start: 1, end: 120 });
    assert_eq!(gathered.tile_settings, TileSettings::tiled(32, 32));
    assert_eq!(gathered.output_format, OutputFormat::OpenExr);
    assert_eq!(gathered.output.dimensions.resolution.percentage, 50);
    assert_eq!(gathered.addons.len(), 2);
    // Absolute path under /nonexistent never exists on a test machine
    assert_eq!(gathered.textures.missing.len(), 1);
}
