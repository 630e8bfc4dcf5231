//! Engine-specific settings records.
//!
//! These are gathered for reproducibility only; the intake service receives
//! them unvalidated inside `engine_settings`.

use crate::scene::{ColorManagement, CyclesSettings, EeveeSettings, WorkbenchShading};
use renderdock_common::{Integrator, ShadingColorType, WorkbenchLighting};
use serde::{Deserialize, Serialize};

/// Settings of the active engine, tagged by its host identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "engine")]
pub enum EngineSettings {
    #[serde(rename = "CYCLES")]
    Cycles(CyclesRecord),
    #[serde(rename = "BLENDER_EEVEE")]
    Eevee(EeveeRecord),
    #[serde(rename = "BLENDER_WORKBENCH")]
    Workbench(WorkbenchRecord),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CyclesRecord {
    pub color_management: ColorManagement,
    pub sampling: CyclesSampling,
    pub light_paths: LightPaths,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CyclesSampling {
    pub integrator: Integrator,
    pub render: u32,
    pub viewport: u32,
    /// Per-component samples; only present with the branched-path integrator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_samples: Option<SubSamples>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubSamples {
    pub diffuse: u32,
    pub glossy: u32,
    pub transmission: u32,
    pub ao: u32,
    pub mesh_light: u32,
    pub subsurface: u32,
    pub volume: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightPaths {
    pub max_bounces: MaxBounces,
    pub clamping: Clamping,
    pub caustics: Caustics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaxBounces {
    pub total: u32,
    pub diffuse: u32,
    pub glossy: u32,
    pub transparency: u32,
    pub transmission: u32,
    pub volume: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Clamping {
    pub direct_light: f32,
    pub indirect_light: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Caustics {
    pub filter_glossy: f32,
    pub reflective_caustics: bool,
    pub refractive_caustics: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EeveeRecord {
    pub color_management: ColorManagement,
    pub sampling: EeveeSampling,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EeveeSampling {
    pub render: u32,
    pub viewport: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkbenchRecord {
    pub color_management: ColorManagement,
    pub lighting: WorkbenchLightingRecord,
    pub color: WorkbenchColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkbenchLightingRecord {
    pub light: WorkbenchLighting,
    /// Only for studio and matcap lighting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub studio_light: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorkbenchColor {
    #[serde(rename = "type")]
    pub color_type: ShadingColorType,
    /// RGB of the single colour; only for [`ShadingColorType::Single`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub red: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub green: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blue: Option<f32>,
}

impl CyclesRecord {
    pub fn gather(color_management: &ColorManagement, cycles: &CyclesSettings) -> Self {
        let sub_samples = (cycles.progressive == Integrator::BranchedPath).then(|| SubSamples {
            diffuse: cycles.diffuse_samples,
            glossy: cycles.glossy_samples,
            transmission: cycles.transmission_samples,
            ao: cycles.ao_samples,
            mesh_light: cycles.mesh_light_samples,
            subsurface: cycles.subsurface_samples,
            volume: cycles.volume_samples,
        });

        Self {
            color_management: color_management.clone(),
            sampling: CyclesSampling {
                integrator: cycles.progressive,
                render: cycles.samples,
                viewport: cycles.preview_samples,
                sub_samples,
            },
            light_paths: LightPaths {
                max_bounces: MaxBounces {
                    total: cycles.max_bounces,
                    diffuse: cycles.diffuse_bounces,
                    glossy: cycles.glossy_bounces,
                    transparency: cycles.transparent_max_bounces,
                    transmission: cycles.transmission_bounces,
                    volume: cycles.volume_bounces,
                },
                clamping: Clamping {
                    direct_light: cycles.sample_clamp_direct,
                    indirect_light: cycles.sample_clamp_indirect,
                },
                caustics: Caustics {
                    filter_glossy: cycles.blur_glossy,
                    reflective_caustics: cycles.caustics_reflective,
                    refractive_caustics: cycles.caustics_refractive,
                },
            },
        }
    }
}

impl EeveeRecord {
    pub fn gather(color_management: &ColorManagement, eevee: &EeveeSettings) -> Self {
        Self {
            color_management: color_management.clone(),
            sampling: EeveeSampling {
                render: eevee.taa_render_samples,
                viewport: eevee.taa_samples,
            },
        }
    }
}

impl WorkbenchRecord {
    pub fn gather(color_management: &ColorManagement, shading: &WorkbenchShading) -> Self {
        let studio_light = shading
            .light
            .uses_studio_light()
            .then(|| shading.studio_light.clone());

        let single =
            (shading.color_type == ShadingColorType::Single).then_some(shading.single_color);

        Self {
            color_management: color_management.clone(),
            lighting: WorkbenchLightingRecord {
                light: shading.light,
                studio_light,
            },
            color: WorkbenchColor {
                color_type: shading.color_type,
                red: single.map(|c| c[0]),
                green: single.map(|c| c[1]),
                blue: single.map(|c| c[2]),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_integrator_omits_sub_samples() {
        let record = CyclesRecord::gather(&ColorManagement::default(), &CyclesSettings::default());
        assert!(record.sampling.sub_samples.is_none());

        let value = serde_json::to_value(&record).unwrap();
        assert!(value["sampling"].get("sub_samples").is_none());
        assert_eq!(value["sampling"]["integrator"], "PATH");
    }

    #[test]
    fn branched_integrator_includes_sub_samples() {
        let cycles = CyclesSettings {
            progressive: Integrator::BranchedPath,
            diffuse_samples: 3,
            volume_samples: 7,
            ..Default::default()
        };
        let record = CyclesRecord::gather(&ColorManagement::default(), &cycles);
        let sub = record.sampling.sub_samples.unwrap();
        assert_eq!(sub.diffuse, 3);
        assert_eq!(sub.volume, 7);
    }

    #[test]
    fn light_paths_copy_bounces_and_clamping() {
        let cycles = CyclesSettings {
            max_bounces: 20,
            transparent_max_bounces: 16,
            sample_clamp_indirect: 5.0,
            caustics_refractive: false,
            ..Default::default()
        };
        let record = CyclesRecord::gather(&ColorManagement::default(), &cycles);
        assert_eq!(record.light_paths.max_bounces.total, 20);
        assert_eq!(record.light_paths.max_bounces.transparency, 16);
        assert_eq!(record.light_paths.clamping.indirect_light, 5.0);
        assert!(!record.light_paths.caustics.refractive_caustics);
    }

    #[test]
    fn workbench_flat_single_colour() {
        let shading = WorkbenchShading {
            light: WorkbenchLighting::Flat,
            color_type: ShadingColorType::Single,
            single_color: [0.1, 0.2, 0.3],
            ..Default::default()
        };
        let record = WorkbenchRecord::gather(&ColorManagement::default(), &shading);
        assert!(record.lighting.studio_light.is_none());
        assert_eq!(record.color.red, Some(0.1));
        assert_eq!(record.color.blue, Some(0.3));
    }

    #[test]
    fn workbench_studio_material_colour() {
        let record =
            WorkbenchRecord::gather(&ColorManagement::default(), &WorkbenchShading::default());
        assert_eq!(record.lighting.studio_light.as_deref(), Some("Default"));
        assert!(record.color.red.is_none());

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["color"], serde_json::json!({ "type": "MATERIAL" }));
    }

    #[test]
    fn engine_settings_tagged_by_host_id() {
        let settings = EngineSettings::Eevee(EeveeRecord::gather(
            &ColorManagement::default(),
            &EeveeSettings::default(),
        ));
        let value = serde_json::to_value(&settings).unwrap();
        assert_eq!(value["engine"], "BLENDER_EEVEE");
        assert_eq!(value["sampling"]["render"], 64);

        let back: EngineSettings = serde_json::from_value(value).unwrap();
        assert_eq!(back, settings);
    }
}
