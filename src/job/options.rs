//! Per-job options chosen by the artist alongside the scene.

use anyhow::{Context, Result};
use renderdock_common::{OutputFormat, PriorityTier};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// How the artist expressed the job's priority.
///
/// In tiered mode the priority is one of a small closed set; in numeric mode
/// it is any non-negative level. Both reach the wire as a plain integer.
///
/// A job file accepts the same strings as `--priority`; bare integers are
/// levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PrioritySetting {
    Tier(PriorityTier),
    Level(u32),
}

impl Default for PrioritySetting {
    fn default() -> Self {
        Self::Tier(PriorityTier::default())
    }
}

impl PrioritySetting {
    /// Numeric value sent to the intake service.
    pub fn value(&self) -> u32 {
        match self {
            Self::Tier(tier) => tier.value(),
            Self::Level(level) => *level,
        }
    }
}

impl std::str::FromStr for PrioritySetting {
    type Err = renderdock_common::Error;

    /// Tier names parse as tiers; any other non-negative integer is a level.
    fn from_str(s: &str) -> renderdock_common::Result<Self> {
        if let Ok(tier) = s.parse::<PriorityTier>() {
            return Ok(Self::Tier(tier));
        }
        s.trim()
            .parse::<u32>()
            .map(Self::Level)
            .map_err(|_| renderdock_common::Error::invalid_value("priority", s))
    }
}

impl<'de> Deserialize<'de> for PrioritySetting {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PriorityVisitor;

        impl Visitor<'_> for PriorityVisitor {
            type Value = PrioritySetting;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a priority tier or a non-negative integer")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                u32::try_from(v)
                    .map(PrioritySetting::Level)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u32::try_from(v)
                    .map(PrioritySetting::Level)
                    .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(PriorityVisitor)
    }
}

/// Job options: name, priority, and the job-specific overrides that apply
/// when the matching `use_scene_*` flag is off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobOptions {
    pub job_name: String,
    pub priority: PrioritySetting,

    pub use_scene_frame_range: bool,
    pub frame_start: i32,
    pub frame_end: i32,

    pub use_scene_format: bool,
    pub output_format: OutputFormat,

    pub use_scene_tile_settings: bool,
    pub tile_width: u32,
    pub tile_height: u32,
}

impl Default for JobOptions {
    fn default() -> Self {
        Self {
            job_name: "New Job".to_string(),
            priority: PrioritySetting::default(),
            use_scene_frame_range: true,
            frame_start: 1,
            frame_end: 250,
            use_scene_format: true,
            output_format: OutputFormat::Png,
            use_scene_tile_settings: true,
            tile_width: 64,
            tile_height: 64,
        }
    }
}

#[derive(Deserialize)]
struct JobFile {
    #[serde(default)]
    job: JobOptions,
}

impl JobOptions {
    /// Load job options from the `[job]` table of a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read job file: {:?}", path))?;

        let file: JobFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse job file: {:?}", path))?;

        Ok(file.job)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_scene() {
        let options = JobOptions::default();
        assert_eq!(options.job_name, "New Job");
        assert_eq!(options.priority.value(), 0);
        assert!(options.use_scene_frame_range);
        assert!(options.use_scene_format);
        assert!(options.use_scene_tile_settings);
        assert_eq!((options.tile_width, options.tile_height), (64, 64));
    }

    #[test]
    fn parses_tiered_priority() {
        let file: JobFile = toml::from_str(
            r#"
[job]
job_name = "wall"
priority = "business"
use_scene_format = false
output_format = "EXR"
"#,
        )
        .unwrap();

        assert_eq!(file.job.job_name, "wall");
        assert_eq!(file.job.priority, PrioritySetting::Tier(PriorityTier::Business));
        assert_eq!(file.job.output_format, OutputFormat::OpenExr);
        assert!(!file.job.use_scene_format);
        // Unspecified fields keep their defaults
        assert_eq!(file.job.frame_end, 250);
    }

    #[test]
    fn parses_numeric_priority() {
        let file: JobFile = toml::from_str("[job]\npriority = 42\n").unwrap();
        assert_eq!(file.job.priority, PrioritySetting::Level(42));
        assert_eq!(file.job.priority.value(), 42);
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let file: JobFile = toml::from_str("").unwrap();
        assert_eq!(file.job, JobOptions::default());
    }

    #[test]
    fn rejects_unknown_format() {
        let result: std::result::Result<JobFile, _> =
            toml::from_str("[job]\noutput_format = \"GIF\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn priority_from_str() {
        assert_eq!(
            "premium".parse::<PrioritySetting>().unwrap(),
            PrioritySetting::Tier(PriorityTier::Premium)
        );
        assert_eq!(
            "1".parse::<PrioritySetting>().unwrap(),
            PrioritySetting::Tier(PriorityTier::Business)
        );
        assert_eq!("113".parse::<PrioritySetting>().unwrap(), PrioritySetting::Level(113));
        assert!("-1".parse::<PrioritySetting>().is_err());
        assert!("urgent".parse::<PrioritySetting>().is_err());
    }

    #[test]
    fn job_file_priority_matches_command_line() {
        for (raw, expected) in [
            ("\"1\"", PrioritySetting::Tier(PriorityTier::Business)),
            ("\"Premium\"", PrioritySetting::Tier(PriorityTier::Premium)),
            ("\"113\"", PrioritySetting::Level(113)),
            ("113", PrioritySetting::Level(113)),
        ] {
            let file: JobFile = toml::from_str(&format!("[job]\npriority = {raw}\n")).unwrap();
            assert_eq!(file.job.priority, expected, "priority = {raw}");
            assert_eq!(raw.trim_matches('"').parse::<PrioritySetting>().unwrap(), expected);
        }

        assert!(toml::from_str::<JobFile>("[job]\npriority = -1\n").is_err());
        assert!(toml::from_str::<JobFile>("[job]\npriority = \"urgent\"\n").is_err());
    }
}
