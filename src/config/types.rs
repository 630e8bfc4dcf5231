use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub intake: IntakeConfig,

    #[serde(default)]
    pub snapshot: SnapshotConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IntakeConfig {
    /// Job intake endpoint of the render farm
    #[serde(default = "default_intake_url")]
    pub url: String,

    /// Request timeout in milliseconds (default: the HTTP client's own)
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

fn default_intake_url() -> String {
    "http://localhost:5000/job".to_string()
}

impl IntakeConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            url: default_intake_url(),
            timeout_ms: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SnapshotConfig {
    /// Write the scene settings snapshot before submitting (default: true)
    #[serde(default = "default_snapshot_enabled")]
    pub enabled: bool,

    #[serde(default = "default_snapshot_path")]
    pub path: PathBuf,
}

fn default_snapshot_enabled() -> bool {
    true
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("scene_settings.txt")
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            enabled: default_snapshot_enabled(),
            path: default_snapshot_path(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Filter directive used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Append logs to this file instead of stderr
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
