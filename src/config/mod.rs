mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::Path;

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = [
        "./renderdock.toml",
        "~/.config/renderdock/config.toml",
        "/etc/renderdock/config.toml",
    ];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            return load_config(path);
        }
    }

    // Return default config if no file found
    Ok(Config::default())
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    let url = reqwest::Url::parse(&config.intake.url)
        .with_context(|| format!("Invalid intake URL: {:?}", config.intake.url))?;

    if !matches!(url.scheme(), "http" | "https") {
        anyhow::bail!(
            "Intake URL must use http or https, got '{}'",
            url.scheme()
        );
    }

    if config.intake.timeout_ms == Some(0) {
        anyhow::bail!("Intake timeout cannot be 0");
    }

    tracing_subscriber::EnvFilter::try_new(&config.logging.level)
        .with_context(|| format!("Invalid log level: {:?}", config.logging.level))?;

    if config.snapshot.enabled && config.snapshot.path.as_os_str().is_empty() {
        anyhow::bail!("Snapshot is enabled but has no path");
    }

    Ok(())
}
