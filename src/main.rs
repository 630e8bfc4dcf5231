mod cli;

use renderdock_submit::{
    config::{self, LoggingConfig},
    extract::SceneConfigExtractor,
    job::{JobOptions, PrioritySetting},
    scene::SceneDocument,
    snapshot::SceneSnapshot,
    workflow,
};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;
use std::sync::Mutex;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load_config_or_default(cli.config.as_deref())?;
    init_logging(&config.logging, cli.verbose)?;

    match cli.command {
        Commands::Submit {
            scene,
            job,
            name,
            priority,
            dry_run,
        } => {
            let mut options = load_job_options(job.as_deref())?;
            if let Some(name) = name {
                options.job_name = name;
            }
            if let Some(priority) = priority {
                options.priority = priority.parse::<PrioritySetting>()?;
            }
            submit(&scene, &options, &config, dry_run)
        }
        Commands::Snapshot { scene, output } => {
            let path = output.unwrap_or_else(|| config.snapshot.path.clone());
            write_snapshot(&scene, &path)
        }
        Commands::Inspect { scene, job } => {
            let options = load_job_options(job.as_deref())?;
            inspect(&scene, &options)
        }
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("renderdock-submit {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Install the global subscriber. RUST_LOG wins over the configured level.
fn init_logging(logging: &LoggingConfig, verbose: bool) -> Result<()> {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if verbose {
            "renderdock_submit=trace,renderdock_common=trace,reqwest=debug".to_string()
        } else {
            logging.level.clone()
        }
    });

    match &logging.file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {:?}", path))?;
            tracing_subscriber::fmt()
                .with_env_filter(&env_filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(&env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }

    Ok(())
}

fn load_job_options(path: Option<&Path>) -> Result<JobOptions> {
    match path {
        Some(p) => JobOptions::load(p),
        None => Ok(JobOptions::default()),
    }
}

fn submit(
    scene_path: &Path,
    options: &JobOptions,
    config: &config::Config,
    dry_run: bool,
) -> Result<()> {
    let scene = SceneDocument::load(scene_path)?;

    if dry_run {
        let prepared = workflow::prepare_job(&scene, options, &config.snapshot)?;
        for warning in &prepared.warnings {
            eprintln!("warning: {}", warning);
        }
        println!("{}", serde_json::to_string_pretty(&prepared.job)?);
        eprintln!("\n[DRY RUN] Would POST to {}", config.intake.url);
        return Ok(());
    }

    let report = workflow::submit_scene(&scene, options, config);
    for warning in &report.warnings {
        eprintln!("warning: {}", warning);
    }

    if !report.is_finished() {
        anyhow::bail!("{}", report.message);
    }

    println!("{}", report.message);
    if let Some(ref response) = report.response {
        println!("{}", response);
    }

    Ok(())
}

fn write_snapshot(scene_path: &Path, output: &Path) -> Result<()> {
    let scene = SceneDocument::load(scene_path)?;
    let gathered = SceneConfigExtractor::new(&scene).gather(&JobOptions::default());

    SceneSnapshot::new(&gathered)
        .write_to(output)
        .with_context(|| format!("Failed to write snapshot: {:?}", output))?;

    println!("Snapshot written to {}", output.display());
    Ok(())
}

fn inspect(scene_path: &Path, options: &JobOptions) -> Result<()> {
    let scene = SceneDocument::load(scene_path)?;
    let extractor = SceneConfigExtractor::new(&scene);
    let gathered = extractor.gather(options);

    let missing: Vec<String> = gathered
        .textures
        .missing
        .iter()
        .map(ToString::to_string)
        .collect();
    let identity = extractor.scene_identity().ok();

    let value = serde_json::json!({
        "scene_identity": identity,
        "frames": gathered.frames,
        "output_format": gathered.output_format,
        "tile_settings": gathered.tile_settings,
        "textures": gathered.textures.textures,
        "missing_textures": missing,
        "engine_settings": gathered.engine_settings,
        "output": gathered.output,
        "add_ons": gathered.addons,
    });
    println!("{}", serde_json::to_string_pretty(&value)?);

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            println!("  Intake: {}", config.intake.url);
            match config.intake.timeout_ms {
                Some(ms) => println!("  Timeout: {} ms", ms),
                None => println!("  Timeout: client default"),
            }
            println!(
                "  Snapshot: {}",
                if config.snapshot.enabled {
                    config.snapshot.path.display().to_string()
                } else {
                    "disabled".to_string()
                }
            );
            println!("  Log level: {}", config.logging.level);
        }
        None => {
            println!("No config file specified, using defaults");
            let config = config::Config::default();
            println!("Default config:");
            println!("  Intake: {}", config.intake.url);
        }
    }

    Ok(())
}
