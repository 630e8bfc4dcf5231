use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "renderdock-submit")]
#[command(author, version, about = "Submit render jobs to a RenderDock farm")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a job from a scene export and submit it
    Submit {
        /// Scene export (JSON)
        #[arg(short, long)]
        scene: PathBuf,

        /// Job options file (TOML with a [job] table)
        #[arg(short, long)]
        job: Option<PathBuf>,

        /// Override the job name
        #[arg(long)]
        name: Option<String>,

        /// Override the priority: a tier name (standard, business, premium) or a number
        #[arg(long)]
        priority: Option<String>,

        /// Print the job payload instead of sending it
        #[arg(long)]
        dry_run: bool,
    },

    /// Write the scene settings snapshot without submitting
    Snapshot {
        /// Scene export (JSON)
        #[arg(short, long)]
        scene: PathBuf,

        /// Snapshot file (defaults to the configured path)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the settings extracted from a scene export
    Inspect {
        /// Scene export (JSON)
        #[arg(short, long)]
        scene: PathBuf,

        /// Job options file (TOML with a [job] table)
        #[arg(short, long)]
        job: Option<PathBuf>,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
