//! The submit operation: gather, snapshot, validate, build, send.
//!
//! [`submit_scene`] is the single entry point a host binding calls. Every
//! failure is turned into a [`SubmissionReport`]; nothing propagates out.

use crate::config::{Config, SnapshotConfig};
use crate::error::Result;
use crate::extract::SceneConfigExtractor;
use crate::job::{validate_job_name, JobDescription, JobDraft, JobOptions};
use crate::scene::SceneSnapshotProvider;
use crate::snapshot::SceneSnapshot;
use crate::submit::JobSubmitter;
use serde::Serialize;
use tracing::{error, info, warn};

/// How an invocation ended, in the host's operator vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Finished,
    Cancelled,
}

/// What the caller shows the artist after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionReport {
    pub outcome: Outcome,
    pub message: String,
    /// Response body of the intake service, on success.
    pub response: Option<String>,
    /// Non-fatal problems: missing textures, snapshot failures.
    pub warnings: Vec<String>,
}

impl SubmissionReport {
    pub fn is_finished(&self) -> bool {
        self.outcome == Outcome::Finished
    }
}

/// A built job plus the warnings collected while building it.
#[derive(Debug, Clone)]
pub struct PreparedJob {
    pub job: JobDescription,
    pub warnings: Vec<String>,
}

/// Run every step up to, but not including, the HTTP request.
pub fn prepare_job<S>(
    scene: &S,
    options: &JobOptions,
    snapshot: &SnapshotConfig,
) -> Result<PreparedJob>
where
    S: SceneSnapshotProvider + ?Sized,
{
    let extractor = SceneConfigExtractor::new(scene);
    let gathered = extractor.gather(options);

    let mut warnings: Vec<String> = gathered
        .textures
        .missing
        .iter()
        .map(ToString::to_string)
        .collect();

    if snapshot.enabled {
        if let Err(e) = SceneSnapshot::new(&gathered).write_to(&snapshot.path) {
            warn!("Failed to write scene snapshot to {:?}: {}", snapshot.path, e);
            warnings.push(format!("Scene snapshot not written: {}", e));
        }
    }

    validate_job_name(&options.job_name)?;
    let scene_identity = extractor.scene_identity()?;

    let job = JobDescription::try_from(JobDraft {
        name: options.job_name.clone(),
        priority: options.priority,
        frames: gathered.frames,
        output_format: gathered.output_format,
        tile_settings: gathered.tile_settings,
        scene_identity,
        textures: gathered.textures.textures,
        engine_settings: gathered.engine_settings,
    })?;

    Ok(PreparedJob { job, warnings })
}

/// Build the job for `scene` and submit it once to the configured intake.
pub fn submit_scene<S>(scene: &S, options: &JobOptions, config: &Config) -> SubmissionReport
where
    S: SceneSnapshotProvider + ?Sized,
{
    let prepared = match prepare_job(scene, options, &config.snapshot) {
        Ok(prepared) => prepared,
        Err(e) => return cancelled(e.to_string(), Vec::new()),
    };
    let PreparedJob { job, warnings } = prepared;

    let result = JobSubmitter::new(&config.intake).and_then(|submitter| {
        info!(
            job = %job.name(),
            endpoint = %submitter.endpoint(),
            textures = job.textures().len(),
            "Submitting job"
        );
        submitter.submit(&job)
    });

    match result {
        Ok(response) => SubmissionReport {
            outcome: Outcome::Finished,
            message: format!("Job {:?} submitted", job.name()),
            response: Some(response),
            warnings,
        },
        Err(e) => cancelled(e.to_string(), warnings),
    }
}

fn cancelled(message: String, warnings: Vec<String>) -> SubmissionReport {
    error!("Job submission cancelled: {}", message);
    SubmissionReport {
        outcome: Outcome::Cancelled,
        message,
        response: None,
        warnings,
    }
}
