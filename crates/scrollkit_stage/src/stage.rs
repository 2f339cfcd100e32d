//! The two staging call sites and the shared runner beneath them.

use std::convert::Infallible;
use std::fs;
use std::io;

use scrollkit_io_fs::{mirror, stage_file};
use tracing::{debug, info, warn};

use crate::conf::SpecStageOptions;
use crate::spec::{EnumFailurePolicy, EnumStepOutcome, ReportStage, StageError};

/// Standalone pre-build step: any copy failure is fatal.
pub fn run_standalone(spec_opts: &SpecStageOptions) -> Result<ReportStage, StageError> {
    run_stage(spec_opts, EnumFailurePolicy::Abort)
}

/// Build-start hook: copy failures are logged and the build goes on.
pub fn on_build_start(spec_opts: &SpecStageOptions) -> ReportStage {
    let Ok(report): Result<ReportStage, Infallible> =
        run_steps(spec_opts, |err_stage| Ok(degrade(err_stage)));
    report
}

/// Mirror the asset directory, then stage the artifact file.
///
/// A missing asset directory or artifact is skipped, not an error; with no
/// asset directory an artifact copy failure only warns. Other copy failures
/// follow `enum_policy`.
pub fn run_stage(
    spec_opts: &SpecStageOptions,
    enum_policy: EnumFailurePolicy,
) -> Result<ReportStage, StageError> {
    match enum_policy {
        EnumFailurePolicy::Abort => run_steps(spec_opts, Err),
        EnumFailurePolicy::Degrade => Ok(on_build_start(spec_opts)),
    }
}

/// Shared step sequence; `on_failure` decides whether a copy failure stops
/// the run (`Err`) or is recorded as the step's outcome (`Ok`).
fn run_steps<E, F>(spec_opts: &SpecStageOptions, on_failure: F) -> Result<ReportStage, E>
where
    F: Fn(StageError) -> Result<EnumStepOutcome, E>,
{
    let mut report = ReportStage {
        outcome_mirror: EnumStepOutcome::SkippedMissing,
        report_mirror: None,
        outcome_artifact: EnumStepOutcome::Disabled,
        n_bytes_artifact: 0,
    };

    let path_dir_src = spec_opts.path_dir_source();
    let path_dir_dst = spec_opts.path_dir_destination();
    match mirror(&path_dir_src, &path_dir_dst) {
        Ok(report_mirror) if report_mirror.if_source_missing => {
            warn!(path = %path_dir_src.display(), "Scroll directory not found");
        }
        Ok(report_mirror) => {
            info!(
                dst = %path_dir_dst.display(),
                "Scroll animation files copied to public directory: {report_mirror}"
            );
            report.outcome_mirror = EnumStepOutcome::Done;
            report.report_mirror = Some(report_mirror);
        }
        Err(e) => {
            report.outcome_mirror = on_failure(StageError::Mirror(e))?;
        }
    }

    let Some((path_file_src, path_file_dst)) = spec_opts.paths_artifact() else {
        return Ok(report);
    };
    if let Err(e) = fs::metadata(&path_file_src) {
        if e.kind() == io::ErrorKind::NotFound {
            debug!(path = %path_file_src.display(), "artifact not found; skipped");
            report.outcome_artifact = EnumStepOutcome::SkippedMissing;
            return Ok(report);
        }
    }
    match stage_file(&path_file_src, &path_file_dst) {
        Ok(n_bytes) => {
            info!(
                dst = %path_file_dst.display(),
                n_bytes,
                "Main JavaScript bundle copied to public directory"
            );
            report.outcome_artifact = EnumStepOutcome::Done;
            report.n_bytes_artifact = n_bytes;
        }
        // Without assets nothing created the public directory; a missing
        // source must not fail the run, so this copy only warns.
        Err(e) if report.outcome_mirror == EnumStepOutcome::SkippedMissing => {
            report.outcome_artifact = degrade(StageError::Artifact(e));
        }
        Err(e) => {
            report.outcome_artifact = on_failure(StageError::Artifact(e))?;
        }
    }

    Ok(report)
}

fn degrade(err_stage: StageError) -> EnumStepOutcome {
    warn!("{err_stage}");
    EnumStepOutcome::Failed(err_stage.to_string())
}
