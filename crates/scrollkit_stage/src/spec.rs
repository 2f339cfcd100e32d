//! Stage policy, outcomes and errors.

use scrollkit_io_fs::{MirrorError, ReportMirror};
use thiserror::Error;

/// What a call site does when a copy step fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumFailurePolicy {
    /// Stop and hand the error to the caller (standalone pre-step).
    Abort,
    /// Log a warning and keep going (build-start hook).
    Degrade,
}

/// Result of one step of a staging run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumStepOutcome {
    /// Step copied its files.
    Done,
    /// Input was absent; nothing touched.
    SkippedMissing,
    /// Step not configured.
    Disabled,
    /// Step failed and the policy let the run continue.
    Failed(String),
}

impl EnumStepOutcome {
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Outcome of both steps of one staging run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStage {
    pub outcome_mirror: EnumStepOutcome,
    /// Mirror counters, present when the mirror step ran to completion.
    pub report_mirror: Option<ReportMirror>,
    pub outcome_artifact: EnumStepOutcome,
    pub n_bytes_artifact: u64,
}

impl ReportStage {
    /// At least one step failed under [`EnumFailurePolicy::Degrade`].
    pub fn is_degraded(&self) -> bool {
        self.outcome_mirror.is_failed() || self.outcome_artifact.is_failed()
    }
}

/// Fatal staging failure under [`EnumFailurePolicy::Abort`].
#[derive(Debug, Error)]
pub enum StageError {
    #[error("Failed to copy scroll files: {0}")]
    Mirror(#[source] MirrorError),
    #[error("Failed to copy JS bundle: {0}")]
    Artifact(#[source] MirrorError),
}
