//! `scrollkit_stage` v1:
//! Stages scroll-animation assets into the public output directory.
//!
//! Modules:
//! - `conf`  : default layout and options
//! - `spec`  : failure policy, step outcomes, errors
//! - `stage` : standalone and build-start call sites
//! - `hook`  : build lifecycle seam
//! - `log`   : tracing setup
pub mod conf;
pub mod hook;
pub mod log;
pub mod spec;
pub mod stage;

pub use conf::{
    C_NAME_DIR_PUBLIC, C_NAME_DIR_SOURCE, C_NAME_FILE_ARTIFACT, C_NAME_HOOK, SpecStageOptions,
};
pub use hook::{BuildLifecycleHook, ScrollCopyPlugin};
pub use spec::{EnumFailurePolicy, EnumStepOutcome, ReportStage, StageError};
pub use stage::{on_build_start, run_stage, run_standalone};
