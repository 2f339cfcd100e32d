//! Build lifecycle seam.

use crate::conf::{C_NAME_HOOK, SpecStageOptions};
use crate::spec::ReportStage;
use crate::stage::on_build_start;

/// Callback a build tool invokes at fixed points of its run.
pub trait BuildLifecycleHook {
    /// Registration name shown in build logs.
    fn name(&self) -> &str;

    /// Called once when the build starts. Must not fail the build.
    fn build_start(&self) -> ReportStage;
}

/// Stages scroll assets and the prebuilt bundle at build start.
#[derive(Debug, Clone)]
pub struct ScrollCopyPlugin {
    spec_opts: SpecStageOptions,
}

impl ScrollCopyPlugin {
    pub fn new(spec_opts: SpecStageOptions) -> Self {
        Self { spec_opts }
    }
}

impl BuildLifecycleHook for ScrollCopyPlugin {
    fn name(&self) -> &str {
        C_NAME_HOOK
    }

    fn build_start(&self) -> ReportStage {
        let _span = tracing::info_span!("hook", name = self.name()).entered();
        on_build_start(&self.spec_opts)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{BuildLifecycleHook, ScrollCopyPlugin};
    use crate::conf::SpecStageOptions;
    use crate::spec::EnumStepOutcome;

    #[test]
    fn plugin_runs_through_trait_object() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let root = tmp.path();
        fs::create_dir_all(root.join("scroll/img")).expect("mkdir");
        fs::write(root.join("scroll/img/card.jpg"), [0xff, 0xd8, 0xff]).expect("write");

        let l_hooks: Vec<Box<dyn BuildLifecycleHook>> = vec![Box::new(ScrollCopyPlugin::new(
            SpecStageOptions::with_root(root),
        ))];
        let report = l_hooks[0].build_start();

        assert_eq!(l_hooks[0].name(), "copy-scroll-files");
        assert_eq!(report.outcome_mirror, EnumStepOutcome::Done);
        assert_eq!(report.outcome_artifact, EnumStepOutcome::SkippedMissing);
        assert_eq!(
            fs::read(root.join("public/scroll/img/card.jpg")).expect("card"),
            [0xff, 0xd8, 0xff]
        );
    }
}
