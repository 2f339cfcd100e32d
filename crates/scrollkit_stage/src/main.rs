use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use scrollkit_stage::conf::{C_NAME_DIR_PUBLIC, C_NAME_DIR_SOURCE, C_NAME_FILE_ARTIFACT};
use scrollkit_stage::log::init_tracing;
use scrollkit_stage::{BuildLifecycleHook, ScrollCopyPlugin, SpecStageOptions, run_standalone};
use tracing::error;

/// scrollkit - stage scroll-animation assets into the public directory
#[derive(Parser, Debug)]
#[command(name = "scrollkit")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Project root (defaults to the current directory)
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// Asset directory under the root
    #[arg(long, global = true, default_value = C_NAME_DIR_SOURCE)]
    source: String,

    /// Public output directory under the root
    #[arg(long, global = true, default_value = C_NAME_DIR_PUBLIC)]
    public_dir: String,

    /// Prebuilt script copied into the public directory
    #[arg(long, global = true, default_value = C_NAME_FILE_ARTIFACT)]
    artifact: String,

    /// Skip the prebuilt script copy
    #[arg(long, global = true)]
    no_artifact: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Pre-build step: copy failures exit with status 1 (default)
    Copy,
    /// Build-start hook: copy failures are logged, exit status stays 0
    BuildStart,
}

impl Args {
    fn to_options(&self) -> SpecStageOptions {
        SpecStageOptions {
            path_dir_root: self.root.clone(),
            name_dir_source: self.source.clone(),
            name_dir_public: self.public_dir.clone(),
            name_file_artifact: (!self.no_artifact).then(|| self.artifact.clone()),
        }
    }
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();
    let spec_opts = args.to_options();

    match args.command.unwrap_or(Command::Copy) {
        Command::Copy => match run_standalone(&spec_opts) {
            Ok(_) => ExitCode::SUCCESS,
            Err(e) => {
                error!("{e}");
                ExitCode::FAILURE
            }
        },
        Command::BuildStart => {
            ScrollCopyPlugin::new(spec_opts).build_start();
            ExitCode::SUCCESS
        }
    }
}
