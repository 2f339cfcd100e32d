//! Staging constants and default layout.

use std::path::{Path, PathBuf};

/// Source directory holding the scroll-animation assets.
pub const C_NAME_DIR_SOURCE: &str = "scroll";
/// Public output directory served by the bundler.
pub const C_NAME_DIR_PUBLIC: &str = "public";
/// Prebuilt script artifact staged next to the assets.
pub const C_NAME_FILE_ARTIFACT: &str = "index-8YjIcPvu.js";
/// Name under which the build hook registers.
pub const C_NAME_HOOK: &str = "copy-scroll-files";

/// Layout of one staging run, relative to `path_dir_root`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecStageOptions {
    /// Project root; every other entry is resolved against it.
    pub path_dir_root: PathBuf,
    /// Asset directory name under the root.
    pub name_dir_source: String,
    /// Public directory name under the root.
    pub name_dir_public: String,
    /// Single file copied into the public directory, if any.
    pub name_file_artifact: Option<String>,
}

impl Default for SpecStageOptions {
    fn default() -> Self {
        Self {
            path_dir_root: PathBuf::from("."),
            name_dir_source: C_NAME_DIR_SOURCE.to_string(),
            name_dir_public: C_NAME_DIR_PUBLIC.to_string(),
            name_file_artifact: Some(C_NAME_FILE_ARTIFACT.to_string()),
        }
    }
}

impl SpecStageOptions {
    /// Default layout rooted at `path_dir_root`.
    pub fn with_root<P: AsRef<Path>>(path_dir_root: P) -> Self {
        Self {
            path_dir_root: path_dir_root.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// `<root>/<source>`
    pub fn path_dir_source(&self) -> PathBuf {
        self.path_dir_root.join(&self.name_dir_source)
    }

    /// `<root>/<public>`
    pub fn path_dir_public(&self) -> PathBuf {
        self.path_dir_root.join(&self.name_dir_public)
    }

    /// `<root>/<public>/<source>`
    pub fn path_dir_destination(&self) -> PathBuf {
        self.path_dir_public().join(&self.name_dir_source)
    }

    /// `(<root>/<artifact>, <root>/<public>/<artifact>)` when an artifact is set.
    pub fn paths_artifact(&self) -> Option<(PathBuf, PathBuf)> {
        self.name_file_artifact.as_ref().map(|name| {
            (
                self.path_dir_root.join(name),
                self.path_dir_public().join(name),
            )
        })
    }
}
