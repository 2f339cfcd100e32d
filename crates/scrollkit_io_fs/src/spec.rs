//! Mirror specification models and top-level error types.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////
// #region EnumsInit

/// Kind of one listed source entry.
///
/// Taken from the directory listing as-is: symlinks are not followed, so a
/// link is classified as [`EnumEntryKind::File`] and copied through to its
/// target bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnumEntryKind {
    /// Recurse and recreate at destination.
    Directory,
    /// Copy byte content to destination, overwriting.
    File,
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region StructsAndErrors

/// Source/destination roots for one `mirror` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpecMirrorPair {
    /// Directory whose tree is copied.
    pub path_dir_src: PathBuf,
    /// Directory receiving the copy.
    pub path_dir_dst: PathBuf,
}

impl SpecMirrorPair {
    pub fn new<P, Q>(dir_source: P, dir_destination: Q) -> Self
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        Self {
            path_dir_src: dir_source.as_ref().to_path_buf(),
            path_dir_dst: dir_destination.as_ref().to_path_buf(),
        }
    }
}

/// Failure of one `mirror`/`stage_file` call.
///
/// The first failing filesystem operation aborts the run; everything written
/// before it stays on disk.
#[derive(Debug, Error)]
pub enum MirrorError {
    /// Source path exists but is not a directory.
    #[error("Source is not a directory: {}", .0.display())]
    SourceNotDirectory(PathBuf),
    /// Destination is the source or lies inside it.
    #[error(
        "Destination lies inside source directory: {} <- {}",
        .source_dir.display(),
        .destination_dir.display()
    )]
    DestinationInsideSource {
        source_dir: PathBuf,
        destination_dir: PathBuf,
    },
    /// Destination directory could not be created.
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Source directory could not be listed.
    #[error("Failed to read directory {}: {source}", .path.display())]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Source entry type could not be inspected.
    #[error("Failed to inspect {}: {source}", .path.display())]
    InspectEntry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// File copy failed; `path` is the destination being written.
    #[error("Failed to copy {} -> {}: {source}", .path_src.display(), .path.display())]
    CopyFile {
        path_src: PathBuf,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MirrorError {
    /// Path of the operation that failed.
    pub fn path(&self) -> &Path {
        match self {
            Self::SourceNotDirectory(path) => path,
            Self::DestinationInsideSource { destination_dir, .. } => destination_dir,
            Self::CreateDirectory { path, .. }
            | Self::ReadDirectory { path, .. }
            | Self::InspectEntry { path, .. }
            | Self::CopyFile { path, .. } => path,
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
