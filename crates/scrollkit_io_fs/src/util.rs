use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::spec::{EnumEntryKind, MirrorError};

////////////////////////////////////////////////////////////////////////////////
// #region PathUtilities

fn _is_relative_to_base(path: &Path, base: &Path) -> bool {
    path.starts_with(base)
}

fn _normalize_path(path: &Path) -> PathBuf {
    if let Ok(resolved) = fs::canonicalize(path) {
        return resolved;
    }
    // Destination may not exist yet: resolve its nearest existing ancestor.
    if let (Some(parent), Some(name)) = (path.parent(), path.file_name()) {
        if !parent.as_os_str().is_empty() {
            return _normalize_path(parent).join(name);
        }
    }
    if path.is_absolute() {
        return path.to_path_buf();
    }
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(path)
}

/// `dst` equals `src` or lies beneath it, so copying would feed on itself.
///
/// A destination that merely contains the source (an ancestor) is fine.
pub(crate) fn is_destination_inside_source(src: &Path, dst: &Path) -> bool {
    let src_resolved = _normalize_path(src);
    let dst_resolved = _normalize_path(dst);
    _is_relative_to_base(&dst_resolved, &src_resolved)
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region EntryUtilities

/// Classify one listed entry by its non-following file type.
pub(crate) fn classify_entry(file_type: fs::FileType) -> EnumEntryKind {
    if file_type.is_dir() {
        EnumEntryKind::Directory
    } else {
        EnumEntryKind::File
    }
}

pub(crate) fn ensure_directory(path_dir: &Path) -> Result<(), MirrorError> {
    fs::create_dir_all(path_dir).map_err(|e| MirrorError::CreateDirectory {
        path: path_dir.to_path_buf(),
        source: e,
    })
}

/// Copy file bytes, replacing whatever file is at `path_file_dst`.
///
/// Permissions and timestamps of the destination are whatever the platform
/// copy leaves behind; they are not part of the mirrored state.
pub(crate) fn copy_file_overwrite(
    path_file_src: &Path,
    path_file_dst: &Path,
) -> Result<u64, MirrorError> {
    fs::copy(path_file_src, path_file_dst).map_err(|e| MirrorError::CopyFile {
        path_src: path_file_src.to_path_buf(),
        path: path_file_dst.to_path_buf(),
        source: e,
    })
}

pub(crate) fn is_not_found(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::NotFound
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
