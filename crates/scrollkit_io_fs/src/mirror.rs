//! Recursive directory mirror and single-file staging.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::report::{ReportMirror, ReportMirrorBuilder};
use crate::spec::{EnumEntryKind, MirrorError, SpecMirrorPair};
use crate::util::{
    classify_entry, copy_file_overwrite, ensure_directory, is_destination_inside_source,
    is_not_found,
};

#[derive(Debug, Clone)]
struct SpecDirEntry {
    path_src: PathBuf,
    name_entry: OsString,
    enum_kind: EnumEntryKind,
}

/// Mirror the tree under `dir_source` into `dir_destination`.
///
/// Every file is copied byte-for-byte and every subdirectory recreated. Files
/// already at the destination are overwritten unconditionally; destination
/// entries with no source counterpart are left alone.
///
/// A missing source root is a no-op returning [`ReportMirror::source_missing`].
/// Any other failure aborts at the first failing path; copies made before it
/// stay on disk.
pub fn mirror<P, Q>(dir_source: P, dir_destination: Q) -> Result<ReportMirror, MirrorError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    mirror_pair(&SpecMirrorPair::new(dir_source, dir_destination))
}

/// [`mirror`] over a prepared [`SpecMirrorPair`].
pub fn mirror_pair(spec_pair: &SpecMirrorPair) -> Result<ReportMirror, MirrorError> {
    let path_dir_src = &spec_pair.path_dir_src;
    let path_dir_dst = &spec_pair.path_dir_dst;

    match fs::metadata(path_dir_src) {
        Ok(meta_src) if !meta_src.is_dir() => {
            return Err(MirrorError::SourceNotDirectory(path_dir_src.clone()));
        }
        Ok(_) => {}
        Err(e) if is_not_found(&e) => {
            debug!(path = %path_dir_src.display(), "mirror source missing; nothing to do");
            return Ok(ReportMirror::source_missing());
        }
        Err(e) => {
            return Err(MirrorError::InspectEntry {
                path: path_dir_src.clone(),
                source: e,
            });
        }
    }
    if is_destination_inside_source(path_dir_src, path_dir_dst) {
        return Err(MirrorError::DestinationInsideSource {
            source_dir: path_dir_src.clone(),
            destination_dir: path_dir_dst.clone(),
        });
    }

    let mut builder_report = ReportMirrorBuilder::default();
    walk_directory(path_dir_src, path_dir_dst, &mut builder_report)?;
    Ok(builder_report.build())
}

/// Copy one file over `file_destination`, returning bytes written.
///
/// The destination parent must already exist.
pub fn stage_file<P, Q>(file_source: P, file_destination: Q) -> Result<u64, MirrorError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let n_bytes = copy_file_overwrite(file_source.as_ref(), file_destination.as_ref())?;
    debug!(
        src = %file_source.as_ref().display(),
        dst = %file_destination.as_ref().display(),
        n_bytes,
        "staged file"
    );
    Ok(n_bytes)
}

fn list_entries(path_dir_src: &Path) -> Result<Vec<SpecDirEntry>, MirrorError> {
    let iter_entries = fs::read_dir(path_dir_src).map_err(|e| MirrorError::ReadDirectory {
        path: path_dir_src.to_path_buf(),
        source: e,
    })?;

    let mut l_entries = Vec::new();
    for _entry_res in iter_entries {
        let entry = _entry_res.map_err(|e| MirrorError::ReadDirectory {
            path: path_dir_src.to_path_buf(),
            source: e,
        })?;
        let path_entry = entry.path();
        let cfg_file_type = entry.file_type().map_err(|e| MirrorError::InspectEntry {
            path: path_entry.clone(),
            source: e,
        })?;
        l_entries.push(SpecDirEntry {
            path_src: path_entry,
            name_entry: entry.file_name(),
            enum_kind: classify_entry(cfg_file_type),
        });
    }
    l_entries.sort_by(|a, b| a.name_entry.cmp(&b.name_entry));
    Ok(l_entries)
}

fn walk_directory(
    path_dir_src: &Path,
    path_dir_dst: &Path,
    builder_report: &mut ReportMirrorBuilder,
) -> Result<(), MirrorError> {
    ensure_directory(path_dir_dst)?;
    builder_report.add_dir();

    for spec_entry in list_entries(path_dir_src)? {
        builder_report.add_scanned();
        let path_dst = path_dir_dst.join(&spec_entry.name_entry);
        match spec_entry.enum_kind {
            EnumEntryKind::Directory => {
                walk_directory(&spec_entry.path_src, &path_dst, builder_report)?;
            }
            EnumEntryKind::File => {
                let n_bytes = copy_file_overwrite(&spec_entry.path_src, &path_dst)?;
                builder_report.add_file(n_bytes);
                debug!(path = %path_dst.display(), n_bytes, "copied");
            }
        }
    }
    Ok(())
}
