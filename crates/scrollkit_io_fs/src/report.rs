//! Mirror report models and mutable report builder.

use std::collections::BTreeMap;
use std::fmt;

/// Aggregate counters for one successful `mirror` run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReportMirror {
    /// Total listed directory/file entries.
    pub cnt_scanned: u64,
    /// Number of destination directories ensured (root included).
    pub cnt_dirs: u64,
    /// Number of files written to destination.
    pub cnt_files: u64,
    /// Bytes written across all copied files.
    pub n_bytes: u64,
    /// Source root was absent; nothing was touched.
    pub if_source_missing: bool,
}

impl ReportMirror {
    /// Report for a run that found no source directory.
    pub fn source_missing() -> Self {
        Self {
            if_source_missing: true,
            ..Self::default()
        }
    }

    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_scanned".to_string(), self.cnt_scanned);
        dict_counts.insert("cnt_dirs".to_string(), self.cnt_dirs);
        dict_counts.insert("cnt_files".to_string(), self.cnt_files);
        dict_counts.insert("n_bytes".to_string(), self.n_bytes);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        if self.if_source_missing {
            return format!("{prefix} source missing");
        }
        format!(
            "{prefix} scanned={} dirs={} files={} bytes={}",
            self.cnt_scanned, self.cnt_dirs, self.cnt_files, self.n_bytes
        )
    }
}

impl fmt::Display for ReportMirror {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[MIRROR]"))
    }
}

/// Mutable accumulator for mirror statistics.
#[derive(Debug, Default, Clone)]
pub struct ReportMirrorBuilder {
    pub cnt_scanned: u64,
    pub cnt_dirs: u64,
    pub cnt_files: u64,
    pub n_bytes: u64,
}

impl ReportMirrorBuilder {
    pub fn add_scanned(&mut self) {
        self.cnt_scanned += 1;
    }

    pub fn add_dir(&mut self) {
        self.cnt_dirs += 1;
    }

    /// Count one copied file of `n_bytes` length.
    pub fn add_file(&mut self, n_bytes: u64) {
        self.cnt_files += 1;
        self.n_bytes += n_bytes;
    }

    /// Finalize builder into immutable report.
    pub fn build(self) -> ReportMirror {
        ReportMirror {
            cnt_scanned: self.cnt_scanned,
            cnt_dirs: self.cnt_dirs,
            cnt_files: self.cnt_files,
            n_bytes: self.n_bytes,
            if_source_missing: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ReportMirror, ReportMirrorBuilder};

    #[test]
    fn report_mirror_to_dict_and_format() {
        let mut builder = ReportMirrorBuilder::default();
        builder.add_dir();
        builder.add_dir();
        builder.add_scanned();
        builder.add_scanned();
        builder.add_scanned();
        builder.add_file(2);
        builder.add_file(40);
        let report = builder.build();

        let dict_counts = report.to_dict();
        assert_eq!(dict_counts["cnt_scanned"], 3);
        assert_eq!(dict_counts["cnt_dirs"], 2);
        assert_eq!(dict_counts["cnt_files"], 2);
        assert_eq!(dict_counts["n_bytes"], 42);

        let txt = report.format("[MIRROR]");
        assert_eq!(txt, "[MIRROR] scanned=3 dirs=2 files=2 bytes=42");
        assert_eq!(report.to_string(), txt);
    }

    #[test]
    fn report_mirror_source_missing_format() {
        let report = ReportMirror::source_missing();
        assert!(report.if_source_missing);
        assert_eq!(report.cnt_files, 0);
        assert_eq!(report.to_string(), "[MIRROR] source missing");
    }
}
