//! `scrollkit_io_fs` v1:
//! Rust-side directory mirror used to stage static assets.
//!
//! Modules:
//! - `mirror` : recursive traversal and file copy
//! - `spec`   : path pair, entry kinds, errors
//! - `report` : run-time report model
//! - `util`   : shared helper functions

pub mod mirror;
pub mod report;
pub mod spec;
mod util;

pub use mirror::{mirror, mirror_pair, stage_file};
pub use report::{ReportMirror, ReportMirrorBuilder};
pub use spec::{EnumEntryKind, MirrorError, SpecMirrorPair};
