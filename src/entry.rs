//! The record kept for each filesystem object that passes the filters.

use std::path::PathBuf;

/// One discovered filesystem object: its path and the timestamp chosen
/// for sorting, in seconds since the Unix epoch.
///
/// Immutable once created; owned by the collector's result sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub sort_time: i64,
    pub path: PathBuf,
}

impl Entry {
    pub fn new(sort_time: i64, path: impl Into<PathBuf>) -> Self {
        Self {
            sort_time,
            path: path.into(),
        }
    }
}
