//! Accumulation of entries as the walker discovers them.

use std::fs::Metadata;
use std::path::Path;

use crate::config::TimeField;
use crate::entry::Entry;

/// Collects accepted filesystem objects into a growable result
/// sequence, stamping each with the configured timestamp field.
///
/// Entries are kept in traversal order; one entry per accepted visit,
/// no deduplication.
pub struct Collector {
    time_field: TimeField,
    entries: Vec<Entry>,
}

impl Collector {
    pub fn new(time_field: TimeField) -> Self {
        Self {
            time_field,
            entries: Vec::new(),
        }
    }

    /// Record one accepted object. Called by the walker for every visit
    /// that passes the inclusion filters.
    pub fn accept(&mut self, path: &Path, meta: &Metadata) {
        self.entries
            .push(Entry::new(sort_time_of(meta, self.time_field), path));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Consume the collector, yielding entries in traversal order.
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}

/// Pick the requested stat field, in whole seconds since the epoch.
#[cfg(unix)]
fn sort_time_of(meta: &Metadata, field: TimeField) -> i64 {
    use std::os::unix::fs::MetadataExt;

    match field {
        TimeField::Atime => meta.atime(),
        TimeField::Mtime => meta.mtime(),
        TimeField::Ctime => meta.ctime(),
    }
}

/// Non-Unix targets have no ctime; fall back to the modification time.
#[cfg(not(unix))]
fn sort_time_of(meta: &Metadata, field: TimeField) -> i64 {
    use std::time::UNIX_EPOCH;

    let time = match field {
        TimeField::Atime => meta.accessed(),
        TimeField::Mtime | TimeField::Ctime => meta.modified(),
    };
    time.ok()
        .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
