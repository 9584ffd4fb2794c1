//! Ordering of collected entries.

use crate::entry::Entry;

/// Sort entries in place by timestamp, newest first, or oldest first
/// when `reverse` is set.
///
/// Entries with equal timestamps have no guaranteed relative order;
/// the comparison is a plain integer ordering, never a time difference.
pub fn sort_entries(entries: &mut [Entry], reverse: bool) {
    if reverse {
        entries.sort_unstable_by_key(|e| e.sort_time);
    } else {
        entries.sort_unstable_by(|a, b| b.sort_time.cmp(&a.sort_time));
    }
}
