//! Newest - walk directory trees and print the most recently touched files

pub mod collect;
pub mod config;
pub mod entry;
pub mod output;
pub mod sort;
pub mod walk;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use collect::Collector;
pub use config::{Config, TimeField};
pub use entry::Entry;
pub use output::{OutputConfig, Reporter};
pub use sort::sort_entries;
pub use walk::Walker;
