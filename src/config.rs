//! Run configuration consumed by the walker, sorter and reporter.

use std::path::PathBuf;

/// Which stat timestamp entries are sorted on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeField {
    /// Last access time.
    Atime,
    /// Last modification time (the default).
    #[default]
    Mtime,
    /// Last inode change time.
    Ctime,
}

/// Configuration for one run.
///
/// Built once by the CLI layer and threaded immutably through the
/// pipeline; the core never reads flags from anywhere else.
#[derive(Debug, Clone)]
pub struct Config {
    pub time_field: TimeField,
    /// Number of entries to report. Must be at least 1.
    pub count: usize,
    /// Show the oldest entries first instead of the newest.
    pub reverse: bool,
    /// Include directories in the results, not only plain files.
    pub include_dirs: bool,
    /// Print only paths, no timestamps.
    pub quiet: bool,
    /// Render timestamps as calendar dates instead of epoch seconds.
    pub human_readable: bool,
    /// Skip objects with size zero.
    pub ignore_empty: bool,
    /// Root directories to walk, in order.
    pub roots: Vec<PathBuf>,
}

impl Config {
    /// Check the constraints the CLI also enforces, for callers that
    /// build a `Config` directly.
    pub fn validate(&self) -> Result<(), String> {
        if self.count == 0 {
            return Err("count must be a positive number".to_string());
        }
        if self.roots.is_empty() {
            return Err("no directory to search".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            time_field: TimeField::default(),
            count: 1,
            reverse: false,
            include_dirs: false,
            quiet: false,
            human_readable: false,
            ignore_empty: false,
            roots: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            roots: vec![PathBuf::from(".")],
            ..Default::default()
        }
    }

    #[test]
    fn test_default_sorts_by_mtime() {
        assert_eq!(Config::default().time_field, TimeField::Mtime);
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn test_zero_count_rejected() {
        let config = Config {
            count: 0,
            ..valid_config()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("positive"), "unexpected message: {}", err);
    }

    #[test]
    fn test_missing_roots_rejected() {
        assert!(Config::default().validate().is_err());
    }
}
