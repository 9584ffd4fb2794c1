//! Depth-first traversal of the root directories.

use std::io;
use std::path::Path;

use walkdir::WalkDir;

use crate::collect::Collector;
use crate::config::Config;

/// Walks a directory tree depth-first, forwarding every object that
/// passes the inclusion filters to the collector.
///
/// Symlinks are never followed; anything that is neither a plain file
/// nor a directory is skipped. Objects that cannot be read or stat'd
/// produce a warning on stderr and the walk continues with their
/// siblings. Only a root that fails to resolve aborts the run.
pub struct Walker<'a> {
    config: &'a Config,
}

impl<'a> Walker<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Walk one root, appending results to `collector`.
    ///
    /// Returns `Err` only when `root` does not exist or is not a
    /// directory; per-object failures inside the tree are reported and
    /// recovered from locally.
    pub fn walk(&self, root: &Path, collector: &mut Collector) -> io::Result<()> {
        // Resolve the root with link-following stat, so a symlink to a
        // directory is a valid root even though traversal is physical.
        let root_meta = std::fs::metadata(root)?;
        if !root_meta.is_dir() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "not a directory",
            ));
        }

        let walk = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name();

        for item in walk {
            let entry = match item {
                Ok(entry) => entry,
                Err(err) => {
                    // Unreadable directory or lost entry; the error
                    // display names the offending path.
                    eprintln!("newest: {}", err);
                    continue;
                }
            };
            let meta = match entry.metadata() {
                Ok(meta) => meta,
                Err(err) => {
                    eprintln!("newest: cannot stat {}: {}", entry.path().display(), err);
                    continue;
                }
            };

            if self.config.ignore_empty && meta.len() == 0 {
                continue;
            }
            if meta.is_dir() {
                if self.config.include_dirs {
                    collector.accept(entry.path(), &meta);
                }
            } else if meta.is_file() {
                collector.accept(entry.path(), &meta);
            }
            // Symlinks, fifos, sockets and device nodes fall through.
        }

        Ok(())
    }
}
