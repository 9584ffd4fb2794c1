//! Rendering of the sorted results to standard output.

use std::io::{self, Write};

use chrono::{Local, TimeZone};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::entry::Entry;

/// How the reporter renders each line.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Maximum number of entries to emit.
    pub count: usize,
    /// Emit only paths, no timestamps.
    pub quiet: bool,
    /// Render timestamps as local calendar dates instead of epoch seconds.
    pub human_readable: bool,
    /// Color selection for the timestamp column.
    pub color: ColorChoice,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            count: 1,
            quiet: false,
            human_readable: false,
            color: ColorChoice::Never,
        }
    }
}

/// Prints the first `count` entries of the sorted sequence, one line
/// per entry: `<path>` in quiet mode, `<path>\t<timestamp>` otherwise.
pub struct Reporter {
    config: OutputConfig,
}

impl Reporter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Write at most `count` entries to stdout. Emitting fewer, or
    /// zero, is valid when the result set is small.
    pub fn report(&self, entries: &[Entry]) -> io::Result<()> {
        let mut stdout = StandardStream::stdout(self.config.color);
        self.report_to(&mut stdout, entries)
    }

    /// Same as [`report`](Self::report) against an arbitrary writer.
    pub fn report_to<W: WriteColor>(&self, out: &mut W, entries: &[Entry]) -> io::Result<()> {
        for entry in entries.iter().take(self.config.count) {
            self.write_entry(out, entry)?;
        }
        Ok(())
    }

    fn write_entry<W: WriteColor>(&self, out: &mut W, entry: &Entry) -> io::Result<()> {
        write!(out, "{}", entry.path.display())?;
        if !self.config.quiet {
            write!(out, "\t")?;
            out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
            if self.config.human_readable {
                write!(out, "{}", format_timestamp(entry.sort_time))?;
            } else {
                write!(out, "{}", entry.sort_time)?;
            }
            out.reset()?;
        }
        writeln!(out)
    }
}

/// Render epoch seconds as a calendar date in local time, in the
/// classic `ctime`-style `%c` layout. Timestamps outside the calendar's
/// range fall back to the raw number.
pub fn format_timestamp(secs: i64) -> String {
    Local
        .timestamp_opt(secs, 0)
        .earliest()
        .map(|t| t.format("%c").to_string())
        .unwrap_or_else(|| secs.to_string())
}
