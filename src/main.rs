//! CLI entry point for newest

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use newest::{Collector, Config, OutputConfig, Reporter, TimeField, Walker, sort_entries};
use termcolor::ColorChoice;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            // Respect FORCE_COLOR environment variable
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            // Respect TERM=dumb
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            // Check if stdout is a TTY
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "newest")]
#[command(about = "Print the newest files in a directory tree")]
#[command(version)]
struct Args {
    /// Directories to search
    #[arg(required = true, value_name = "DIRECTORY")]
    roots: Vec<PathBuf>,

    /// Sort by access time
    #[arg(short, long, conflicts_with = "ctime")]
    atime: bool,

    /// Sort by modification time (the default)
    #[arg(short, long, conflicts_with_all = ["atime", "ctime"])]
    mtime: bool,

    /// Sort by inode change time (so-called creation time)
    #[arg(short, long)]
    ctime: bool,

    /// Show the N newest files
    #[arg(
        short,
        long,
        value_name = "N",
        default_value = "1",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    number: u64,

    /// Show the oldest files instead
    #[arg(short = 'R', long)]
    reverse: bool,

    /// Include directories in the list instead of only plain files
    #[arg(short = 'd', long = "include-dirs")]
    include_dirs: bool,

    /// Suppress timestamp info, show only filenames
    #[arg(short, long)]
    quiet: bool,

    /// Print timestamps in a friendlier format than epoch time
    #[arg(short = 'H', long)]
    human: bool,

    /// Don't include empty files in the results
    #[arg(short = 'e', long = "ignore-empty")]
    ignore_empty: bool,

    /// Control color output: auto, always, never
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    color: ColorMode,
}

fn main() {
    let args = Args::parse();

    let time_field = if args.atime {
        TimeField::Atime
    } else if args.ctime {
        TimeField::Ctime
    } else {
        TimeField::Mtime
    };

    let config = Config {
        time_field,
        count: args.number as usize,
        reverse: args.reverse,
        include_dirs: args.include_dirs,
        quiet: args.quiet,
        human_readable: args.human,
        ignore_empty: args.ignore_empty,
        roots: args.roots,
    };
    if let Err(e) = config.validate() {
        eprintln!("newest: {}", e);
        process::exit(1);
    }

    let walker = Walker::new(&config);
    let mut collector = Collector::new(config.time_field);
    for root in &config.roots {
        // A root that fails to resolve aborts the run before any later
        // root is walked.
        if let Err(e) = walker.walk(root, &mut collector) {
            eprintln!("newest: {}: {}", root.display(), e);
            process::exit(1);
        }
    }

    let mut entries = collector.into_entries();
    sort_entries(&mut entries, config.reverse);

    let color = if should_use_color(args.color) {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    };
    let reporter = Reporter::new(OutputConfig {
        count: config.count,
        quiet: config.quiet,
        human_readable: config.human_readable,
        color,
    });
    if let Err(e) = reporter.report(&entries) {
        eprintln!("newest: error writing output: {}", e);
        process::exit(1);
    }
}
