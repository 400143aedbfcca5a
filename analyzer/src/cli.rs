use std::num::NonZero;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use crossgrid::report::DEFAULT_CROSSINGS;
use log::LevelFilter;

/// Extract word slots and crossings from a crossword grid.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Grid file, one row per line of `.` (open) and `#` (blocked). Use `-` for stdin.
    pub file: Option<PathBuf>,

    /// Analyze a randomly blocked grid instead of reading one.
    #[arg(long, conflicts_with = "file")]
    pub random: bool,

    /// Rows of the random grid.
    #[arg(long, default_value_t = NonZero::new(10).unwrap())]
    pub rows: NonZero<usize>,

    /// Columns of the random grid.
    #[arg(long, default_value_t = NonZero::new(10).unwrap())]
    pub cols: NonZero<usize>,

    /// Blocked cells in the random grid.
    #[arg(long, default_value_t = 15)]
    pub blocks: usize,

    /// Seed for the random grid. Drawn from entropy if absent.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Crossings listed in the text report.
    #[arg(long, default_value_t = DEFAULT_CROSSINGS)]
    pub crossings: usize,

    /// Log level: off, error, warn, info, debug, trace.
    #[arg(long, default_value_t = LevelFilter::Warn)]
    pub log_level: LevelFilter,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum Format {
    /// Labelled grid followed by the slot report.
    Text,
    /// The full analysis as JSON.
    Json,
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use log::LevelFilter;

    use crate::cli::Cli;

    #[test]
    fn log_level_parses() {
        let cli = Cli::try_parse_from(["crossgrid", "--random", "--log-level", "debug"]).unwrap();
        assert_eq!(cli.log_level, LevelFilter::Debug);

        let cli = Cli::try_parse_from(["crossgrid", "--random"]).unwrap();
        assert_eq!(cli.log_level, LevelFilter::Warn);
    }

    #[test]
    fn bad_log_level_is_rejected() {
        assert!(Cli::try_parse_from(["crossgrid", "--random", "--log-level", "loud"]).is_err());
    }
}
