use camino::Utf8PathBuf;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, ValueEnum};
use core::time::Duration;

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Log level for diagnostic output
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// No logging output
    None,

    /// Only error messages
    Error,

    /// Warning and error messages
    Warn,

    /// Info, warning, and error messages
    Info,

    /// Debug, info, warning, and error messages
    Debug,

    /// Trace, debug, info, warning, and error messages
    Trace,
}

#[derive(Parser, Debug)]
#[command(name = "behead", version, author, long_about = None, allow_negative_numbers = true)]
#[command(about = "Skip the leading lines of a text stream and copy the rest")]
#[command(styles = CLAP_STYLES)]
pub struct Args {
    /// Number of leading lines to skip
    #[arg(short = 'n', value_name = "LINES", default_value_t = 0)]
    pub lines: i64,

    /// File to read from (default is standard input)
    #[arg(short = 'f', value_name = "PATH")]
    pub input: Option<Utf8PathBuf>,

    /// File to append the remaining lines to (default is standard output).
    /// Throughput is reported on standard output while writing to a file.
    #[arg(short = 'o', value_name = "PATH")]
    pub output: Option<Utf8PathBuf>,

    /// How often to report throughput while writing to a file
    #[arg(long, value_name = "DURATION", default_value = "10s", value_parser = humantime::parse_duration, env = "BEHEAD_REPORT_INTERVAL")]
    pub report_interval: Duration,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none", env = "BEHEAD_LOG_LEVEL")]
    pub log_level: LogLevel,
}
