use camino::Utf8PathBuf;
use std::io;

/// Failures that end a run of the line filter.
#[derive(Debug, thiserror::Error)]
pub enum BeheadError {
    /// The number of lines to skip was negative.
    #[error("non-negative number of lines to skip required (-n {0})")]
    InvalidSkipCount(i64),

    /// The reporting interval cannot drive a ticker.
    #[error("report interval must be greater than zero (--report-interval)")]
    InvalidReportInterval,

    /// The input file could not be opened.
    #[error("input file cannot be opened (-f {path}): {source}")]
    OpenSource { path: Utf8PathBuf, source: io::Error },

    /// The output file could not be opened, created, or appended to.
    #[error("output file cannot be opened (-o {path}): {source}")]
    OpenSink { path: Utf8PathBuf, source: io::Error },

    /// Pulling the next line from the input failed.
    #[error("did not finish reading input cleanly: {0}")]
    Read(#[source] io::Error),

    /// Emitting a line to the output failed.
    #[error("unable to write to output anymore: {0}")]
    Write(#[source] io::Error),
}
