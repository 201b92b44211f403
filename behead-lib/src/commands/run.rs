//! Command dispatch logic for behead

use super::logging::init_logging;
use super::{Args, Host};
use crate::Result;
use crate::filter::{BeheadError, behead, validate_skip_count};
use crate::progress::Reporting;
use crate::streams::{open_sink, open_source};
use clap::Parser;
use core::time::Duration;
use ohno::{IntoAppError, app_err};
use std::io::{BufReader, Write};

/// How long to wait for the reporter's final summary once the data is written.
const FINAL_REPORT_GRACE: Duration = Duration::from_secs(1);

/// Parse command-line arguments and run the filter
///
/// This function is designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if argument parsing fails or if the filter fails. In both
/// cases a message has already been written to the host's error stream and
/// `host.exit` has been called with a non-zero code.
pub async fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    let args = match Args::try_parse_from(args) {
        Ok(args) => args,
        Err(e) if e.use_stderr() => {
            let _ = write!(host.error(), "{}", e.render());
            host.exit(e.exit_code());
            return Err(app_err!("invalid command line"));
        }
        Err(e) => {
            // --help and --version
            let _ = write!(host.output(), "{}", e.render());
            host.exit(e.exit_code());
            return Ok(());
        }
    };

    init_logging(args.log_level);

    match process(host, &args).await {
        Ok(()) => Ok(()),
        Err(e) => {
            let _ = writeln!(host.error(), "{e}");
            host.exit(1);
            Err(e).into_app_err("behead failed")
        }
    }
}

async fn process<H: Host>(host: &mut H, args: &Args) -> Result<(), BeheadError> {
    let skip_count = validate_skip_count(args.lines)?;
    let mut reporting = Reporting::new(args.report_interval)?;

    let source = open_source(args.input.as_deref(), || host.input())?;
    let sink = open_sink(args.output.as_deref(), || host.output())?;
    if !sink.is_console() {
        reporting = reporting.with_console(host.output());
    }

    let result = behead(BufReader::new(source), sink, skip_count, &mut reporting).await;
    reporting.settle(FINAL_REPORT_GRACE).await;
    result
}
