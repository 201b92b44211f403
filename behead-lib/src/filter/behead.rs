use super::{BeheadError, LineCounter};
use crate::progress::Reporting;
use crate::streams::Sink;
use std::io::{BufRead, Write};

/// Check that `skip_count` is usable as a number of lines to skip.
///
/// # Errors
///
/// Returns [`BeheadError::InvalidSkipCount`] if `skip_count` is negative.
pub fn validate_skip_count(skip_count: i64) -> Result<u64, BeheadError> {
    u64::try_from(skip_count).ok().ok_or(BeheadError::InvalidSkipCount(skip_count))
}

/// Copy `reader` to `sink`, skipping the first `skip_count` lines.
///
/// The copy runs on tokio's blocking pool so the caller's executor stays free
/// to drive the reporter. When the sink is a file, throughput is reported on
/// the console configured in `reporting` while the copy runs. The reporter is
/// told to stop once the copy ends, whether it succeeded or not; use
/// [`Reporting::settle`] to wait for its final line.
///
/// Must be called from within a tokio runtime. A negative count is rejected
/// earlier by [`validate_skip_count`].
///
/// # Errors
///
/// Returns whatever [`skip_lines`] returns.
pub async fn behead<R>(reader: R, mut sink: Sink, skip_count: u64, reporting: &mut Reporting) -> Result<(), BeheadError>
where
    R: BufRead + Send + 'static,
{
    let counter = LineCounter::new();
    let reporter = if sink.is_console() { None } else { reporting.start(&counter) };

    log::debug!("skipping the first {skip_count} lines");
    let filter_counter = counter.clone();
    let result = match tokio::task::spawn_blocking(move || skip_lines(reader, &mut sink, skip_count, &filter_counter)).await {
        Ok(result) => result,
        Err(e) => std::panic::resume_unwind(e.into_panic()),
    };

    if let Some(reporter) = reporter {
        reporting.stopped(reporter.stop());
    }

    match &result {
        Ok(()) => log::info!(
            "processed {} lines, emitted {}",
            counter.get(),
            counter.get().saturating_sub(skip_count)
        ),
        Err(e) => log::debug!("stopped after {} lines: {e}", counter.get()),
    }

    result
}

/// The filtering loop.
///
/// Each line has its terminator (`\n`, or `\r\n`) removed and exactly one
/// `\n` appended before it is written, including a final line that had no
/// terminator at all. `counter` is incremented after every line, skipped or
/// not, and lines are skipped while it is below `skip_count`.
///
/// # Errors
///
/// Returns [`BeheadError::Read`] if the reader fails and [`BeheadError::Write`]
/// if writing or the final flush fails. Lines already written stay written.
pub fn skip_lines<R, W>(mut reader: R, mut writer: W, skip_count: u64, counter: &LineCounter) -> Result<(), BeheadError>
where
    R: BufRead,
    W: Write,
{
    let mut line = Vec::new();

    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line).map_err(BeheadError::Read)? == 0 {
            break;
        }

        if counter.get() >= skip_count {
            strip_terminator(&mut line);
            line.push(b'\n');
            writer.write_all(&line).map_err(BeheadError::Write)?;
        }

        counter.increment();
    }

    writer.flush().map_err(BeheadError::Write)
}

fn strip_terminator(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        let _ = line.pop();
    }
    if line.last() == Some(&b'\r') {
        let _ = line.pop();
    }
}
