use core::time::Duration;
use humantime::format_duration;
use tokio::time::Instant;

/// Rates derived from one sample of the line counter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Throughput {
    /// Time since reporting started.
    pub elapsed: Duration,

    /// Lines per second since the previous sample.
    pub interval_rate: f64,

    /// Lines per second since reporting started.
    pub overall_rate: f64,

    /// Lines processed at sample time.
    pub lines: u64,
}

impl Throughput {
    /// Render the status line, with `interval` shown as the window of the interval rate.
    ///
    /// The elapsed time is truncated to whole seconds.
    #[must_use]
    pub fn status_line(&self, interval: Duration, terminator: char) -> String {
        format!(
            "{} have elapsed. {:.2} lines/sec (last {}), {:.2} lines/sec (overall), {} total rows     {terminator}",
            format_duration(Duration::from_secs(self.elapsed.as_secs())),
            self.interval_rate,
            format_duration(interval),
            self.overall_rate,
            self.lines,
        )
    }
}

/// Tracks the previous sample so each new one can report an interval rate.
#[derive(Debug, Clone)]
pub struct Sampler {
    start: Instant,
    previous_time: Instant,
    previous_lines: u64,
    latest: Throughput,
}

impl Sampler {
    #[must_use]
    pub fn new(start: Instant) -> Self {
        Self {
            start,
            previous_time: start,
            previous_lines: 0,
            latest: Throughput::default(),
        }
    }

    /// Record the counter value observed at `now` and return the resulting rates.
    pub fn sample(&mut self, now: Instant, lines: u64) -> Throughput {
        let elapsed = now.duration_since(self.start);
        let since_previous = now.duration_since(self.previous_time);

        self.latest = Throughput {
            elapsed,
            interval_rate: rate(lines.saturating_sub(self.previous_lines), since_previous),
            overall_rate: rate(lines, elapsed),
            lines,
        };
        self.previous_time = now;
        self.previous_lines = lines;

        self.latest
    }

    /// The most recent sample, or all zeroes if nothing has been sampled yet.
    #[must_use]
    pub const fn latest(&self) -> Throughput {
        self.latest
    }
}

#[expect(clippy::cast_precision_loss, reason = "rates are approximate")]
fn rate(lines: u64, over: Duration) -> f64 {
    let secs = over.as_secs_f64();
    if secs > 0.0 { lines as f64 / secs } else { 0.0 }
}
