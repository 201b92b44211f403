use super::ThroughputReporter;
use crate::filter::{BeheadError, LineCounter};
use core::fmt::{Debug, Formatter};
use core::time::Duration;
use std::io::Write;
use tokio::task::JoinHandle;

/// How, and whether, a run reports its throughput to the console.
///
/// Handed to [`behead`](crate::filter::behead), which starts the reporter
/// only when data is going to a file and a console has been supplied.
pub struct Reporting {
    interval: Duration,
    console: Option<Box<dyn Write + Send>>,
    task: Option<JoinHandle<()>>,
}

impl Reporting {
    /// # Errors
    ///
    /// Returns [`BeheadError::InvalidReportInterval`] if `interval` is zero.
    pub fn new(interval: Duration) -> Result<Self, BeheadError> {
        if interval.is_zero() {
            return Err(BeheadError::InvalidReportInterval);
        }

        Ok(Self {
            interval,
            console: None,
            task: None,
        })
    }

    /// Where status lines go.
    #[must_use]
    pub fn with_console(mut self, console: impl Write + Send + 'static) -> Self {
        self.console = Some(Box::new(console));
        self
    }

    pub(crate) fn start(&mut self, counter: &LineCounter) -> Option<ThroughputReporter> {
        let Some(console) = self.console.take() else {
            log::debug!("no console available, throughput will not be reported");
            return None;
        };

        log::debug!("reporting throughput every {}", humantime::format_duration(self.interval));
        Some(ThroughputReporter::spawn(counter.clone(), self.interval, console))
    }

    pub(crate) fn stopped(&mut self, task: JoinHandle<()>) {
        self.task = Some(task);
    }

    /// Wait up to `grace` for the reporter to print its final summary.
    ///
    /// Returns immediately if no reporter was started.
    pub async fn settle(self, grace: Duration) {
        let Some(task) = self.task else {
            return;
        };

        match tokio::time::timeout(grace, task).await {
            Ok(Ok(())) => {}
            Ok(Err(e)) => log::warn!("throughput reporter failed: {e}"),
            Err(_) => log::warn!("throughput reporter did not finish within {}", humantime::format_duration(grace)),
        }
    }
}

impl Debug for Reporting {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Reporting")
            .field("interval", &self.interval)
            .field("console", &self.console.as_ref().map(|_| "<console>"))
            .field("task", &self.task)
            .finish()
    }
}
