use super::Sampler;
use crate::filter::LineCounter;
use core::time::Duration;
use std::io::Write;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

const LIVE_UPDATE: char = '\r';
const FINAL_SUMMARY: char = '\n';

/// Handle on a running throughput reporting task.
///
/// The task keeps sampling until [`stop`](Self::stop) is called or the
/// handle is dropped, then prints a final summary line and exits.
#[derive(Debug)]
pub struct ThroughputReporter {
    stop: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl ThroughputReporter {
    /// Start reporting on `console` every `interval`.
    ///
    /// Must be called from within a tokio runtime. `interval` must be non-zero.
    pub fn spawn<W>(counter: LineCounter, interval: Duration, console: W) -> Self
    where
        W: Write + Send + 'static,
    {
        let (stop, stopped) = oneshot::channel();
        let task = tokio::spawn(report(counter, interval, stopped, console));
        Self { stop, task }
    }

    /// Signal the task to print its summary and finish.
    ///
    /// The returned handle completes once the summary has been written.
    pub fn stop(self) -> JoinHandle<()> {
        // An error means the task is already gone, nothing left to signal.
        let _ = self.stop.send(());
        self.task
    }
}

async fn report<W: Write>(counter: LineCounter, interval: Duration, mut stopped: oneshot::Receiver<()>, mut console: W) {
    let start = Instant::now();
    let mut sampler = Sampler::new(start);
    let mut ticker = time::interval_at(start + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;

            _ = &mut stopped => {
                emit(&mut console, &sampler.latest().status_line(interval, FINAL_SUMMARY));
                log::debug!("throughput reporting stopped after {} lines", sampler.latest().lines);
                return;
            }

            _ = ticker.tick() => {
                let sample = sampler.sample(Instant::now(), counter.get());
                emit(&mut console, &sample.status_line(interval, LIVE_UPDATE));
            }
        }
    }
}

/// Console output is best effort, failures never reach the filter.
fn emit<W: Write>(console: &mut W, line: &str) {
    if let Err(e) = console.write_all(line.as_bytes()).and_then(|()| console.flush()) {
        log::trace!("ignoring console write failure: {e}");
    }
}
