//! Console throughput reporting while data is streamed to a file.
//!
//! A [`ThroughputReporter`] runs as its own tokio task, samples the shared
//! [`LineCounter`](crate::filter::LineCounter) on a fixed interval, and
//! rewrites a single console line with the current rates. When the filter is
//! done it is told to stop, and it leaves a final summary line behind.

mod reporter;
mod reporting;
mod throughput;

pub use reporter::ThroughputReporter;
pub use reporting::Reporting;
pub use throughput::{Sampler, Throughput};
