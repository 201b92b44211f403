//! Command-line interface and orchestration for behead
//!
//! `run` parses the arguments, sets up logging, opens the input and output,
//! and drives the line filter. The host environment (standard streams and
//! process exit) is abstracted behind [`Host`] so the whole flow can be
//! exercised from tests.
//!
//! Every failure ends up as a single line on the host's error stream followed
//! by a non-zero exit.

mod args;
mod host;
mod logging;
mod run;

pub use args::{Args, LogLevel};
pub use host::Host;
pub use run::run;
