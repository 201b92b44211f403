//! Acquisition of the byte streams the filter reads from and writes to.
//!
//! An absent or empty path maps to the host's standard input or output.
//! Anything else is opened as a file.

mod sink;
mod source;

pub use sink::{Sink, open_sink};
pub use source::{Source, open_source};

use camino::Utf8Path;

/// Returns the path only if it names a file rather than a standard stream.
fn file_path(path: Option<&Utf8Path>) -> Option<&Utf8Path> {
    path.filter(|p| !p.as_str().is_empty())
}
