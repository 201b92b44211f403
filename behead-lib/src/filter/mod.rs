//! The line filter: drop the first N lines of a stream, copy the rest.
//!
//! Lines are read one at a time and each emitted line is written before the
//! next is read, so a slow sink slows the reader down instead of memory
//! growing. Every processed line bumps a shared [`LineCounter`] that the
//! progress reporter samples.

mod behead;
mod counter;
mod error;

pub use behead::{behead, skip_lines, validate_skip_count};
pub use counter::LineCounter;
pub use error::BeheadError;
