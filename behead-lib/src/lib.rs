#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for behead
//!
//! This library holds all functionality for the behead tool, which drops the
//! leading lines of a text stream and copies the remainder to an output,
//! reporting throughput on the console while writing to a file.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`filter`]: The skip-and-copy line filter
//! - [`progress`]: Concurrent throughput reporting
//! - [`streams`]: Opening inputs and outputs

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod filter;
#[cfg(not(any(debug_assertions, test)))]
mod filter;

#[cfg(any(debug_assertions, test))]
pub mod progress;
#[cfg(not(any(debug_assertions, test)))]
mod progress;

#[cfg(any(debug_assertions, test))]
pub mod streams;
#[cfg(not(any(debug_assertions, test)))]
mod streams;

#[cfg(test)]
mod test_util;

pub use crate::commands::{Host, run};
