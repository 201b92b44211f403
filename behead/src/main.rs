//! Skip the leading lines of a text stream and copy the rest.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use behead_lib::{Host, run};
use std::io::{Read, Write};
use std::io::{stderr, stdin, stdout};

/// Default host that uses the real standard streams and process exit.
#[derive(Debug, Clone, Default)]
pub struct RealHost;

#[cfg_attr(coverage_nightly, coverage(off))]
impl Host for RealHost {
    fn input(&mut self) -> Box<dyn Read + Send> {
        Box::new(stdin())
    }

    fn output(&mut self) -> Box<dyn Write + Send> {
        Box::new(stdout())
    }

    fn error(&mut self) -> impl Write {
        stderr()
    }

    fn exit(&mut self, code: i32) {
        std::process::exit(code);
    }
}

#[tokio::main]
#[cfg_attr(coverage_nightly, coverage(off))]
async fn main() -> Result<(), ohno::AppError> {
    run(&mut RealHost, std::env::args()).await
}
