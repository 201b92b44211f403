use std::io::{Read, Write};

/// Abstract the host environment to enable testing
pub trait Host: Send + Sync {
    /// Where input comes from when no input file is given (e.g., stdin).
    fn input(&mut self) -> Box<dyn Read + Send>;

    /// Where data and progress go when no output file is given (e.g., stdout).
    fn output(&mut self) -> Box<dyn Write + Send>;

    // where to send error output (e.g., stderr)
    fn error(&mut self) -> impl Write;

    /// Terminate the process (although in a test environment this might just set a flag and return).
    fn exit(&mut self, code: i32);
}
