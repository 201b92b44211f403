use super::file_path;
use crate::filter::BeheadError;
use camino::Utf8Path;
use core::fmt::{Debug, Formatter};
use std::fs::{File, OpenOptions};
use std::io::{self, Write};

/// A writable byte stream: either the interactive console or a file.
pub enum Sink {
    Console(Box<dyn Write + Send>),
    File(File),
}

impl Sink {
    /// Whether data is going to the console, in which case no progress is reported.
    #[must_use]
    pub const fn is_console(&self) -> bool {
        matches!(self, Self::Console(_))
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Self::Console(writer) => writer.write(buf),
            Self::File(file) => file.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self {
            Self::Console(writer) => writer.write_all(buf),
            Self::File(file) => file.write_all(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Self::Console(writer) => writer.flush(),
            Self::File(file) => file.flush(),
        }
    }
}

impl Debug for Sink {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Console(_) => f.write_str("Sink::Console"),
            Self::File(file) => f.debug_tuple("Sink::File").field(file).finish(),
        }
    }
}

/// Open the output named by `path`, falling back to `stdout` when no path is given.
///
/// Files are created when missing and appended to when they already exist.
///
/// # Errors
///
/// Returns [`BeheadError::OpenSink`] if the file cannot be opened for appending.
pub fn open_sink<F>(path: Option<&Utf8Path>, stdout: F) -> Result<Sink, BeheadError>
where
    F: FnOnce() -> Box<dyn Write + Send>,
{
    let Some(path) = file_path(path) else {
        log::debug!("writing to standard output");
        return Ok(Sink::Console(stdout()));
    };

    log::debug!("appending to '{path}'");
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map(Sink::File)
        .map_err(|source| BeheadError::OpenSink {
            path: path.to_owned(),
            source,
        })
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn temp_path(dir: &tempfile::TempDir, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from(dir.path().to_string_lossy().to_string()).join(name)
    }

    #[test]
    fn test_no_path_is_console() {
        let sink = open_sink(None, || Box::new(io::sink())).expect("stdout should open");
        assert!(sink.is_console());
    }

    #[test]
    fn test_empty_path_is_console() {
        let sink = open_sink(Some(Utf8Path::new("")), || Box::new(io::sink())).expect("stdout should open");
        assert!(sink.is_console());
    }

    #[test]
    fn test_missing_file_is_created() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_path(&dir, "out.txt");

        let mut sink = open_sink(Some(&path), || Box::new(io::sink())).expect("file should be created");
        assert!(!sink.is_console());
        sink.write_all(b"hello\n").expect("write should succeed");
        drop(sink);

        assert_eq!(std::fs::read_to_string(&path).expect("output should exist"), "hello\n");
    }

    #[test]
    fn test_existing_file_is_appended() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_path(&dir, "out.txt");
        std::fs::write(&path, "first\n").expect("Failed to seed output");

        let mut sink = open_sink(Some(&path), || Box::new(io::sink())).expect("file should open");
        sink.write_all(b"second\n").expect("write should succeed");
        drop(sink);

        assert_eq!(std::fs::read_to_string(&path).expect("output should exist"), "first\nsecond\n");
    }

    #[test]
    fn test_unopenable_file_reports_path() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = temp_path(&dir, "no-such-dir").join("out.txt");

        let err = open_sink(Some(&path), || Box::new(io::sink())).expect_err("missing parent should fail");
        match err {
            BeheadError::OpenSink { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
