use super::file_path;
use crate::filter::BeheadError;
use camino::Utf8Path;
use core::fmt::{Debug, Formatter};
use std::fs::File;
use std::io::{self, Read};

/// A readable byte stream: either the process's standard input or a file.
pub enum Source {
    Stdin(Box<dyn Read + Send>),
    File(File),
}

impl Read for Source {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self {
            Self::Stdin(reader) => reader.read(buf),
            Self::File(file) => file.read(buf),
        }
    }
}

impl Debug for Source {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Stdin(_) => f.write_str("Source::Stdin"),
            Self::File(file) => f.debug_tuple("Source::File").field(file).finish(),
        }
    }
}

/// Open the input named by `path`, falling back to `stdin` when no path is given.
///
/// # Errors
///
/// Returns [`BeheadError::OpenSource`] if the file cannot be opened for reading.
pub fn open_source<F>(path: Option<&Utf8Path>, stdin: F) -> Result<Source, BeheadError>
where
    F: FnOnce() -> Box<dyn Read + Send>,
{
    let Some(path) = file_path(path) else {
        log::debug!("reading from standard input");
        return Ok(Source::Stdin(stdin()));
    };

    log::debug!("reading from '{path}'");
    File::open(path).map(Source::File).map_err(|source| BeheadError::OpenSource {
        path: path.to_owned(),
        source,
    })
}
