//! Error type for the converter.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can end a conversion run.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input path does not exist or cannot be opened for reading.
    #[error("cannot open {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading failed after the input was opened.
    #[error("read error at byte offset {offset}")]
    Read {
        offset: u64,
        #[source]
        source: io::Error,
    },

    /// Writing to the output failed.
    #[error("write error")]
    Write(#[source] io::Error),
}

impl ConvertError {
    /// True when the output side was closed early (e.g. `bin2hex f | head`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, ConvertError::Write(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }
}
