//! Streaming word-to-hex conversion.

use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::error::ConvertError;
use crate::word::{WORD_BYTES, Word};

/// Totals for a finished conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Lines written.
    pub words: u64,
    /// Input bytes consumed.
    pub bytes: u64,
    /// Length of the final word when it was shorter than `WORD_BYTES`.
    pub trailing: Option<u8>,
}

impl ConvertSummary {
    fn record(&mut self, word: Word) {
        self.words += 1;
        self.bytes += word.byte_len() as u64;
        if word.is_short() {
            self.trailing = Some(word.byte_len() as u8);
        }
    }
}

/// Read the next word, or `None` at end of input.
///
/// Keeps reading until eight bytes are collected or the reader reports end of
/// input, so a partial `read` never splits a word in two.
pub fn read_word<R: Read + ?Sized>(reader: &mut R) -> io::Result<Option<Word>> {
    let mut buf = [0u8; WORD_BYTES];
    let mut filled = 0;

    while filled < WORD_BYTES {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    Ok(Word::from_le_chunk(&buf[..filled]))
}

/// Iterator over the words of a reader.
///
/// Stops after end of input or after yielding the first error.
pub struct Words<R> {
    reader: R,
    done: bool,
}

impl<R: Read> Words<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<R: Read> Iterator for Words<R> {
    type Item = io::Result<Word>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match read_word(&mut self.reader) {
            Ok(Some(word)) => Some(Ok(word)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: Read> std::iter::FusedIterator for Words<R> {}

/// Write every word of `reader` to `writer`, one 16-digit hex line each.
///
/// The writer is flushed before returning successfully.
pub fn convert<R: Read, W: Write>(
    reader: R,
    mut writer: W,
) -> Result<ConvertSummary, ConvertError> {
    let mut summary = ConvertSummary::default();

    for word in Words::new(reader) {
        // offset is the start of the word that failed
        let word = word.map_err(|source| ConvertError::Read {
            offset: summary.bytes,
            source,
        })?;
        writeln!(writer, "{word}").map_err(ConvertError::Write)?;
        summary.record(word);
    }

    writer.flush().map_err(ConvertError::Write)?;

    debug!(
        words = summary.words,
        bytes = summary.bytes,
        trailing = ?summary.trailing,
        "conversion finished"
    );
    Ok(summary)
}

/// Open `path` and convert its contents into `writer`.
///
/// Nothing is written when the file cannot be opened.
pub fn convert_file<W: Write>(path: &Path, writer: W) -> Result<ConvertSummary, ConvertError> {
    let file = File::open(path).map_err(|source| ConvertError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "opened input");

    convert(BufReader::new(file), writer)
}
