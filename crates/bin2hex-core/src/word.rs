use core::fmt;

use thiserror::Error;

/// Number of input bytes that make up one full word.
pub const WORD_BYTES: usize = 8;

/// Number of hex digits in one output line (excluding the newline).
pub const HEX_WIDTH: usize = 2 * WORD_BYTES;

/// One chunk of input interpreted as a little-endian unsigned integer.
///
/// `len` records how many bytes were actually read. It is `WORD_BYTES` for
/// every word except possibly the last one of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Word {
    value: u64,
    len: u8,
}

impl Word {
    /// Build a word from up to eight bytes, first byte least significant.
    ///
    /// Missing high-order bytes of a short chunk are zero. Returns `None` for
    /// an empty chunk or one longer than `WORD_BYTES`.
    pub fn from_le_chunk(chunk: &[u8]) -> Option<Self> {
        if chunk.is_empty() || chunk.len() > WORD_BYTES {
            return None;
        }

        let mut buf = [0u8; WORD_BYTES];
        buf[..chunk.len()].copy_from_slice(chunk);

        Some(Self {
            value: u64::from_le_bytes(buf),
            len: chunk.len() as u8,
        })
    }

    /// The integer value, with missing high-order bytes as zero.
    pub const fn value(self) -> u64 {
        self.value
    }

    /// Number of input bytes this word was built from (1..=8).
    pub const fn byte_len(self) -> usize {
        self.len as usize
    }

    /// True for a final word built from fewer than `WORD_BYTES` bytes.
    pub const fn is_short(self) -> bool {
        (self.len as usize) < WORD_BYTES
    }

    /// Fixed-width 16-char lowercase hex.
    pub fn to_hex(self) -> String {
        format!("{:016x}", self.value)
    }

    /// The original input bytes, exactly `byte_len()` of them.
    pub fn to_le_bytes(self) -> Vec<u8> {
        self.value.to_le_bytes()[..self.byte_len()].to_vec()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.value)
    }
}

/// Reasons an output line cannot be decoded back into a word value.
#[derive(Debug, Error, PartialEq)]
pub enum ParseLineError {
    #[error("expected 16 hex digits, got {0}")]
    Length(usize),

    #[error("uppercase hex digit at position {0}")]
    Uppercase(usize),

    #[error("invalid hex digit: {0}")]
    Digit(#[from] hex::FromHexError),
}

/// Decode one output line (without its newline) back into the word value.
///
/// Only the exact output form is accepted: 16 lowercase hex digits.
pub fn parse_hex_line(line: &str) -> Result<u64, ParseLineError> {
    if line.len() != HEX_WIDTH {
        return Err(ParseLineError::Length(line.len()));
    }
    if let Some(pos) = line.bytes().position(|b| b.is_ascii_uppercase()) {
        return Err(ParseLineError::Uppercase(pos));
    }

    // Hex text is most-significant digit first.
    let mut buf = [0u8; WORD_BYTES];
    hex::decode_to_slice(line, &mut buf)?;
    Ok(u64::from_be_bytes(buf))
}
