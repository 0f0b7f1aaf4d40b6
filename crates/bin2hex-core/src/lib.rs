//! `bin2hex-core` turns a byte stream into little-endian 64-bit words and
//! renders each one as a fixed-width lowercase hex line.
//!
//! The crate has no knowledge of the command line. It exposes:
//! - the word model and its hex form (`word`)
//! - the streaming converter (`convert`)
//! - the error type (`error`)

pub mod convert;
pub mod error;
pub mod word;

pub use convert::{ConvertSummary, Words, convert, convert_file, read_word};
pub use error::ConvertError;
pub use word::{HEX_WIDTH, ParseLineError, WORD_BYTES, Word, parse_hex_line};
