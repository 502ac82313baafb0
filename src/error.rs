//! Error types for huffpack

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("empty alphabet: cannot build a prefix tree over zero symbols")]
    EmptyAlphabet,

    #[error("malformed stream: {0}")]
    MalformedStream(String),

    #[error("ambiguous code assignment for symbol {symbol:#04x}")]
    AmbiguousCode { symbol: u8 },

    #[error("no code assigned for symbol {symbol:#04x}")]
    MissingCode { symbol: u8 },

    #[error("input of {size} bytes exceeds the configured maximum of {max}")]
    InputTooLarge { size: usize, max: usize },
}
