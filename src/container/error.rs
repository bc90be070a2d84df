//! MPK error types

use thiserror::Error;

use super::types::Section;

/// MPK container errors
#[derive(Error, Debug)]
pub enum Error {
    /// Magic tag mismatch, not an MPK file
    #[error("bad magic: expected 8B 4D 50 4B, got {found:02X?}")]
    BadMagic {
        /// First four bytes of the input
        found: [u8; 4],
    },

    /// Source ended before a declared section was fully read
    #[error("truncated while reading {section} section: need {needed} bytes, got {got}")]
    Truncated {
        /// Section being read when the source ran out
        section: Section,
        /// Bytes the current read required
        needed: usize,
        /// Bytes actually available
        got: usize,
    },

    /// Declared section length exceeds the configured safety ceiling
    #[error("{section} length out of bounds: {len} bytes (max {max})")]
    LengthOutOfBounds {
        /// Section whose length prefix was rejected
        section: Section,
        /// Declared length
        len: u32,
        /// Configured ceiling
        max: u32,
    },

    /// Caller supplied a non-empty signature buffer of the wrong size
    #[error("signature must be exactly {expected} bytes or empty, got {len}")]
    SignatureSizeMismatch {
        /// Required signature size
        expected: usize,
        /// Size actually supplied
        len: usize,
    },

    /// Info section is not valid UTF-8
    #[error("package info is not valid UTF-8: {0}")]
    InfoNotUtf8(#[from] std::str::Utf8Error),

    /// Info section line has no `key=value` separator
    #[error("malformed package info at line {line}: missing '='")]
    MalformedInfo {
        /// 1-based line number of the offending line
        line: usize,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
