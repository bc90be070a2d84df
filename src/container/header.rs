//! MPK file header
//!
//! The header is the 4-byte magic tag at offset 0. It is parsed
//! field-by-field with explicit bounds checks, never by overlaying a
//! struct onto raw memory.

use super::{Error, HEADER_SIZE, MAGIC, Section};

/// MPK file header (4 bytes)
///
/// # Wire Format
///
/// ```text
/// offset 0: magic = 8B 4D 50 4B
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MpkHeader {
    magic: [u8; 4],
}

impl MpkHeader {
    /// Create a new header carrying the MPK magic
    #[must_use]
    pub const fn new() -> Self {
        Self { magic: MAGIC }
    }

    /// Get the magic tag
    #[must_use]
    pub const fn magic(&self) -> [u8; 4] {
        self.magic
    }

    /// Validate the header
    pub fn validate(&self) -> super::Result<()> {
        if self.magic != MAGIC {
            return Err(Error::BadMagic { found: self.magic });
        }
        Ok(())
    }

    /// Convert to bytes
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        self.magic
    }

    /// Parse from bytes
    pub fn from_bytes(bytes: &[u8]) -> super::Result<Self> {
        if bytes.len() < HEADER_SIZE {
            return Err(Error::Truncated {
                section: Section::Magic,
                needed: HEADER_SIZE,
                got: bytes.len(),
            });
        }

        let header = Self {
            magic: bytes[0..HEADER_SIZE].try_into().expect("slice length checked"),
        };

        header.validate()?;
        Ok(header)
    }
}

impl Default for MpkHeader {
    fn default() -> Self {
        Self::new()
    }
}
