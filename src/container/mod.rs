//! MPK container format core
//!
//! This module provides the on-disk layout, section model, and codec for
//! MPK package files.

mod codec;
mod error;
mod header;
mod info;
mod package;
mod signature;
mod types;

pub use codec::{DecodeLimits, decode, decode_from, decode_with, encode};
pub use error::{Error, Result};
pub use header::MpkHeader;
pub use info::PackageInfo;
pub use package::Package;
pub use signature::{SignatureBlock, VerificationResult, Verifier, verify_signature};
pub use types::Section;

/// MPK magic tag: `8B 4D 50 4B` (`\x8b` followed by "MPK")
pub const MAGIC: [u8; 4] = [0x8B, 0x4D, 0x50, 0x4B];

/// Header size in bytes (the magic tag)
pub const HEADER_SIZE: usize = 4;

/// Signature block size in bytes (zero-filled when unsigned)
pub const SIGNATURE_SIZE: usize = 512;

/// Size of each section length prefix in bytes (u32, little-endian)
pub const LEN_PREFIX_SIZE: usize = 4;

/// Minimum container size (header + signature + three empty frames)
pub const MIN_CONTAINER_SIZE: usize = HEADER_SIZE + SIGNATURE_SIZE + 3 * LEN_PREFIX_SIZE;

/// Default ceiling for the info section (1 MB)
pub const MAX_INFO_SIZE: u32 = 1024 * 1024;

/// Default ceiling for the icon section (16 MB)
pub const MAX_ICON_SIZE: u32 = 16 * 1024 * 1024;

/// Default ceiling for the payload section (1 GB)
pub const MAX_PAYLOAD_SIZE: u32 = 1024 * 1024 * 1024;
