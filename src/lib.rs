//! MPK container codec - parse, build, and verify ROM-modification package files
//!
//! An MPK file packages a ROM-modification payload together with its
//! metadata, an optional icon, and a detached signature, in five strictly
//! ordered sections: a 4-byte magic tag, a 512-byte signature block, and
//! three length-prefixed frames (info, icon, payload). This crate is the
//! codec for that layout: it parses untrusted files with explicit bounds
//! checks and builds new containers deterministically.
//!
//! # Quick Start
//!
//! ```rust
//! use mpk::Package;
//!
//! // Build a package
//! let package = Package::new(
//!     b"name=boot-patch\nversion=1.0".as_slice(),
//!     Vec::new(),                   // no icon
//!     vec![0x50, 0x4B, 0x03, 0x04], // opaque payload
//! );
//!
//! // Encode to the on-disk layout
//! let bytes = package.encode();
//!
//! // Decode it back
//! let decoded = Package::decode(&bytes)?;
//! assert_eq!(decoded, package);
//! # Ok::<(), mpk::Error>(())
//! ```
//!
//! # Features
//!
//! - **Bounds-checked parsing** - every length prefix is validated against
//!   a configurable ceiling before allocation
//! - **Typed failures** - magic mismatch, truncation, and hostile lengths
//!   are distinct error kinds
//! - **Deterministic encoding** - identical packages always produce
//!   identical bytes
//! - **Pluggable verification** - signature checking is injected by the
//!   caller, never required for decoding
//!
//! # Signature verification
//!
//! Decoding and verification are deliberately separate: a file can be
//! triaged (metadata and icon read for display) before its signature is
//! checked, or without checking it at all.
//!
//! ```rust
//! use mpk::{Package, VerificationResult, verify_signature};
//!
//! let package = Package::new(b"name=x".as_slice(), Vec::new(), Vec::new());
//! let verifier = |_sig: &[u8; mpk::SIGNATURE_SIZE], _data: &[u8]| {
//!     VerificationResult::Invalid // real callers plug in their scheme here
//! };
//! assert_eq!(verify_signature(&package, &verifier), VerificationResult::Unsigned);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod container;

pub use container::{
    DecodeLimits, Error, HEADER_SIZE, LEN_PREFIX_SIZE, MAGIC, MAX_ICON_SIZE, MAX_INFO_SIZE,
    MAX_PAYLOAD_SIZE, MIN_CONTAINER_SIZE, MpkHeader, Package, PackageInfo, Result, SIGNATURE_SIZE,
    Section, SignatureBlock, VerificationResult, Verifier, decode, decode_from, decode_with,
    encode, verify_signature,
};
