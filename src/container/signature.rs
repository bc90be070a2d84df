//! Signature block and verification hook
//!
//! Every MPK file carries a fixed 512-byte signature region directly after
//! the magic. The block is opaque to the codec: an all-zero block means the
//! package is unsigned, anything else is a detached signature whose scheme
//! is supplied by the caller as a [`Verifier`].

use std::fmt;

use super::{Error, Package, SIGNATURE_SIZE};

/// Fixed-size opaque signature region of an MPK file
#[derive(Clone, PartialEq, Eq)]
pub struct SignatureBlock([u8; SIGNATURE_SIZE]);

impl SignatureBlock {
    /// Create an all-zero block (the unsigned placeholder)
    #[must_use]
    pub const fn zeroed() -> Self {
        Self([0u8; SIGNATURE_SIZE])
    }

    /// Build a block from caller-supplied bytes
    ///
    /// An empty slice yields the zeroed placeholder. Any other length than
    /// exactly [`SIGNATURE_SIZE`] is refused: silently truncating or padding
    /// real signature data would corrupt verification.
    pub fn from_bytes(bytes: &[u8]) -> super::Result<Self> {
        if bytes.is_empty() {
            return Ok(Self::zeroed());
        }
        if bytes.len() != SIGNATURE_SIZE {
            return Err(Error::SignatureSizeMismatch {
                expected: SIGNATURE_SIZE,
                len: bytes.len(),
            });
        }

        let mut block = [0u8; SIGNATURE_SIZE];
        block.copy_from_slice(bytes);
        Ok(Self(block))
    }

    /// Get the raw signature bytes
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.0
    }

    /// Whether the block is the all-zero unsigned placeholder
    #[must_use]
    pub fn is_zeroed(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}

impl Default for SignatureBlock {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl From<[u8; SIGNATURE_SIZE]> for SignatureBlock {
    fn from(bytes: [u8; SIGNATURE_SIZE]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for SignatureBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zeroed() {
            write!(f, "SignatureBlock(unsigned)")
        } else {
            write!(
                f,
                "SignatureBlock({:02X}{:02X}{:02X}{:02X}..., {} bytes)",
                self.0[0],
                self.0[1],
                self.0[2],
                self.0[3],
                SIGNATURE_SIZE
            )
        }
    }
}

/// Outcome of a signature check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerificationResult {
    /// Signature matches the covered data
    Valid,
    /// Signature present but does not match
    Invalid,
    /// Package carries no signature
    Unsigned,
}

/// Caller-supplied signature check
///
/// The codec does not fix a cryptographic scheme; callers inject whichever
/// check matches the tool that signed the package. Decoding never invokes
/// the verifier, so untrusted files can be triaged (metadata and icon read
/// for display) before or without a signature check.
pub trait Verifier {
    /// Check `signature` against the covered `data`
    fn verify(&self, signature: &[u8; SIGNATURE_SIZE], data: &[u8]) -> VerificationResult;
}

impl<F> Verifier for F
where
    F: Fn(&[u8; SIGNATURE_SIZE], &[u8]) -> VerificationResult,
{
    fn verify(&self, signature: &[u8; SIGNATURE_SIZE], data: &[u8]) -> VerificationResult {
        self(signature, data)
    }
}

/// Check a package's signature with a caller-supplied verifier
///
/// Returns [`VerificationResult::Unsigned`] for an all-zero signature block
/// without invoking the verifier. Otherwise the verifier receives the raw
/// block and the signed region (the encoded frames following the signature,
/// see [`Package::signed_bytes`]).
pub fn verify_signature(package: &Package, verifier: &dyn Verifier) -> VerificationResult {
    if package.signature().is_zeroed() {
        return VerificationResult::Unsigned;
    }
    verifier.verify(package.signature().as_bytes(), &package.signed_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_bytes_is_unsigned() {
        let block = SignatureBlock::from_bytes(&[]).unwrap();
        assert!(block.is_zeroed());
        assert_eq!(block, SignatureBlock::zeroed());
    }

    #[test]
    fn test_exact_size_accepted() {
        let raw = [0xA5u8; SIGNATURE_SIZE];
        let block = SignatureBlock::from_bytes(&raw).unwrap();
        assert!(!block.is_zeroed());
        assert_eq!(block.as_bytes(), &raw);
    }

    #[test]
    fn test_wrong_size_rejected() {
        for len in [1, 64, SIGNATURE_SIZE - 1, SIGNATURE_SIZE + 1] {
            let result = SignatureBlock::from_bytes(&vec![1u8; len]);
            assert!(
                matches!(result, Err(Error::SignatureSizeMismatch { len: l, .. }) if l == len),
                "length {len} must be refused"
            );
        }
    }

    #[test]
    fn test_verify_unsigned_short_circuits() {
        let package = Package::new(b"".as_slice(), b"".as_slice(), b"".as_slice());
        let panicking = |_: &[u8; SIGNATURE_SIZE], _: &[u8]| -> VerificationResult {
            panic!("verifier must not run for unsigned packages")
        };
        assert_eq!(
            verify_signature(&package, &panicking),
            VerificationResult::Unsigned
        );
    }

    #[test]
    fn test_verify_dispatches_to_verifier() {
        let sig = [0x42u8; SIGNATURE_SIZE];
        let package =
            Package::with_signature(&sig, b"name=x".as_slice(), b"".as_slice(), b"\x01".as_slice())
                .unwrap();

        let accept = |signature: &[u8; SIGNATURE_SIZE], data: &[u8]| {
            assert_eq!(signature, &sig);
            assert_eq!(data, package.signed_bytes());
            VerificationResult::Valid
        };
        assert_eq!(verify_signature(&package, &accept), VerificationResult::Valid);

        let reject =
            |_: &[u8; SIGNATURE_SIZE], _: &[u8]| -> VerificationResult { VerificationResult::Invalid };
        assert_eq!(
            verify_signature(&package, &reject),
            VerificationResult::Invalid
        );
    }
}
