//! MPK package (section model)

use bytes::Bytes;

use super::{
    HEADER_SIZE, LEN_PREFIX_SIZE, PackageInfo, SIGNATURE_SIZE, SignatureBlock,
};

/// Decoded or to-be-encoded MPK container
///
/// Owns one buffer per variable section plus the signature block. Built
/// either by decoding a byte source ([`Package::decode`],
/// [`crate::decode_from`]) or directly from caller-supplied parts
/// ([`Package::new`], [`Package::with_signature`]); immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    /// Detached signature, zeroed when unsigned
    signature: SignatureBlock,
    /// Structured metadata bytes (`key=value` text)
    info: Bytes,
    /// Raw icon image bytes, may be empty
    icon: Bytes,
    /// Opaque ROM-modification payload
    payload: Bytes,
}

impl Package {
    /// Create an unsigned package from its parts
    pub fn new(
        info: impl Into<Bytes>,
        icon: impl Into<Bytes>,
        payload: impl Into<Bytes>,
    ) -> Self {
        Self::from_parts(SignatureBlock::zeroed(), info.into(), icon.into(), payload.into())
    }

    /// Create a signed package from its parts
    ///
    /// `signature` must be empty (treated as unsigned) or exactly
    /// [`SIGNATURE_SIZE`] bytes; anything else fails with
    /// [`super::Error::SignatureSizeMismatch`].
    pub fn with_signature(
        signature: &[u8],
        info: impl Into<Bytes>,
        icon: impl Into<Bytes>,
        payload: impl Into<Bytes>,
    ) -> super::Result<Self> {
        let signature = SignatureBlock::from_bytes(signature)?;
        Ok(Self::from_parts(signature, info.into(), icon.into(), payload.into()))
    }

    pub(crate) fn from_parts(
        signature: SignatureBlock,
        info: Bytes,
        icon: Bytes,
        payload: Bytes,
    ) -> Self {
        debug_assert!(info.len() <= u32::MAX as usize, "info exceeds u32 framing");
        debug_assert!(icon.len() <= u32::MAX as usize, "icon exceeds u32 framing");
        debug_assert!(payload.len() <= u32::MAX as usize, "payload exceeds u32 framing");

        Self {
            signature,
            info,
            icon,
            payload,
        }
    }

    /// Get the signature block
    #[must_use]
    pub const fn signature(&self) -> &SignatureBlock {
        &self.signature
    }

    /// Get the raw info-section bytes
    #[must_use]
    pub const fn info(&self) -> &Bytes {
        &self.info
    }

    /// Get the icon bytes
    #[must_use]
    pub const fn icon(&self) -> &Bytes {
        &self.icon
    }

    /// Get the payload bytes
    #[must_use]
    pub const fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Whether the signature block is non-zero
    #[must_use]
    pub fn is_signed(&self) -> bool {
        !self.signature.is_zeroed()
    }

    /// Whether the package carries an icon
    #[must_use]
    pub fn has_icon(&self) -> bool {
        !self.icon.is_empty()
    }

    /// Parse the info section into its key/value view
    pub fn info_fields(&self) -> super::Result<PackageInfo> {
        PackageInfo::parse(&self.info)
    }

    /// Exact size of the encoded container in bytes
    #[must_use]
    pub fn encoded_len(&self) -> usize {
        HEADER_SIZE
            + SIGNATURE_SIZE
            + LEN_PREFIX_SIZE
            + self.info.len()
            + LEN_PREFIX_SIZE
            + self.icon.len()
            + LEN_PREFIX_SIZE
            + self.payload.len()
    }

    /// Bytes covered by the signature: the encoded frames following the
    /// signature block (info frame, icon frame, payload frame)
    #[must_use]
    pub fn signed_bytes(&self) -> Vec<u8> {
        let len = self.encoded_len() - HEADER_SIZE - SIGNATURE_SIZE;
        let mut bytes = Vec::with_capacity(len);
        for section in [&self.info, &self.icon, &self.payload] {
            bytes.extend_from_slice(&(section.len() as u32).to_le_bytes());
            bytes.extend_from_slice(section);
        }
        bytes
    }

    /// Encode the package to its on-disk byte layout
    #[must_use]
    pub fn encode(&self) -> Vec<u8> {
        super::encode(self)
    }

    /// Decode a package from bytes with default limits
    pub fn decode(bytes: &[u8]) -> super::Result<Self> {
        super::decode(bytes)
    }
}
