//! MPK container codec (encode/decode)
//!
//! The frame reader walks the five sections in wire order, checking every
//! declared length against a configured ceiling before allocating. The
//! frame writer emits the exact layout back, recomputing length prefixes.
//! Decoding is all-or-nothing: no partial package is ever returned.

use std::io::{self, Read};

use bytes::Bytes;
use tracing::{debug, trace, warn};

use super::{
    Error, HEADER_SIZE, LEN_PREFIX_SIZE, MAX_ICON_SIZE, MAX_INFO_SIZE, MAX_PAYLOAD_SIZE,
    MpkHeader, Package, Result, SIGNATURE_SIZE, Section, SignatureBlock,
};

/// Per-section ceilings applied while decoding
///
/// Length prefixes come from untrusted input; each one is checked against
/// its ceiling before any allocation, so a corrupt or hostile 32-bit length
/// never drives a multi-gigabyte buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeLimits {
    /// Ceiling for the info section in bytes
    pub max_info_len: u32,
    /// Ceiling for the icon section in bytes
    pub max_icon_len: u32,
    /// Ceiling for the payload section in bytes
    pub max_payload_len: u32,
}

impl Default for DecodeLimits {
    fn default() -> Self {
        Self {
            max_info_len: MAX_INFO_SIZE,
            max_icon_len: MAX_ICON_SIZE,
            max_payload_len: MAX_PAYLOAD_SIZE,
        }
    }
}

impl DecodeLimits {
    // Ceiling for one framed section; fixed-size sections never reach here.
    pub(crate) const fn for_section(&self, section: Section) -> u32 {
        match section {
            Section::Icon => self.max_icon_len,
            Section::Payload => self.max_payload_len,
            _ => self.max_info_len,
        }
    }
}

/// Encode a package to its on-disk byte layout
///
/// # Format
///
/// ```text
/// [MAGIC (4)] [SIGNATURE (512)] [info_len (4 LE)] [info]
/// [icon_len (4 LE)] [icon] [mpk_data_len (4 LE)] [payload]
/// ```
///
/// Output length is exactly [`Package::encoded_len`]. Encoding is
/// deterministic: the same package always yields identical bytes.
#[must_use]
pub fn encode(package: &Package) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(package.encoded_len());

    bytes.extend_from_slice(&MpkHeader::new().to_bytes());
    bytes.extend_from_slice(package.signature().as_bytes());

    for section in [package.info(), package.icon(), package.payload()] {
        bytes.extend_from_slice(&(section.len() as u32).to_le_bytes());
        bytes.extend_from_slice(section);
    }

    bytes
}

/// Decode a package from bytes with default limits
///
/// # Errors
///
/// Returns an error if:
/// - The magic tag does not match
/// - The input ends before a declared section is fully read
/// - A declared section length exceeds its ceiling
pub fn decode(bytes: &[u8]) -> Result<Package> {
    decode_with(bytes, &DecodeLimits::default())
}

/// Decode a package from bytes with explicit limits
///
/// Trailing bytes after the payload section are tolerated (the payload
/// length prefix is authoritative) but logged as a warning.
pub fn decode_with(bytes: &[u8], limits: &DecodeLimits) -> Result<Package> {
    let mut cursor = io::Cursor::new(bytes);
    let package = decode_from(&mut cursor, limits)?;

    let consumed = cursor.position() as usize;
    if consumed < bytes.len() {
        warn!(
            trailing = bytes.len() - consumed,
            "trailing bytes after payload section"
        );
    }

    Ok(package)
}

/// Decode a package from any byte source
///
/// Reads exactly the container's bytes from `reader`, section by section;
/// bytes past the payload section are left unread. A source that ends mid-
/// section fails with [`Error::Truncated`]; other IO failures surface as
/// [`Error::Io`].
pub fn decode_from<R: Read>(reader: &mut R, limits: &DecodeLimits) -> Result<Package> {
    let mut magic = [0u8; HEADER_SIZE];
    read_section(reader, &mut magic, Section::Magic)?;
    MpkHeader::from_bytes(&magic)?;
    trace!("magic tag verified");

    let mut signature = [0u8; SIGNATURE_SIZE];
    read_section(reader, &mut signature, Section::Signature)?;

    let info = read_framed(reader, Section::Info, limits)?;
    let icon = read_framed(reader, Section::Icon, limits)?;
    let payload = read_framed(reader, Section::Payload, limits)?;

    debug!(
        info_len = info.len(),
        icon_len = icon.len(),
        payload_len = payload.len(),
        "decoded mpk container"
    );

    Ok(Package::from_parts(
        SignatureBlock::from(signature),
        Bytes::from(info),
        Bytes::from(icon),
        Bytes::from(payload),
    ))
}

/// Read one length-prefixed section: 4-byte LE length, ceiling check, data
fn read_framed<R: Read>(reader: &mut R, section: Section, limits: &DecodeLimits) -> Result<Vec<u8>> {
    let mut prefix = [0u8; LEN_PREFIX_SIZE];
    read_section(reader, &mut prefix, section)?;
    let len = u32::from_le_bytes(prefix);

    let max = limits.for_section(section);
    if len > max {
        return Err(Error::LengthOutOfBounds { section, len, max });
    }
    trace!(%section, len, "reading framed section");

    let mut data = vec![0u8; len as usize];
    read_section(reader, &mut data, section)?;
    Ok(data)
}

/// Fill `buf` completely or fail with a counted [`Error::Truncated`]
fn read_section<R: Read>(reader: &mut R, buf: &mut [u8], section: Section) -> Result<()> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(Error::Truncated {
                    section,
                    needed: buf.len(),
                    got: filled,
                });
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(Error::Io(e)),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAGIC;

    fn sample() -> Package {
        Package::new(
            b"name=test".as_slice(),
            b"".as_slice(),
            b"\x01\x02\x03".as_slice(),
        )
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let original = sample();
        let encoded = encode(&original);
        let decoded = decode(&encoded).unwrap();

        assert_eq!(decoded, original);
    }

    #[test]
    fn test_encode_layout() {
        let encoded = encode(&sample());

        assert_eq!(encoded.len(), 540);
        assert_eq!(&encoded[0..4], &MAGIC);
        assert!(encoded[4..516].iter().all(|&b| b == 0));
        assert_eq!(&encoded[516..520], &9u32.to_le_bytes());
        assert_eq!(&encoded[520..529], b"name=test");
        assert_eq!(&encoded[529..533], &0u32.to_le_bytes());
        assert_eq!(&encoded[533..537], &3u32.to_le_bytes());
        assert_eq!(&encoded[537..540], &[0x01, 0x02, 0x03]);
    }

    #[test]
    fn test_decode_invalid_magic() {
        let mut encoded = encode(&sample());
        encoded[0] = b'Z';

        let result = decode(&encoded);
        assert!(matches!(result, Err(Error::BadMagic { .. })));
    }

    #[test]
    fn test_decode_truncated_signature() {
        let encoded = encode(&sample());

        let result = decode(&encoded[..100]);
        assert!(matches!(
            result,
            Err(Error::Truncated {
                section: Section::Signature,
                needed: 512,
                got: 96,
            })
        ));
    }

    #[test]
    fn test_decode_truncated_payload() {
        let encoded = encode(&sample());

        let result = decode(&encoded[..encoded.len() - 1]);
        assert!(matches!(
            result,
            Err(Error::Truncated {
                section: Section::Payload,
                needed: 3,
                got: 2,
            })
        ));
    }

    #[test]
    fn test_decode_length_out_of_bounds() {
        let mut encoded = encode(&sample());
        // payload length prefix sits after the empty icon frame
        encoded[533..537].copy_from_slice(&u32::MAX.to_le_bytes());

        let result = decode(&encoded);
        assert!(matches!(
            result,
            Err(Error::LengthOutOfBounds {
                section: Section::Payload,
                len: u32::MAX,
                ..
            })
        ));
    }

    #[test]
    fn test_decode_respects_custom_limits() {
        let encoded = encode(&sample());
        let limits = DecodeLimits {
            max_info_len: 4,
            ..DecodeLimits::default()
        };

        let result = decode_with(&encoded, &limits);
        assert!(matches!(
            result,
            Err(Error::LengthOutOfBounds {
                section: Section::Info,
                len: 9,
                max: 4,
            })
        ));
    }

    #[test]
    fn test_decode_tolerates_trailing_bytes() {
        let original = sample();
        let mut encoded = encode(&original);
        encoded.extend_from_slice(b"junk after payload");

        let decoded = decode(&encoded).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_decode_from_reader_leaves_trailing_unread() {
        let encoded = encode(&sample());
        let mut reader = io::Cursor::new([encoded.as_slice(), b"tail"].concat());

        let decoded = decode_from(&mut reader, &DecodeLimits::default()).unwrap();
        assert_eq!(decoded, sample());

        let mut rest = Vec::new();
        reader.read_to_end(&mut rest).unwrap();
        assert_eq!(rest, b"tail");
    }

    #[test]
    fn test_encode_idempotent() {
        let package = sample();
        assert_eq!(encode(&package), encode(&package));
    }

    // Property-based tests
    #[cfg(test)]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn section_strategy() -> impl Strategy<Value = Vec<u8>> {
            prop::collection::vec(any::<u8>(), 0..=2048)
        }

        fn signature_strategy() -> impl Strategy<Value = Vec<u8>> {
            prop_oneof![
                Just(Vec::new()),
                prop::collection::vec(any::<u8>(), SIGNATURE_SIZE..=SIGNATURE_SIZE),
            ]
        }

        proptest! {
            /// Property: any valid package roundtrips bit-identically
            #[test]
            fn prop_roundtrip_preserves_sections(
                signature in signature_strategy(),
                info in section_strategy(),
                icon in section_strategy(),
                payload in section_strategy(),
            ) {
                let original = Package::with_signature(
                    &signature,
                    info.clone(),
                    icon.clone(),
                    payload.clone(),
                ).unwrap();

                let encoded = encode(&original);
                let decoded = decode(&encoded).unwrap();

                prop_assert_eq!(decoded.info().as_ref(), info.as_slice());
                prop_assert_eq!(decoded.icon().as_ref(), icon.as_slice());
                prop_assert_eq!(decoded.payload().as_ref(), payload.as_slice());
                prop_assert_eq!(&decoded, &original);
            }

            /// Property: any strict prefix fails with Truncated, never panics
            #[test]
            fn prop_prefix_always_truncated(
                info in section_strategy(),
                payload in section_strategy(),
                cut_ratio in 0.0f64..1.0,
            ) {
                let package = Package::new(info, Vec::new(), payload);
                let encoded = encode(&package);
                let cut = ((encoded.len() as f64) * cut_ratio) as usize;
                prop_assume!(cut < encoded.len());

                let result = decode(&encoded[..cut]);
                prop_assert!(
                    matches!(result, Err(Error::Truncated { .. })),
                    "prefix of {cut} bytes must report truncation"
                );
            }

            /// Property: a wrong magic tag is always rejected
            #[test]
            fn prop_invalid_magic_rejected(
                bad_magic in any::<[u8; 4]>().prop_filter("not mpk magic", |m| *m != MAGIC),
                payload in section_strategy(),
            ) {
                let mut encoded = encode(&Package::new(Vec::new(), Vec::new(), payload));
                encoded[0..4].copy_from_slice(&bad_magic);

                let result = decode(&encoded);
                prop_assert!(matches!(result, Err(Error::BadMagic { found }) if found == bad_magic), "bad magic not rejected");
            }

            /// Property: encoding the same package twice is byte-identical
            #[test]
            fn prop_encoding_deterministic(
                info in section_strategy(),
                icon in section_strategy(),
                payload in section_strategy(),
            ) {
                let package = Package::new(info, icon, payload);
                prop_assert_eq!(encode(&package), encode(&package));
            }

            /// Property: declared lengths above the ceiling never allocate
            #[test]
            fn prop_ceiling_enforced(excess in 1u32..=u32::MAX - MAX_PAYLOAD_SIZE) {
                let mut encoded = encode(&Package::new(Vec::new(), Vec::new(), Vec::new()));
                let prefix_at = encoded.len() - LEN_PREFIX_SIZE;
                encoded[prefix_at..].copy_from_slice(&(MAX_PAYLOAD_SIZE + excess).to_le_bytes());

                let result = decode(&encoded);
                prop_assert!(matches!(
                    result,
                    Err(Error::LengthOutOfBounds { section: Section::Payload, .. })
                ), "payload ceiling not enforced");
            }
        }
    }
}
