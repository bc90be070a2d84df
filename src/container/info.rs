//! Package metadata view
//!
//! The info section is a flat text configuration describing the package
//! (name, version, target device, description). One `key=value` pair per
//! line; blank lines and `#` comments are skipped. [`PackageInfo`] is a
//! convenience view over those bytes — the raw section stays authoritative
//! for framing and signing.

use super::Error;

/// Ordered key/value view of the info section
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackageInfo {
    fields: Vec<(String, String)>,
}

impl PackageInfo {
    /// Create an empty metadata set
    #[must_use]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Parse `key=value` lines from raw info-section bytes
    pub fn parse(bytes: &[u8]) -> super::Result<Self> {
        let text = std::str::from_utf8(bytes)?;
        let mut fields = Vec::new();

        for (idx, raw_line) in text.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = line
                .split_once('=')
                .ok_or(Error::MalformedInfo { line: idx + 1 })?;
            fields.push((key.trim().to_owned(), value.trim().to_owned()));
        }

        Ok(Self { fields })
    }

    /// Look up the first value for `key`
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Append or replace a field, keeping insertion order
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    /// All fields in insertion order
    #[must_use]
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Number of fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether there are no fields
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialize to info-section bytes, one `key=value\n` per field
    ///
    /// Output is deterministic: fields are emitted in insertion order with
    /// no timestamps or generated content.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for (key, value) in &self.fields {
            out.extend_from_slice(key.as_bytes());
            out.push(b'=');
            out.extend_from_slice(value.as_bytes());
            out.push(b'\n');
        }
        out
    }
}
