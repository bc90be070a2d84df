//! MPK section labels

use std::fmt;

/// The five sequential regions of an MPK file, in wire order.
///
/// Used to label decode failures and log events; the wire itself carries no
/// section tags, only the fixed order Header → Signature → Info → Icon →
/// Payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Section {
    /// Fixed 4-byte magic tag
    Magic,
    /// Fixed 512-byte signature block
    Signature,
    /// Length-prefixed package metadata
    Info,
    /// Length-prefixed icon image, may be empty
    Icon,
    /// Length-prefixed opaque ROM-modification payload
    Payload,
}

impl Section {
    /// Lowercase section name as used in error messages and logs
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Magic => "magic",
            Self::Signature => "signature",
            Self::Info => "info",
            Self::Icon => "icon",
            Self::Payload => "payload",
        }
    }

    /// Whether this section is framed with a length prefix
    #[must_use]
    pub const fn is_framed(self) -> bool {
        matches!(self, Self::Info | Self::Icon | Self::Payload)
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_names() {
        assert_eq!(Section::Magic.to_string(), "magic");
        assert_eq!(Section::Payload.to_string(), "payload");
    }

    #[test]
    fn test_framed_sections() {
        assert!(!Section::Magic.is_framed());
        assert!(!Section::Signature.is_framed());
        assert!(Section::Info.is_framed());
        assert!(Section::Icon.is_framed());
        assert!(Section::Payload.is_framed());
    }
}
