use std::fmt;

use bytes::Bytes;

/// First tag byte of the IPv4 tunnel range (the IPv4 version/IHL nibbles).
pub const IPV4_START: u8 = 0x45;
/// Last tag byte of the IPv4 tunnel range.
pub const IPV4_END: u8 = 0x4F;
/// First tag byte of the IPv6 tunnel range (the IPv6 version nibble).
pub const IPV6_START: u8 = 0x60;
/// Last tag byte of the IPv6 tunnel range.
pub const IPV6_END: u8 = 0x6F;
/// Tag of a diagnostic (console text) frame.
pub const DIAGNOSTIC: u8 = 0x0A;
/// Tag of a CoAP configuration frame.
pub const COAP: u8 = 0xA9;

/// The payload kinds multiplexed over one serial channel.
///
/// The tag space is a closed partition: every byte value is either one of
/// these kinds or a protocol error ([`FrameKind::classify`] returns `None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// IPv4 tunnel frame. Recognized but not implemented.
    Ipv4,
    /// IPv6 tunnel frame. Recognized but not implemented.
    Ipv6,
    /// UTF-8 console text, passed through to host output.
    Diagnostic,
    /// CoAP configuration message. Recognized but not implemented.
    Coap,
}

impl FrameKind {
    /// Classify a frame tag byte. `None` means an unknown tag.
    pub fn classify(tag: u8) -> Option<Self> {
        match tag {
            DIAGNOSTIC => Some(Self::Diagnostic),
            COAP => Some(Self::Coap),
            IPV4_START..=IPV4_END => Some(Self::Ipv4),
            IPV6_START..=IPV6_END => Some(Self::Ipv6),
            _ => None,
        }
    }

    /// Human-readable kind name, used in logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            Self::Ipv4 => "IPv4",
            Self::Ipv6 => "IPv6",
            Self::Diagnostic => "diagnostic",
            Self::Coap => "CoAP",
        }
    }
}

impl fmt::Display for FrameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A decoded slipmux frame: one tag byte followed by the payload.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The frame type tag (byte 0 on the wire).
    pub tag: u8,
    /// The payload (bytes 1.. on the wire).
    pub payload: Bytes,
}

impl Frame {
    /// Split raw decoded bytes into tag and payload.
    ///
    /// Returns `None` for frames of length <= 1 (delimiter-only or tag-only
    /// frames), which carry no actionable content and are dropped without
    /// dispatch.
    pub fn parse(raw: Bytes) -> Option<Self> {
        if raw.len() <= 1 {
            return None;
        }
        let tag = raw[0];
        Some(Self {
            tag,
            payload: raw.slice(1..),
        })
    }

    /// Classify this frame's tag. `None` means an unknown tag.
    pub fn kind(&self) -> Option<FrameKind> {
        FrameKind::classify(self.tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_diagnostic_and_coap() {
        assert_eq!(FrameKind::classify(0x0A), Some(FrameKind::Diagnostic));
        assert_eq!(FrameKind::classify(0xA9), Some(FrameKind::Coap));
    }

    #[test]
    fn classify_ipv4_range_boundaries() {
        assert_eq!(FrameKind::classify(0x45), Some(FrameKind::Ipv4));
        assert_eq!(FrameKind::classify(0x47), Some(FrameKind::Ipv4));
        assert_eq!(FrameKind::classify(0x4F), Some(FrameKind::Ipv4));
        assert_eq!(FrameKind::classify(0x44), None);
        assert_eq!(FrameKind::classify(0x50), None);
    }

    #[test]
    fn classify_ipv6_range_boundaries() {
        assert_eq!(FrameKind::classify(0x60), Some(FrameKind::Ipv6));
        assert_eq!(FrameKind::classify(0x6F), Some(FrameKind::Ipv6));
        assert_eq!(FrameKind::classify(0x5F), None);
        assert_eq!(FrameKind::classify(0x70), None);
    }

    #[test]
    fn classify_rejects_unknown_tags() {
        assert_eq!(FrameKind::classify(0x00), None);
        assert_eq!(FrameKind::classify(0xFF), None);
    }

    #[test]
    fn parse_splits_tag_and_payload() {
        let frame = Frame::parse(Bytes::from_static(&[0x0A, 0x68, 0x69])).unwrap();
        assert_eq!(frame.tag, 0x0A);
        assert_eq!(frame.payload.as_ref(), b"hi");
        assert_eq!(frame.kind(), Some(FrameKind::Diagnostic));
    }

    #[test]
    fn parse_drops_short_frames() {
        assert!(Frame::parse(Bytes::new()).is_none());
        assert!(Frame::parse(Bytes::from_static(&[0x0A])).is_none());
    }
}
