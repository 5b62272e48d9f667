use std::io::Write;

use bytes::Bytes;
use tracing::{debug, warn};

use slipbridge_frame::{Frame, FrameError, FrameKind};

use crate::error::{BridgeError, Result};

/// What to do when a recognized but unimplemented frame kind arrives
/// (IPv4/IPv6 tunnel frames, CoAP configuration messages).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnimplementedPolicy {
    /// Stop the bridge with [`FrameError::Unimplemented`]. Matches the
    /// fail-fast behavior of the protocol stubs.
    #[default]
    Fatal,
    /// Log a warning and drop the frame.
    Skip,
}

/// Routes one decoded frame to its type-specific handling.
///
/// Diagnostic frames are the only fully implemented kind: their payload is
/// validated as UTF-8 and written verbatim to host output. Tunnel and CoAP
/// frames hit an explicit unimplemented condition, and unknown tags are
/// always a protocol error.
pub struct Dispatcher<W> {
    host_out: W,
    policy: UnimplementedPolicy,
}

impl<W: Write> Dispatcher<W> {
    /// Create a dispatcher with the default fail-fast policy.
    pub fn new(host_out: W) -> Self {
        Self::with_policy(host_out, UnimplementedPolicy::default())
    }

    pub fn with_policy(host_out: W, policy: UnimplementedPolicy) -> Self {
        Self { host_out, policy }
    }

    /// Dispatch one raw decoded frame.
    ///
    /// Frames of length <= 1 carry no actionable content and are dropped
    /// as a no-op, not an error.
    pub fn dispatch(&mut self, raw: Bytes) -> Result<()> {
        debug!(len = raw.len(), tag = ?raw.first(), "received frame");

        let Some(frame) = Frame::parse(raw) else {
            debug!("dropping frame without payload");
            return Ok(());
        };

        match frame.kind() {
            Some(FrameKind::Diagnostic) => self.write_diagnostic(&frame),
            Some(kind) => self.handle_unimplemented(kind, &frame),
            None => Err(FrameError::UnknownTag { tag: frame.tag }.into()),
        }
    }

    fn write_diagnostic(&mut self, frame: &Frame) -> Result<()> {
        let text = std::str::from_utf8(&frame.payload).map_err(FrameError::from)?;
        self.host_out
            .write_all(text.as_bytes())
            .map_err(BridgeError::HostWrite)?;
        self.host_out.flush().map_err(BridgeError::HostWrite)
    }

    fn handle_unimplemented(&self, kind: FrameKind, frame: &Frame) -> Result<()> {
        match self.policy {
            UnimplementedPolicy::Fatal => Err(FrameError::Unimplemented { kind }.into()),
            UnimplementedPolicy::Skip => {
                warn!(%kind, len = frame.payload.len(), "skipping unimplemented frame kind");
                Ok(())
            }
        }
    }

    /// Borrow the host output sink.
    pub fn get_ref(&self) -> &W {
        &self.host_out
    }

    /// Consume the dispatcher and return the host output sink.
    pub fn into_inner(self) -> W {
        self.host_out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dispatch_one(policy: UnimplementedPolicy, raw: &'static [u8]) -> (Result<()>, Vec<u8>) {
        let mut dispatcher = Dispatcher::with_policy(Vec::new(), policy);
        let result = dispatcher.dispatch(Bytes::from_static(raw));
        let out = dispatcher.into_inner();
        (result, out)
    }

    #[test]
    fn diagnostic_text_passes_through_verbatim() {
        let (result, out) = dispatch_one(UnimplementedPolicy::Fatal, &[0x0A, 0x6F, 0x6B, 0x0A]);
        result.unwrap();
        assert_eq!(out, b"ok\n");
    }

    #[test]
    fn short_frames_never_reach_type_handling() {
        let (result, out) = dispatch_one(UnimplementedPolicy::Fatal, &[0x0A]);
        result.unwrap();
        assert!(out.is_empty());

        let (result, out) = dispatch_one(UnimplementedPolicy::Fatal, &[]);
        result.unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn ipv4_tag_is_unimplemented_not_unknown() {
        let (result, _) = dispatch_one(UnimplementedPolicy::Fatal, &[0x47, 0x00, 0x01]);
        match result.unwrap_err() {
            BridgeError::Frame(FrameError::Unimplemented { kind }) => {
                assert_eq!(kind, FrameKind::Ipv4);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn coap_tag_is_unimplemented() {
        let (result, _) = dispatch_one(UnimplementedPolicy::Fatal, &[0xA9, 0x40, 0x01]);
        assert!(matches!(
            result.unwrap_err(),
            BridgeError::Frame(FrameError::Unimplemented {
                kind: FrameKind::Coap
            })
        ));
    }

    #[test]
    fn unknown_tag_is_unknown_not_unimplemented() {
        let (result, _) = dispatch_one(UnimplementedPolicy::Fatal, &[0xFF, 0x01]);
        match result.unwrap_err() {
            BridgeError::Frame(FrameError::UnknownTag { tag }) => assert_eq!(tag, 0xFF),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn skip_policy_drops_unimplemented_frames() {
        let (result, out) = dispatch_one(UnimplementedPolicy::Skip, &[0x60, 0x01, 0x02]);
        result.unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn skip_policy_still_rejects_unknown_tags() {
        let (result, _) = dispatch_one(UnimplementedPolicy::Skip, &[0x03, 0x01]);
        assert!(matches!(
            result.unwrap_err(),
            BridgeError::Frame(FrameError::UnknownTag { tag: 0x03 })
        ));
    }

    #[test]
    fn invalid_utf8_is_reported_with_position() {
        let (result, out) = dispatch_one(UnimplementedPolicy::Fatal, &[0x0A, 0x6F, 0xFF, 0x6B]);
        match result.unwrap_err() {
            BridgeError::Frame(FrameError::Utf8(err)) => assert_eq!(err.valid_up_to(), 1),
            other => panic!("unexpected error: {other}"),
        }
        assert!(out.is_empty());
    }
}
