use crate::frame::FrameKind;

/// Errors that can occur while classifying or handling a decoded frame.
///
/// The byte-level decoder itself never fails: stuffing anomalies (a stray
/// ESC followed by an ordinary byte) are resolved permissively per SLIP
/// convention. All fatal conditions originate at dispatch time.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// A recognized frame kind with no handler yet. Distinct from
    /// [`FrameError::UnknownTag`] so monitoring can tell a feature gap
    /// apart from stream corruption.
    #[error("support for {kind} frames is not implemented")]
    Unimplemented { kind: FrameKind },

    /// A tag outside every known range: either stream corruption or an
    /// unrecognized protocol extension.
    #[error("unknown frame tag 0x{tag:02X}")]
    UnknownTag { tag: u8 },

    /// A diagnostic frame whose payload is not valid UTF-8. The source
    /// error carries the offset of the first invalid byte.
    #[error("diagnostic payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),
}

pub type Result<T> = std::result::Result<T, FrameError>;
