use std::fmt;
use std::io;

use slipbridge_bridge::BridgeError;
use slipbridge_frame::FrameError;
use slipbridge_link::LinkError;

pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const TRANSPORT_ERROR: i32 = 3;
/// Corrupt stream: unknown frame tag or malformed diagnostic text.
pub const DATA_INVALID: i32 = 60;
/// Feature gap: a recognized frame kind with no handler. Deliberately
/// distinct from [`DATA_INVALID`] so monitoring can tell "unsupported
/// feature" from "corrupt stream".
pub const UNSUPPORTED: i32 = 61;
pub const USAGE: i32 = 64;
pub const TIMEOUT: i32 = 124;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock => TIMEOUT,
        io::ErrorKind::BrokenPipe | io::ErrorKind::UnexpectedEof => FAILURE,
        _ => TRANSPORT_ERROR,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn link_error(context: &str, err: LinkError) -> CliError {
    CliError::new(TRANSPORT_ERROR, format!("{context}: {err}"))
}

pub fn bridge_error(context: &str, err: BridgeError) -> CliError {
    match err {
        BridgeError::Frame(FrameError::Unimplemented { .. }) => {
            CliError::new(UNSUPPORTED, format!("{context}: {err}"))
        }
        BridgeError::Frame(_) => CliError::new(DATA_INVALID, format!("{context}: {err}")),
        BridgeError::HostWrite(source)
        | BridgeError::HostRead(source)
        | BridgeError::SerialRead(source)
        | BridgeError::SerialWrite(source) => io_error(context, source),
        other => CliError::new(INTERNAL, format!("{context}: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slipbridge_frame::FrameKind;

    #[test]
    fn unimplemented_and_unknown_map_to_distinct_codes() {
        let unimplemented = bridge_error(
            "bridge failed",
            BridgeError::Frame(FrameError::Unimplemented {
                kind: FrameKind::Coap,
            }),
        );
        let unknown = bridge_error(
            "bridge failed",
            BridgeError::Frame(FrameError::UnknownTag { tag: 0xFF }),
        );

        assert_eq!(unimplemented.code, UNSUPPORTED);
        assert_eq!(unknown.code, DATA_INVALID);
        assert_ne!(unimplemented.code, unknown.code);
    }

    #[test]
    fn io_errors_map_by_kind() {
        let timeout = io_error("read", io::Error::from(io::ErrorKind::TimedOut));
        assert_eq!(timeout.code, TIMEOUT);

        let pipe = io_error("write", io::Error::from(io::ErrorKind::BrokenPipe));
        assert_eq!(pipe.code, FAILURE);
    }
}
