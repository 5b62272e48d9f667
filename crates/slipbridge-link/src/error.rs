use std::path::PathBuf;

/// Errors that can occur while opening or managing the serial channel.
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// Failed to open the serial device.
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        source: serialport::Error,
    },

    /// Failed to clone the port handle for the write half.
    #[error("failed to clone serial handle for {path}: {source}")]
    CloneHandle {
        path: PathBuf,
        source: serialport::Error,
    },

    /// Failed to enumerate serial devices.
    #[error("failed to enumerate serial ports: {0}")]
    Enumerate(#[source] serialport::Error),
}

pub type Result<T> = std::result::Result<T, LinkError>;
