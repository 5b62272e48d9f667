use std::io;

use slipbridge_frame::FrameError;

/// Errors that can occur while the bridge is running.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// A decoded frame could not be dispatched (unimplemented kind,
    /// unknown tag, or malformed diagnostic text).
    #[error("frame dispatch failed: {0}")]
    Frame(#[from] FrameError),

    /// Writing decoded diagnostic text to host output failed.
    #[error("host output write failed: {0}")]
    HostWrite(#[source] io::Error),

    /// Reading from host input failed.
    #[error("host input read failed: {0}")]
    HostRead(#[source] io::Error),

    /// Reading from the serial channel failed.
    #[error("serial read failed: {0}")]
    SerialRead(#[source] io::Error),

    /// Writing to the serial channel failed.
    #[error("serial write failed: {0}")]
    SerialWrite(#[source] io::Error),

    /// The outbound pacer thread could not be spawned.
    #[error("failed to spawn outbound pacer thread: {0}")]
    Spawn(#[source] io::Error),

    /// The outbound pacer thread panicked.
    #[error("outbound pacer thread panicked")]
    PacerPanic,
}

pub type Result<T> = std::result::Result<T, BridgeError>;
