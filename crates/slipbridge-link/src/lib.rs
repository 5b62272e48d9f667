//! Serial channel collaborator for slipbridge.
//!
//! Opens and configures the physical serial connection and hands the
//! bridge plain `Read`/`Write` handles. The framing core never touches
//! port configuration; this is the lowest layer of slipbridge.

pub mod error;
pub mod serial;

pub use error::{LinkError, Result};
pub use serial::{list_ports, SerialConfig, SerialLink, DEFAULT_BAUD, DEFAULT_READ_TIMEOUT};

// Re-exported so the CLI can render port listings without depending on
// serialport directly.
pub use serialport::{SerialPortInfo, SerialPortType};
