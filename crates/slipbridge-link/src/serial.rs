use std::io::{Read, Write};
use std::path::PathBuf;
use std::time::Duration;

use serialport::{DataBits, Parity, SerialPort, SerialPortInfo, StopBits};
use tracing::{debug, info};

use crate::error::{LinkError, Result};

/// Default line speed, matching the device firmware's UART setup.
pub const DEFAULT_BAUD: u32 = 115_200;

/// Default read timeout.
///
/// Serial reads never see EOF, so the port uses a short timeout and the
/// consumer treats `TimedOut` as "no data yet". This is what lets the
/// inbound loop observe a shutdown request between reads.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(100);

/// Configuration for opening the serial channel.
#[derive(Debug, Clone)]
pub struct SerialConfig {
    /// Device path, e.g. `/dev/ttyUSB0`.
    pub path: PathBuf,
    /// Line speed in baud. Default: 115200.
    pub baud: u32,
    /// Read timeout applied to the port. Default: 100ms.
    pub read_timeout: Duration,
}

impl SerialConfig {
    /// Configuration for `path` with default speed and timeout.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            baud: DEFAULT_BAUD,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }

    /// Override the line speed.
    pub fn with_baud(mut self, baud: u32) -> Self {
        self.baud = baud;
        self
    }
}

/// An open full-duplex serial channel — implements Read + Write.
///
/// The bridge reads frames on one handle and writes paced host input on a
/// cloned handle; both refer to the same underlying port. The link is
/// always configured as 8 data bits, no parity, one stop bit.
pub struct SerialLink {
    port: Box<dyn SerialPort>,
    path: PathBuf,
}

impl SerialLink {
    /// Open and configure the serial device.
    pub fn open(config: &SerialConfig) -> Result<Self> {
        let path = config.path.to_string_lossy().into_owned();
        let port = serialport::new(path, config.baud)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .timeout(config.read_timeout)
            .open()
            .map_err(|source| LinkError::Open {
                path: config.path.clone(),
                source,
            })?;

        info!(path = %config.path.display(), baud = config.baud, "serial link open");
        Ok(Self {
            port,
            path: config.path.clone(),
        })
    }

    /// Clone the port handle (a new descriptor on the same device).
    ///
    /// The bridge uses the original for reading and the clone for writing;
    /// the two directions never contend.
    pub fn try_clone(&self) -> Result<Self> {
        let port = self.port.try_clone().map_err(|source| LinkError::CloneHandle {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), "cloned serial handle");
        Ok(Self {
            port,
            path: self.path.clone(),
        })
    }

    /// The device path this link was opened on.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Read for SerialLink {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.port.read(buf)
    }
}

impl Write for SerialLink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.port.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.port.flush()
    }
}

impl std::fmt::Debug for SerialLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialLink").field("path", &self.path).finish()
    }
}

/// Enumerate serial devices visible to the host.
pub fn list_ports() -> Result<Vec<SerialPortInfo>> {
    serialport::available_ports().map_err(LinkError::Enumerate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = SerialConfig::new("/dev/ttyUSB0");
        assert_eq!(config.baud, DEFAULT_BAUD);
        assert_eq!(config.read_timeout, DEFAULT_READ_TIMEOUT);
        assert_eq!(config.path, PathBuf::from("/dev/ttyUSB0"));
    }

    #[test]
    fn config_baud_override() {
        let config = SerialConfig::new("/dev/ttyACM0").with_baud(9_600);
        assert_eq!(config.baud, 9_600);
    }

    #[test]
    fn open_missing_device_fails_with_path_context() {
        let config = SerialConfig::new("/dev/slipbridge-does-not-exist");
        let err = SerialLink::open(&config).unwrap_err();
        match err {
            LinkError::Open { path, .. } => {
                assert_eq!(path, PathBuf::from("/dev/slipbridge-does-not-exist"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
