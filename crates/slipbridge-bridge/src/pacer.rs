use std::io::{ErrorKind, Read, Write};
use std::thread;
use std::time::Duration;

use tracing::{debug, trace};

use crate::error::{BridgeError, Result};
use crate::shutdown::Shutdown;

/// Default pacing delay before every serial write.
pub const DEFAULT_PACE_INTERVAL: Duration = Duration::from_secs(1);

/// Default outbound read chunk: the depth of the device UART's receive
/// FIFO.
pub const DEFAULT_PACE_CHUNK: usize = 8;

/// Outbound pacing parameters.
#[derive(Debug, Clone)]
pub struct PacerConfig {
    /// Unconditional delay before each serial write. Not adaptive; this is
    /// the sole flow-control mechanism on the link.
    pub interval: Duration,
    /// Maximum bytes read from host input per cycle.
    pub chunk_size: usize,
}

impl Default for PacerConfig {
    fn default() -> Self {
        Self {
            interval: DEFAULT_PACE_INTERVAL,
            chunk_size: DEFAULT_PACE_CHUNK,
        }
    }
}

/// Outbound pacer: host input bytes -> serial channel, unmodified.
///
/// No SLIP encoding is applied on this path; outbound data is assumed to
/// already be in the wire format the device expects. Each write is
/// preceded by the fixed pacing delay: the device UART lacks hardware flow
/// control, and writing too fast overflows its receive FIFO and corrupts
/// framing. Terminates on host-input end-of-stream or shutdown.
pub fn run_outbound<R, W>(
    mut host_in: R,
    mut serial: W,
    config: &PacerConfig,
    shutdown: &Shutdown,
) -> Result<()>
where
    R: Read,
    W: Write,
{
    let mut chunk = vec![0u8; config.chunk_size.max(1)];

    while !shutdown.is_triggered() {
        let read = match host_in.read(&mut chunk) {
            Ok(0) => {
                debug!("host input end of stream");
                return Ok(());
            }
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) if matches!(err.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock) => {
                continue
            }
            Err(err) => return Err(BridgeError::HostRead(err)),
        };

        thread::sleep(config.interval);
        if shutdown.is_triggered() {
            break;
        }

        trace!(len = read, "forwarding paced chunk");
        write_all_serial(&mut serial, &chunk[..read])?;
    }

    debug!("outbound pacer observed shutdown");
    Ok(())
}

fn write_all_serial<W: Write>(serial: &mut W, buf: &[u8]) -> Result<()> {
    let mut offset = 0usize;
    while offset < buf.len() {
        match serial.write(&buf[offset..]) {
            Ok(0) => {
                return Err(BridgeError::SerialWrite(std::io::Error::new(
                    ErrorKind::WriteZero,
                    "serial channel closed",
                )))
            }
            Ok(n) => offset += n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
            Err(err) => return Err(BridgeError::SerialWrite(err)),
        }
    }

    loop {
        match serial.flush() {
            Ok(()) => return Ok(()),
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
            Err(err) => return Err(BridgeError::SerialWrite(err)),
        }
    }
}
