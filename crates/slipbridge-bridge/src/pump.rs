use std::io::{ErrorKind, Read, Write};

use tracing::debug;

use slipbridge_frame::Decoder;

use crate::dispatch::Dispatcher;
use crate::error::{BridgeError, Result};
use crate::shutdown::Shutdown;

const READ_CHUNK_SIZE: usize = 512;

/// Inbound pump: serial bytes -> decoder -> dispatcher.
///
/// Blocks on the serial read and dispatches every frame the decoder
/// completes, in arrival order. Terminates cleanly on serial end-of-stream
/// or shutdown; transport and dispatch failures propagate. `TimedOut` and
/// `WouldBlock` reads mean "no data yet" (the serial link uses a finite
/// read timeout) and re-check the shutdown flag.
pub fn run_inbound<R, W>(
    mut serial: R,
    decoder: &mut Decoder,
    dispatcher: &mut Dispatcher<W>,
    shutdown: &Shutdown,
) -> Result<()>
where
    R: Read,
    W: Write,
{
    let mut chunk = [0u8; READ_CHUNK_SIZE];

    while !shutdown.is_triggered() {
        let read = match serial.read(&mut chunk) {
            Ok(0) => {
                debug!("serial end of stream");
                return Ok(());
            }
            Ok(n) => n,
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) if matches!(err.kind(), ErrorKind::TimedOut | ErrorKind::WouldBlock) => {
                continue
            }
            Err(err) => return Err(BridgeError::SerialRead(err)),
        };

        for frame in decoder.process(&chunk[..read]) {
            dispatcher.dispatch(frame)?;
        }
    }

    debug!("inbound pump observed shutdown");
    Ok(())
}
