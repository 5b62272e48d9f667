use std::io::{Read, Write};
use std::thread;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use slipbridge_frame::Decoder;

use crate::dispatch::{Dispatcher, UnimplementedPolicy};
use crate::error::{BridgeError, Result};
use crate::pacer::{run_outbound, PacerConfig};
use crate::pump::run_inbound;
use crate::shutdown::Shutdown;

/// Parameters for one bridge run.
#[derive(Debug, Clone, Default)]
pub struct BridgeConfig {
    pub pacing: PacerConfig,
    pub policy: UnimplementedPolicy,
}

/// Run the bridge until either direction finishes.
///
/// The outbound pacer runs on its own thread; the inbound pump runs on the
/// calling thread. The two share only the serial channel, one direction
/// each. When either loop exits — end-of-stream, error, or an external
/// [`Shutdown::trigger`] — the shutdown flag stops the other, and the
/// first error (inbound taking precedence) is returned.
///
/// Host input has no read timeout, so a pacer blocked on it may not
/// observe shutdown until the next byte arrives; after a bounded grace
/// period it is left detached for process exit to collect.
pub fn run<SR, SW, HI, HO>(
    serial_rx: SR,
    serial_tx: SW,
    host_in: HI,
    host_out: HO,
    config: BridgeConfig,
    shutdown: Shutdown,
) -> Result<()>
where
    SR: Read,
    SW: Write + Send + 'static,
    HI: Read + Send + 'static,
    HO: Write,
{
    let pacer = {
        let shutdown = shutdown.clone();
        let pacing = config.pacing.clone();
        thread::Builder::new()
            .name("slipbridge-pacer".into())
            .spawn(move || {
                let result = run_outbound(host_in, serial_tx, &pacing, &shutdown);
                // Stop the inbound pump once this direction is done.
                shutdown.trigger();
                result
            })
            .map_err(BridgeError::Spawn)?
    };

    let mut decoder = Decoder::new();
    let mut dispatcher = Dispatcher::with_policy(host_out, config.policy);
    let inbound = run_inbound(serial_rx, &mut decoder, &mut dispatcher, &shutdown);
    shutdown.trigger();

    // The pacer may be mid-sleep or blocked on host input; give it one
    // pacing interval plus slack to notice the flag.
    let grace = config.pacing.interval + Duration::from_millis(250);
    let deadline = Instant::now() + grace;
    while !pacer.is_finished() && Instant::now() < deadline {
        thread::sleep(Duration::from_millis(10));
    }

    if !pacer.is_finished() {
        warn!("outbound pacer still blocked on host input; leaving it to process exit");
        return inbound;
    }

    debug!("both bridge loops stopped");
    let outbound = pacer.join().map_err(|_| BridgeError::PacerPanic)?;
    inbound.and(outbound)
}
