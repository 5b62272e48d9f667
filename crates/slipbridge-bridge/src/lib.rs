//! The bidirectional bridging discipline for slipmux serial links.
//!
//! Two blocking loops share one serial channel, one direction each:
//!
//! - the inbound pump reads serial bytes, feeds the SLIP [`Decoder`] and
//!   hands every completed frame to the [`Dispatcher`], which writes
//!   diagnostic text to host output;
//! - the outbound pacer forwards host input to the serial channel
//!   unmodified, rate-limited because the device UART has no hardware
//!   flow control.
//!
//! A shared [`Shutdown`] flag, checked at every suspension point, makes
//! both loops terminate together.
//!
//! [`Decoder`]: slipbridge_frame::Decoder

pub mod bridge;
pub mod dispatch;
pub mod error;
pub mod pacer;
pub mod pump;
pub mod shutdown;

pub use bridge::{run, BridgeConfig};
pub use dispatch::{Dispatcher, UnimplementedPolicy};
pub use error::{BridgeError, Result};
pub use pacer::{run_outbound, PacerConfig, DEFAULT_PACE_CHUNK, DEFAULT_PACE_INTERVAL};
pub use pump::run_inbound;
pub use shutdown::Shutdown;
