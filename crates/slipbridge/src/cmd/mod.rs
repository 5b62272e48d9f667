use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

use slipbridge_bridge::UnimplementedPolicy;

use crate::exit::CliResult;

pub mod bridge;
pub mod ports;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bridge stdio to a device over a slipmux serial link.
    Bridge(BridgeArgs),
    /// List serial devices visible to the host.
    Ports(PortsArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command) -> CliResult<i32> {
    match command {
        Command::Bridge(args) => bridge::run(args),
        Command::Ports(args) => ports::run(args),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct BridgeArgs {
    /// Serial device path, e.g. /dev/ttyUSB0.
    pub device: PathBuf,

    /// Line speed in baud.
    #[arg(long, default_value_t = slipbridge_link::DEFAULT_BAUD)]
    pub baud: u32,

    /// Pacing delay before each outbound serial write (e.g. 1s, 250ms).
    /// The device UART has no hardware flow control.
    #[arg(long, default_value = "1s")]
    pub pace: String,

    /// Outbound chunk size in bytes (the device UART FIFO depth).
    #[arg(long, default_value_t = slipbridge_bridge::DEFAULT_PACE_CHUNK)]
    pub pace_chunk: usize,

    /// What to do when an IPv4/IPv6/CoAP frame arrives.
    #[arg(long, value_enum, default_value = "fatal")]
    pub on_unimplemented: OnUnimplemented,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum OnUnimplemented {
    /// Stop the bridge (the frame indicates a protocol feature gap).
    Fatal,
    /// Log a warning and drop the frame.
    Skip,
}

impl From<OnUnimplemented> for UnimplementedPolicy {
    fn from(value: OnUnimplemented) -> Self {
        match value {
            OnUnimplemented::Fatal => Self::Fatal,
            OnUnimplemented::Skip => Self::Skip,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct PortsArgs {}

#[derive(Args, Debug, Default)]
pub struct VersionArgs {}
