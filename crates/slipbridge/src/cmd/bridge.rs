use std::time::Duration;

use tracing::info;

use slipbridge_bridge::{BridgeConfig, PacerConfig, Shutdown};
use slipbridge_link::{SerialConfig, SerialLink};

use crate::cmd::BridgeArgs;
use crate::exit::{bridge_error, link_error, CliError, CliResult, SUCCESS, USAGE};

pub fn run(args: BridgeArgs) -> CliResult<i32> {
    let pace = parse_duration(&args.pace)?;

    let serial_config = SerialConfig::new(&args.device).with_baud(args.baud);
    let serial_rx =
        SerialLink::open(&serial_config).map_err(|err| link_error("serial open failed", err))?;
    let serial_tx = serial_rx
        .try_clone()
        .map_err(|err| link_error("serial clone failed", err))?;

    let shutdown = Shutdown::new();
    install_ctrlc_handler(shutdown.clone())?;

    let config = BridgeConfig {
        pacing: PacerConfig {
            interval: pace,
            chunk_size: args.pace_chunk.max(1),
        },
        policy: args.on_unimplemented.into(),
    };

    info!(
        device = %args.device.display(),
        baud = args.baud,
        pace_ms = pace.as_millis() as u64,
        "bridging stdio over slipmux"
    );

    slipbridge_bridge::run(
        serial_rx,
        serial_tx,
        std::io::stdin(),
        std::io::stdout(),
        config,
        shutdown,
    )
    .map_err(|err| bridge_error("bridge failed", err))?;

    Ok(SUCCESS)
}

fn install_ctrlc_handler(shutdown: Shutdown) -> CliResult<()> {
    ctrlc::set_handler(move || {
        shutdown.trigger();
    })
    .map_err(|err| {
        CliError::new(
            crate::exit::INTERNAL,
            format!("signal handler setup failed: {err}"),
        )
    })
}

fn parse_duration(input: &str) -> CliResult<Duration> {
    let input = input.trim();
    if input.is_empty() {
        return Err(CliError::new(USAGE, "duration must not be empty"));
    }

    let (number, unit) = if let Some(num) = input.strip_suffix("ms") {
        (num, "ms")
    } else if let Some(num) = input.strip_suffix('s') {
        (num, "s")
    } else {
        (input, "s")
    };

    let value: u64 = number
        .parse()
        .map_err(|_| CliError::new(USAGE, format!("invalid duration value: {input}")))?;

    if value == 0 {
        return Err(CliError::new(USAGE, "duration must be greater than zero"));
    }

    match unit {
        "ms" => Ok(Duration::from_millis(value)),
        "s" => Ok(Duration::from_secs(value)),
        _ => Err(CliError::new(
            USAGE,
            format!("unsupported duration unit: {unit}"),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_duration_seconds_and_millis() {
        assert_eq!(parse_duration("2s").unwrap(), Duration::from_secs(2));
        assert_eq!(parse_duration("150ms").unwrap(), Duration::from_millis(150));
        assert_eq!(parse_duration("3").unwrap(), Duration::from_secs(3));
    }

    #[test]
    fn parse_duration_rejects_invalid_values() {
        assert!(parse_duration("0s").is_err());
        assert!(parse_duration("bad").is_err());
        assert!(parse_duration("").is_err());
    }
}
