mod cmd;
mod exit;
mod logging;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};

#[derive(Parser, Debug)]
#[command(
    name = "slipbridge",
    version,
    about = "Bridge stdio to an embedded device over a slipmux serial link"
)]
struct Cli {
    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr). RUST_LOG overrides this when set.
    #[arg(long, value_name = "LEVEL", default_value = "info", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    match cmd::run(cli.command) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bridge_subcommand() {
        let cli = Cli::try_parse_from([
            "slipbridge",
            "bridge",
            "/dev/ttyUSB0",
            "--baud",
            "9600",
            "--pace",
            "250ms",
            "--on-unimplemented",
            "skip",
        ])
        .expect("bridge args should parse");

        match cli.command {
            Command::Bridge(args) => {
                assert_eq!(args.device, std::path::PathBuf::from("/dev/ttyUSB0"));
                assert_eq!(args.baud, 9600);
                assert_eq!(args.pace, "250ms");
                assert!(matches!(
                    args.on_unimplemented,
                    crate::cmd::OnUnimplemented::Skip
                ));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn bridge_defaults_match_the_device_workaround() {
        let cli = Cli::try_parse_from(["slipbridge", "bridge", "/dev/ttyACM0"])
            .expect("defaults should parse");

        match cli.command {
            Command::Bridge(args) => {
                assert_eq!(args.baud, slipbridge_link::DEFAULT_BAUD);
                assert_eq!(args.pace, "1s");
                assert_eq!(args.pace_chunk, slipbridge_bridge::DEFAULT_PACE_CHUNK);
                assert!(matches!(
                    args.on_unimplemented,
                    crate::cmd::OnUnimplemented::Fatal
                ));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_device_argument() {
        let err = Cli::try_parse_from(["slipbridge", "bridge"])
            .expect_err("missing device should fail");
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn parses_ports_subcommand() {
        let cli = Cli::try_parse_from(["slipbridge", "ports"]).expect("ports should parse");
        assert!(matches!(cli.command, Command::Ports(_)));
    }
}
