//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Report on the environment a program runs in.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "envscope")]
#[command(about = "Report runtime environment details and IP geolocation")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::OutputFormat;
    use clap::CommandFactory;
    use envscope_core::SlotKey;
    use std::path::PathBuf;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_verbose_after_subcommand() {
        let cli = Cli::parse_from(["envscope", "slots", "--verbose"]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::Slots)));
    }

    #[test]
    fn test_report_defaults() {
        let cli = Cli::parse_from(["envscope", "report"]);
        let Some(Commands::Report(args)) = cli.command else {
            panic!("expected report command");
        };
        assert!(args.snapshot.is_none());
        assert_eq!(args.format, OutputFormat::Table);
        assert!(args.slots.is_empty());
        assert!(args.timeout.is_none());
    }

    #[test]
    fn test_report_options() {
        let cli = Cli::parse_from([
            "envscope",
            "report",
            "--snapshot",
            "capture.json",
            "--format",
            "json",
            "--slot",
            "ip-address",
            "--slot",
            "user-agent",
            "--timeout",
            "5",
        ]);
        let Some(Commands::Report(args)) = cli.command else {
            panic!("expected report command");
        };
        assert_eq!(args.snapshot, Some(PathBuf::from("capture.json")));
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.slots, vec![SlotKey::IpAddress, SlotKey::UserAgent]);
        assert_eq!(args.timeout, Some(5));
    }

    #[test]
    fn test_unknown_slot_is_rejected() {
        let result = Cli::try_parse_from(["envscope", "report", "--slot", "gpu-model"]);
        assert!(result.is_err());
    }
}
