//! Subcommands and their arguments.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};
use envscope_core::SlotKey;

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Run every probe once and print the resulting slots
    Report(ReportArgs),

    /// List every slot key and the probe that writes it
    Slots,
}

/// How `report` prints the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned key/value lines
    Table,
    /// Slot states and write counts as JSON
    Json,
    /// A standalone HTML page with one element per slot
    Html,
}

/// Arguments for `report`.
#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Read the environment from a captured browser snapshot instead of this host
    #[arg(long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Declare only these slots; writes to any other slot are skipped
    #[arg(long = "slot", value_name = "KEY")]
    pub slots: Vec<SlotKey>,

    /// Text a declared slot holds until a probe writes it
    #[arg(long, default_value = "取得中...")]
    pub placeholder: String,

    /// ipinfo.io access token
    #[arg(long, env = "ENVSCOPE_IPINFO_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Geolocation endpoint returning the caller's own record
    #[arg(long, env = "ENVSCOPE_IPINFO_URL")]
    pub endpoint: Option<String>,

    /// Give up on the geolocation lookup after this many seconds
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,
}
