//! CLI entry point - the composition root.
//!
//! Providers are wired together via `bootstrap`; command dispatch routes to
//! handlers.

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use envscope_cli::{Cli, CliConfig, CliError, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries the report; logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn dispatch(command: Commands) -> Result<(), CliError> {
    match command {
        Commands::Report(args) => {
            let config = CliConfig::from_report_args(&args)?;
            let ctx = bootstrap(config)?;
            handlers::report::execute(&ctx, &args).await
        }
        Commands::Slots => {
            handlers::slots::execute();
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads its env fallbacks
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    if let Err(e) = dispatch(command).await {
        eprintln!("Error: {e}");
        std::process::exit(e.exit_code());
    }

    Ok(())
}
