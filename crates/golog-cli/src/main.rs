//! CLI entry point.
//!
//! Fatal startup errors are printed to stderr and mapped to a non-zero exit
//! code; nothing is retried.

use std::process::ExitCode;

use clap::Parser;

use golog_cli::{Cli, CliConfig, CliError, bootstrap, logging, run};

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown requested");
}

async fn start(cli: Cli) -> Result<(), CliError> {
    let config = CliConfig::from_cli(&cli)?;
    let ctx = bootstrap(config)?;
    run(ctx, shutdown_signal()).await
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before parsing so they can supply flags
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    match start(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("golog: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
