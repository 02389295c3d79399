//! CLI bootstrap - the composition root.
//!
//! Validates configuration, opens the log file and starts the funnel, then
//! hands the funnel to the selected transport. Everything fatal happens here
//! before any request is accepted.

use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use golog_axum::ServerConfig;
use golog_core::{CoreError, LogFunnel, TransportMode, open_or_create};
use tracing::{info, warn};

use crate::error::CliError;
use crate::parser::Cli;

/// Upper bound on waiting for queued lines at shutdown.
pub const DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Validated process configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Path of the append-only log file.
    pub logfile: PathBuf,
    /// Selected transport.
    pub mode: TransportMode,
    /// HTTP listener settings.
    pub server: ServerConfig,
}

impl CliConfig {
    /// Validate parsed arguments.
    ///
    /// The mode is checked before the log file is touched, so an unsupported
    /// mode never creates a file.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let mode = cli
            .mode
            .parse::<TransportMode>()
            .map_err(CoreError::from)?;

        Ok(Self {
            logfile: cli.logfile.clone(),
            mode,
            server: ServerConfig::with_defaults(),
        })
    }
}

/// Running pieces owned by the CLI.
pub struct CliContext {
    pub config: CliConfig,
    pub funnel: LogFunnel,
}

/// Open the log file and start the funnel.
///
/// Must be called from within a tokio runtime.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let file = open_or_create(&config.logfile).map_err(CoreError::from)?;

    info!(
        target: "golog.paths",
        logfile = %config.logfile.display(),
        mode = %config.mode,
        "golog bootstrap resolved configuration"
    );

    let funnel = LogFunnel::start(file);
    Ok(CliContext { config, funnel })
}

/// Run the configured transport until `shutdown` resolves, then drain the
/// funnel on a best-effort basis.
pub async fn run<S>(ctx: CliContext, shutdown: S) -> Result<(), CliError>
where
    S: Future<Output = ()> + Send + 'static,
{
    let CliContext { config, funnel } = ctx;

    let served = match config.mode {
        TransportMode::Http => {
            golog_axum::start_server(config.server, Arc::new(funnel.handle()), shutdown)
                .await
                .map_err(|e| CliError::Server(format!("{e:#}")))
        }
    };

    match tokio::time::timeout(DRAIN_TIMEOUT, funnel.shutdown()).await {
        Ok(appended) => info!(appended, "log funnel drained"),
        Err(_) => warn!(
            timeout_secs = DRAIN_TIMEOUT.as_secs(),
            "log funnel did not drain in time; pending lines dropped"
        ),
    }

    served
}
