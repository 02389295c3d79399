//! Axum server bootstrap - the composition root for the HTTP transport.
//!
//! The sink is injected rather than built here so the same router serves the
//! production funnel and test doubles alike.

use std::future::Future;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use anyhow::{Context, Result};
use golog_core::LogSinkPort;
use tokio::net::TcpListener;
use tracing::info;

/// Port the HTTP transport listens on.
pub const DEFAULT_PORT: u16 = 8080;

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to.
    pub host: IpAddr,
    /// Port for the HTTP server.
    pub port: u16,
}

impl ServerConfig {
    /// Listen on all interfaces, port 8080.
    pub const fn with_defaults() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }

    pub const fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Application context for the Axum adapter.
pub struct AxumContext {
    /// Destination for accepted lines.
    pub sink: Arc<dyn LogSinkPort>,
}

/// Wire the handler context around a sink.
pub fn bootstrap(sink: Arc<dyn LogSinkPort>) -> AxumContext {
    AxumContext { sink }
}

/// Bind `config.addr()` and serve until `shutdown` resolves.
pub async fn start_server<S>(
    config: ServerConfig,
    sink: Arc<dyn LogSinkPort>,
    shutdown: S,
) -> Result<()>
where
    S: Future<Output = ()> + Send + 'static,
{
    let addr = config.addr();
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    serve(listener, bootstrap(sink), shutdown).await
}

/// Serve on an already-bound listener until `shutdown` resolves.
///
/// In-flight requests are allowed to finish before this returns.
pub async fn serve<S>(listener: TcpListener, ctx: AxumContext, shutdown: S) -> Result<()>
where
    S: Future<Output = ()> + Send + 'static,
{
    let app = crate::routes::create_router(ctx);

    info!("golog listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("http server failed")?;

    info!("golog http server stopped");
    Ok(())
}
