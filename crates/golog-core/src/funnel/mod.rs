//! Single-writer serialization funnel.
//!
//! The `LogFunnel` owns the log file for its whole lifetime. Producers never
//! see the file; they hold a cloneable [`FunnelHandle`] and enqueue lines on an
//! unbounded channel. One consumer task drains the channel in FIFO order and,
//! for each line, echoes it to stdout and appends it to the file.
//!
//! Key properties:
//! - **Exclusive writer by construction**: the file is moved into the consumer
//!   task, so no other code can alias it
//! - **Fire-and-forget**: `submit` never waits and reports nothing back
//! - **Absorbed write failures**: a failed append is traced and skipped
//!
//! # Example
//!
//! ```ignore
//! let funnel = LogFunnel::start(file);
//! let handle = funnel.handle();
//! handle.submit(LogMessage::new("alice", "hello")?.format());
//! drop(handle);
//! funnel.shutdown().await;
//! ```

mod stamp;

pub use stamp::{LOG_TAG, TIMESTAMP_FORMAT, stamp};

use std::fs::File;
use std::io;

use chrono::Local;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::domain::FormattedLine;
use crate::ports::LogSinkPort;

/// Producer side of the funnel.
///
/// Cheap to clone; one clone per request task is the intended use.
#[derive(Debug, Clone)]
pub struct FunnelHandle {
    tx: mpsc::UnboundedSender<FormattedLine>,
}

impl FunnelHandle {
    /// Enqueue a line. Never blocks.
    ///
    /// If the consumer has already stopped the line is dropped.
    pub fn submit(&self, line: FormattedLine) {
        if let Err(mpsc::error::SendError(line)) = self.tx.send(line) {
            debug!(%line, "log funnel closed, dropping line");
        }
    }

    /// Whether the consumer has stopped accepting lines.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

impl LogSinkPort for FunnelHandle {
    fn submit(&self, line: FormattedLine) {
        Self::submit(self, line);
    }
}

/// Owner of the consumer task.
pub struct LogFunnel {
    handle: FunnelHandle,
    task: JoinHandle<u64>,
}

impl LogFunnel {
    /// Start the consumer for an already-open, writable file.
    ///
    /// Lines are mirrored to the process's standard output.
    /// Must be called from within a tokio runtime.
    pub fn start(file: File) -> Self {
        Self::start_with_echo(file, tokio::io::stdout())
    }

    /// Start the consumer with an explicit mirror instead of stdout.
    pub fn start_with_echo<W>(file: File, echo: W) -> Self
    where
        W: AsyncWrite + Unpin + Send + 'static,
    {
        Self::spawn(tokio::fs::File::from_std(file), echo)
    }

    fn spawn<F, W>(file: F, echo: W) -> Self
    where
        F: AsyncWrite + Unpin + Send + 'static,
        W: AsyncWrite + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(consume(rx, file, echo));
        Self {
            handle: FunnelHandle { tx },
            task,
        }
    }

    /// A new producer handle.
    pub fn handle(&self) -> FunnelHandle {
        self.handle.clone()
    }

    /// Close the funnel's own handle and wait for the consumer to finish.
    ///
    /// The consumer only stops once every [`FunnelHandle`] clone is dropped;
    /// callers that need a deadline should wrap this in a timeout. Returns the
    /// number of lines appended to the file.
    pub async fn shutdown(self) -> u64 {
        let Self { handle, task } = self;
        drop(handle);
        match task.await {
            Ok(appended) => appended,
            Err(e) => {
                error!(error = %e, "log funnel task failed");
                0
            }
        }
    }
}

async fn consume<F, W>(
    mut rx: mpsc::UnboundedReceiver<FormattedLine>,
    mut file: F,
    mut echo: W,
) -> u64
where
    F: AsyncWrite + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut appended = 0u64;

    while let Some(line) = rx.recv().await {
        let stamped = stamp(&line, &Local::now());

        if let Err(e) = write_line(&mut echo, &stamped).await {
            warn!(error = %e, "failed to mirror log line to stdout");
        }
        match write_line(&mut file, &stamped).await {
            Ok(()) => appended += 1,
            Err(e) => error!(error = %e, %line, "failed to append log line, dropping it"),
        }
    }

    if let Err(e) = file.shutdown().await {
        warn!(error = %e, "failed to close log file cleanly");
    }
    debug!(appended, "log funnel consumer exiting");
    appended
}

async fn write_line<W>(writer: &mut W, line: &str) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(line.as_bytes()).await?;
    writer.flush().await
}
