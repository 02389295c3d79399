//! Log sink port for handing formatted lines to the single writer.
//!
//! This port abstracts the destination of accepted client lines so that
//! transport adapters (HTTP today) depend on the submission point only, not on
//! how or where lines are persisted.

use crate::domain::FormattedLine;

/// Port for submitting formatted lines to the log writer.
///
/// Implementations must be safe to call from many tasks at once and must not
/// block the caller waiting for the write. Submission is fire-and-forget: no
/// confirmation that the line was persisted is ever returned.
pub trait LogSinkPort: Send + Sync {
    /// Enqueue a line for writing.
    fn submit(&self, line: FormattedLine);
}

/// Sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogSink;

impl LogSinkPort for NoopLogSink {
    fn submit(&self, _line: FormattedLine) {}
}
