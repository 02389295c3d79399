//! Line stamping for the log file and the stdout mirror.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use crate::domain::FormattedLine;

/// Fixed source tag at the start of every written line.
pub const LOG_TAG: &str = "golog: ";

/// Date and time layout following the tag, e.g. `2009/11/10 23:00:00`.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Render `line` as it is written: tag, timestamp, line, newline.
///
/// The line is not escaped. A message containing `\n` spans several physical
/// lines and only the first carries the tag.
pub fn stamp<Tz>(line: &FormattedLine, at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{LOG_TAG}{} {line}\n", at.format(TIMESTAMP_FORMAT))
}
