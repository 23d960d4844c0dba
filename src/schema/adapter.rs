//! Line decoder for the newline-delimited touch log
//!
//! Decoding is two-stage so the error taxonomy stays precise: a line that
//! is not JSON at all is a decode failure, a record with no recognizable
//! `flavor` is not an event of interest, and a touch record missing a
//! required field is malformed rather than silently defaulted.

use serde_json::Value;

use crate::error::PairError;
use crate::schema::TouchEvent;

/// Flavors that participate in pairing
const TOUCH_FLAVORS: [&str; 2] = ["start_touch", "end_touch"];

/// Outcome of decoding one log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedLine {
    /// A touch event to feed to the pairer
    Event(TouchEvent),
    /// Blank line or a record of some other flavor (`post`, `touch_beat`, ...)
    Ignored,
}

/// Decode one raw log line.
pub fn decode_line(line: &str) -> Result<DecodedLine, PairError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(DecodedLine::Ignored);
    }

    let value: Value = serde_json::from_str(trimmed).map_err(|e| PairError::Decode {
        line: line.to_string(),
        reason: e.to_string(),
    })?;

    let flavor = match value.get("flavor").and_then(Value::as_str) {
        Some(flavor) if TOUCH_FLAVORS.contains(&flavor) => flavor.to_string(),
        _ => return Ok(DecodedLine::Ignored),
    };

    let event = serde_json::from_value(value).map_err(|e| PairError::Malformed {
        flavor,
        reason: e.to_string(),
    })?;

    Ok(DecodedLine::Event(event))
}

/// Per-line decode outcome with its 1-based line number, for validation
/// reporting.
#[derive(Debug)]
pub struct LineReport {
    pub line_no: usize,
    pub result: Result<DecodedLine, PairError>,
}

/// Decode every line of a log, keeping per-line outcomes.
pub fn decode_log(input: &str) -> Vec<LineReport> {
    input
        .lines()
        .enumerate()
        .map(|(idx, line)| LineReport {
            line_no: idx + 1,
            result: decode_line(line),
        })
        .collect()
}
