//! Error types for Wordlog

use thiserror::Error;

/// Errors reported while decoding and pairing touch log lines
#[derive(Debug, Error)]
pub enum PairError {
    /// The line is not valid JSON. Reported and skipped; never aborts a run.
    #[error("cannot parse line '{line}': {reason}")]
    Decode { line: String, reason: String },

    /// The record names a touch flavor but lacks a field that flavor
    /// requires. Surfaced rather than defaulted; output rows need every field.
    #[error("malformed {flavor} record: {reason}")]
    Malformed { flavor: String, reason: String },

    /// Start timestamp outside the representable date-time range.
    #[error("timestamp {0} ms cannot be formatted as a date-time")]
    InvalidTimestamp(i64),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
