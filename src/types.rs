//! Core types for the Wordlog pipeline

use chrono::{Local, TimeZone};
use serde::{Deserialize, Serialize};

use crate::error::PairError;

/// One completed word interaction, ready for tabular output.
///
/// Field order is the output column order: `time`, `duration`, `word`,
/// `source`, `choice`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    /// Start of the touch, formatted as a local full date-time string
    pub time: String,
    /// Touch duration in milliseconds
    pub duration: i64,
    /// Word the touch was registered against
    pub word: String,
    /// Vote station that reported the end of the touch
    pub source: String,
    /// Side the voter chose
    pub choice: String,
}

/// Format an epoch-millisecond start timestamp as a local full date-time
/// string, the way the log table has always recorded it.
pub(crate) fn format_start_time(start_ms: i64) -> Result<String, PairError> {
    let dt = Local
        .timestamp_millis_opt(start_ms)
        .single()
        .ok_or(PairError::InvalidTimestamp(start_ms))?;
    Ok(dt.format("%c").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_start_time() {
        let formatted = format_start_time(1_000).unwrap();
        let expected = Local
            .timestamp_millis_opt(1_000)
            .unwrap()
            .format("%c")
            .to_string();
        assert_eq!(formatted, expected);
    }

    #[test]
    fn test_format_start_time_out_of_range() {
        let result = format_start_time(i64::MAX);
        assert!(matches!(result, Err(PairError::InvalidTimestamp(_))));
    }

    #[test]
    fn test_interaction_serializes_in_column_order() {
        let row = Interaction {
            time: "Thu Jan  1 00:00:01 1970".to_string(),
            duration: 500,
            word: "cat".to_string(),
            source: "ui".to_string(),
            choice: "yes".to_string(),
        };

        let json = serde_json::to_string(&row).unwrap();
        let time_pos = json.find("\"time\"").unwrap();
        let duration_pos = json.find("\"duration\"").unwrap();
        let word_pos = json.find("\"word\"").unwrap();
        let source_pos = json.find("\"source\"").unwrap();
        let choice_pos = json.find("\"choice\"").unwrap();

        assert!(time_pos < duration_pos);
        assert!(duration_pos < word_pos);
        assert!(word_pos < source_pos);
        assert!(source_pos < choice_pos);
    }
}
