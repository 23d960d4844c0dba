//! Pipeline orchestration
//!
//! Batch entry point over the streaming pairer: one pass over a whole log,
//! rows and diagnostics separated for the caller.

use crate::error::PairError;
use crate::pairer::pair_lines;
use crate::types::Interaction;

/// Everything one pass over a log produced: the table rows and the
/// per-line diagnostics, each in input order.
#[derive(Debug, Default)]
pub struct PairReport {
    /// Completed interactions, one per validly paired start/end
    pub interactions: Vec<Interaction>,
    /// Reportable lines: decode failures and malformed touch records
    pub diagnostics: Vec<PairError>,
}

/// Pair a whole newline-delimited log in one pass.
///
/// Diagnostics never abort the run; a log with unparseable lines still
/// yields every validly paired interaction.
pub fn pair_log(input: &str) -> PairReport {
    let mut report = PairReport::default();
    for item in pair_lines(input.lines()) {
        match item {
            Ok(interaction) => report.interactions.push(interaction),
            Err(e) => report.diagnostics.push(e),
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_pair_log_end_to_end() {
        let input = concat!(
            r#"{"flavor":"post","word":"cat","time":500}"#,
            "\n",
            r#"{"flavor":"start_touch","word":"cat","time":1000}"#,
            "\n",
            r#"{"flavor":"end_touch","word":"cat","time":1500,"source":"ui","choice":"yes"}"#,
            "\n",
            r#"{"flavor":"start_touch","word":"dog","time":2000}"#,
            "\n",
            r#"{"flavor":"end_touch","word":"dog","time":2100,"source":"ui","choice":"no"}"#,
            "\n",
            r#"{"flavor":"start_touch","word":"fox","time":3000}"#,
            "\n",
            r#"{"flavor":"end_touch","word":"fox","time":33000,"source":"ui","choice":"no"}"#,
            "\n",
        );

        let report = pair_log(input);

        // dog is stutter (100 ms), fox is an outlier (30 s); only cat lands
        assert_eq!(report.interactions.len(), 1);
        assert_eq!(report.interactions[0].word, "cat");
        assert_eq!(report.interactions[0].duration, 500);
        assert!(report.diagnostics.is_empty());
    }

    #[test]
    fn test_pair_log_collects_diagnostics_and_completes() {
        let input = concat!(
            "}{ garbage\n",
            r#"{"flavor":"end_touch","word":"cat","time":1500,"choice":"yes"}"#,
            "\n",
            r#"{"flavor":"start_touch","word":"cat","time":2000}"#,
            "\n",
            r#"{"flavor":"end_touch","word":"cat","time":2500,"source":"ui","choice":"yes"}"#,
            "\n",
        );

        let report = pair_log(input);

        assert_eq!(report.interactions.len(), 1);
        assert_eq!(report.interactions[0].duration, 500);
        assert_eq!(report.diagnostics.len(), 2);
        assert!(matches!(report.diagnostics[0], PairError::Decode { .. }));
        assert!(matches!(report.diagnostics[1], PairError::Malformed { .. }));
    }

    #[test]
    fn test_pair_log_empty_input() {
        let report = pair_log("");
        assert!(report.interactions.is_empty());
        assert!(report.diagnostics.is_empty());
    }
}
