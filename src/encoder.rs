//! Tabular output encoding
//!
//! Encodes paired interactions as a CSV table (the log's historical output
//! shape), or as NDJSON / JSON for downstream tooling.

use crate::error::PairError;
use crate::types::Interaction;

/// Output table column names, in order
pub const COLUMNS: [&str; 5] = ["time", "duration", "word", "source", "choice"];

/// CSV header row
pub fn csv_header() -> String {
    COLUMNS.join(",")
}

/// Encode one interaction as a CSV row.
pub fn csv_row(row: &Interaction) -> String {
    [
        csv_field(&row.time),
        row.duration.to_string(),
        csv_field(&row.word),
        csv_field(&row.source),
        csv_field(&row.choice),
    ]
    .join(",")
}

/// Encode a full table as CSV, header included.
pub fn encode_csv(rows: &[Interaction]) -> String {
    let mut lines = vec![csv_header()];
    lines.extend(rows.iter().map(csv_row));
    lines.join("\n") + "\n"
}

/// Encode a table as newline-delimited JSON, one row per line.
pub fn encode_ndjson(rows: &[Interaction]) -> Result<String, PairError> {
    let mut lines: Vec<String> = Vec::with_capacity(rows.len());
    for row in rows {
        lines.push(serde_json::to_string(row)?);
    }
    Ok(lines.join("\n") + "\n")
}

/// Encode a table as a JSON array.
pub fn encode_json(rows: &[Interaction]) -> Result<String, PairError> {
    Ok(serde_json::to_string(rows)?)
}

/// Encode a table as a pretty-printed JSON array.
pub fn encode_json_pretty(rows: &[Interaction]) -> Result<String, PairError> {
    Ok(serde_json::to_string_pretty(rows)?)
}

/// Quote a field when it contains a comma, quote or line break.
fn csv_field(field: &str) -> String {
    if field.contains(&[',', '"', '\n', '\r'][..]) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(word: &str) -> Interaction {
        Interaction {
            time: "Thu Jan  1 00:00:01 1970".to_string(),
            duration: 500,
            word: word.to_string(),
            source: "3".to_string(),
            choice: "left".to_string(),
        }
    }

    #[test]
    fn test_csv_header() {
        assert_eq!(csv_header(), "time,duration,word,source,choice");
    }

    #[test]
    fn test_encode_csv() {
        let table = encode_csv(&[row("cat")]);
        assert_eq!(
            table,
            "time,duration,word,source,choice\nThu Jan  1 00:00:01 1970,500,cat,3,left\n"
        );
    }

    #[test]
    fn test_csv_quotes_embedded_commas_and_quotes() {
        let line = csv_row(&row(r#"open, "minded""#));
        assert_eq!(
            line,
            r#"Thu Jan  1 00:00:01 1970,500,"open, ""minded""",3,left"#
        );
    }

    #[test]
    fn test_encode_csv_header_only_when_empty() {
        assert_eq!(encode_csv(&[]), "time,duration,word,source,choice\n");
    }

    #[test]
    fn test_encode_ndjson() {
        let out = encode_ndjson(&[row("cat"), row("dog")]).unwrap();
        let lines: Vec<&str> = out.trim_end().lines().collect();

        assert_eq!(lines.len(), 2);
        let parsed: Interaction = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(parsed.word, "dog");
    }

    #[test]
    fn test_encode_json_array() {
        let out = encode_json(&[row("cat")]).unwrap();
        let parsed: Vec<Interaction> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].word, "cat");
    }
}
