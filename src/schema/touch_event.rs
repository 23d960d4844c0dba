//! Touch event record definitions
//!
//! Vote stations report one JSON record per log line, tagged by a `flavor`
//! field. Only the two touch flavors participate in pairing; the display
//! also logs `post`, `touch_beat` and `new_word` records, which the decoder
//! ignores.

use serde::{Deserialize, Serialize};

/// A touch event parsed from one log line, tagged by its `flavor` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "flavor", rename_all = "snake_case")]
pub enum TouchEvent {
    /// A finger landed on a word.
    StartTouch {
        word: String,
        /// Epoch milliseconds
        time: i64,
    },
    /// A finger lifted off a word.
    EndTouch {
        word: String,
        /// Epoch milliseconds
        time: i64,
        /// Vote station that registered the touch
        source: String,
        /// Side the voter chose
        choice: String,
    },
}

impl TouchEvent {
    /// Word this event belongs to
    pub fn word(&self) -> &str {
        match self {
            TouchEvent::StartTouch { word, .. } | TouchEvent::EndTouch { word, .. } => word,
        }
    }

    /// Event timestamp in epoch milliseconds
    pub fn time(&self) -> i64 {
        match self {
            TouchEvent::StartTouch { time, .. } | TouchEvent::EndTouch { time, .. } => *time,
        }
    }
}
