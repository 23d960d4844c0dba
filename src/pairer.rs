//! The event pairer
//!
//! Maintains per-word open/closed state across a stream of touch events and
//! emits one interaction per validly paired start/end. Ends that arrive too
//! soon after their start are vote stutter; ends that arrive much too late
//! belong to abandoned touches. Both close the word without emitting.

use std::collections::HashMap;

use crate::error::PairError;
use crate::schema::{decode_line, DecodedLine, TouchEvent};
use crate::types::{format_start_time, Interaction};

/// An end this close to its start (ms) is stutter, not an interaction
pub const STUTTER_MS: i64 = 200;

/// An interaction this long (ms) was abandoned, not completed
pub const OUTLIER_MS: i64 = 20_000;

/// Pairing state for one word.
///
/// Absence from the map is the third state: the word has never been
/// started this run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TouchState {
    /// A start arrived at this timestamp and no end has consumed it yet
    Open(i64),
    /// An end was already processed; further ends are swallowed until a
    /// new start reopens the word
    Closed,
}

/// Pairs start and end touch events per word across one pass of a log.
///
/// At most one word is `Open` per entry at any time. A word transitions
/// absent/closed → open on a start, open → closed on a processed end, and
/// stays closed through duplicate ends until the next start.
#[derive(Debug, Default)]
pub struct TouchPairer {
    touches: HashMap<String, TouchState>,
}

impl TouchPairer {
    /// Create a pairer with no open touches
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event, returning a completed interaction when a valid
    /// start/end pair closes.
    pub fn apply(&mut self, event: TouchEvent) -> Result<Option<Interaction>, PairError> {
        match event {
            TouchEvent::StartTouch { word, time } => {
                match self.touches.get(&word) {
                    // duplicate start while open: keep the original start time
                    Some(TouchState::Open(_)) => {}
                    _ => {
                        self.touches.insert(word, TouchState::Open(time));
                    }
                }
                Ok(None)
            }
            TouchEvent::EndTouch {
                word,
                time,
                source,
                choice,
            } => {
                let start = match self.touches.get(&word) {
                    Some(TouchState::Open(start)) => *start,
                    // never started, or already closed: swallow the end
                    _ => return Ok(None),
                };
                self.touches.insert(word.clone(), TouchState::Closed);

                let duration = time - start;
                if duration <= STUTTER_MS || duration >= OUTLIER_MS {
                    return Ok(None);
                }

                Ok(Some(Interaction {
                    time: format_start_time(start)?,
                    duration,
                    word,
                    source,
                    choice,
                }))
            }
        }
    }
}

/// Lazily pair raw log lines.
///
/// Yields one `Ok` per completed interaction and one `Err` per reportable
/// line, in input order. An `Err` never terminates the iterator; callers
/// report it and keep pulling. The input is consumed exactly once - build
/// a fresh iterator to reprocess a log.
pub fn pair_lines<I>(lines: I) -> PairedInteractions<I::IntoIter>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    PairedInteractions {
        pairer: TouchPairer::new(),
        lines: lines.into_iter(),
    }
}

/// Iterator returned by [`pair_lines`]
#[derive(Debug)]
pub struct PairedInteractions<I> {
    pairer: TouchPairer,
    lines: I,
}

impl<I> Iterator for PairedInteractions<I>
where
    I: Iterator,
    I::Item: AsRef<str>,
{
    type Item = Result<Interaction, PairError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = self.lines.next()?;
            let event = match decode_line(line.as_ref()) {
                Ok(DecodedLine::Event(event)) => event,
                Ok(DecodedLine::Ignored) => continue,
                Err(e) => return Some(Err(e)),
            };
            match self.pairer.apply(event) {
                Ok(Some(interaction)) => return Some(Ok(interaction)),
                Ok(None) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }
}
