//! Wordlog - pairs word-touch log events into interaction durations
//!
//! An interactive word display logs voter touches as newline-delimited JSON
//! records, one per line. Wordlog replays such a log through a single-pass
//! pipeline: line decode → per-word start/end pairing → stutter and outlier
//! filtering → tabular output, one row per completed interaction.
//!
//! ## Modules
//!
//! - **schema**: input record schema and line decoding
//! - **pairer**: the per-word open/closed state machine and lazy pairing iterator
//! - **pipeline**: batch entry point over a whole log
//! - **encoder**: CSV / NDJSON / JSON table encoding

pub mod encoder;
pub mod error;
pub mod pairer;
pub mod pipeline;
pub mod schema;
pub mod types;

pub use error::PairError;
pub use pairer::{pair_lines, PairedInteractions, TouchPairer, OUTLIER_MS, STUTTER_MS};
pub use pipeline::{pair_log, PairReport};

// Schema exports
pub use schema::{decode_line, DecodedLine, TouchEvent};
pub use types::Interaction;

/// Wordlog version reported by the CLI
pub const WORDLOG_VERSION: &str = env!("CARGO_PKG_VERSION");
