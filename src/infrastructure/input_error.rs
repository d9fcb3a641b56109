// Errors raised while reading, parsing or validating fleet input
use crate::domain::fleet::{ChargerId, StationId};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("missing section {0}")]
    MissingSection(&'static str),

    #[error("line {line}: expected a station id followed by charger ids, got {content:?}")]
    MalformedStation { line: usize, content: String },

    #[error("line {line}: expected `<charger> <start> <end> <up>`, got {content:?}")]
    MalformedReport { line: usize, content: String },

    #[error("line {line}: invalid number {value:?}")]
    InvalidNumber {
        line: usize,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("line {line}: availability must be true or false, got {value:?}")]
    InvalidAvailability { line: usize, value: String },

    #[error("line {line}: report start {start} is not before end {end}")]
    EmptyInterval { line: usize, start: u64, end: u64 },

    #[error("station {0} is listed more than once")]
    DuplicateStation(StationId),

    #[error("charger {0} is listed more than once")]
    DuplicateCharger(ChargerId),

    #[error("report references charger {0} which belongs to no station")]
    UnknownCharger(ChargerId),
}
