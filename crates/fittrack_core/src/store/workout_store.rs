//! Workout store contract and CSV implementation.
//!
//! # Responsibility
//! - Provide stable save/load APIs over the persisted workout file.
//! - Keep CSV details inside the core persistence boundary.
//!
//! # Format
//! Tabular file with header: the first row carries the four human-readable
//! column labels (`Date`, `Exercise Type`, `Duration (min)`, `Calories
//! Burned`), followed by one CSV row per workout in log order. Standard CSV
//! quoting applies, so labels containing the delimiter survive a round trip.
//!
//! # Invariants
//! - Write paths always emit the header row, so saving an empty log yields a
//!   header-only file rather than an error.
//! - Read paths parse the entire file before mutating the target `User`; the
//!   first malformed row aborts the load with no partial append.

use crate::model::user::User;
use crate::model::workout::{Workout, WorkoutRow, WorkoutValidationError, TABLE_HEADER};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::path::Path;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure while persisting or reloading the workout file.
#[derive(Debug)]
pub enum StoreError {
    /// The path could not be opened, read, or written.
    Io(std::io::Error),
    /// A row did not match the expected layout (wrong column count, or a
    /// numeric column that is not an integer).
    Parse { line: u64, message: String },
    /// A row parsed cleanly but breaks a model invariant.
    Invalid {
        line: u64,
        source: WorkoutValidationError,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "workout file I/O failed: {err}"),
            Self::Parse { line, message } => {
                write!(f, "malformed workout row at line {line}: {message}")
            }
            Self::Invalid { line, source } => {
                write!(f, "invalid workout at line {line}: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Parse { .. } => None,
            Self::Invalid { source, .. } => Some(source),
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

/// Store interface for persisting and reloading a user's workout log.
pub trait WorkoutStore {
    /// Writes the user's full workout sequence to `path`, overwriting any
    /// existing content.
    fn save(&self, user: &User, path: &Path) -> StoreResult<()>;

    /// Reads `path` and appends every parsed workout to the user's log in
    /// file order, after whatever is already present. Returns the number of
    /// workouts appended.
    fn load(&self, user: &mut User, path: &Path) -> StoreResult<usize>;
}

/// CSV-backed workout store.
#[derive(Debug, Default)]
pub struct CsvWorkoutStore;

impl CsvWorkoutStore {
    pub fn new() -> Self {
        Self
    }
}

impl WorkoutStore for CsvWorkoutStore {
    fn save(&self, user: &User, path: &Path) -> StoreResult<()> {
        let file = File::create(path)?;
        // Header is written explicitly so that an empty log still produces a
        // header-only file instead of a zero-record writer emitting nothing.
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        writer
            .write_record(TABLE_HEADER)
            .map_err(|err| csv_error_to_store(err, 1))?;
        for (index, workout) in user.workouts().iter().enumerate() {
            writer
                .serialize(WorkoutRow::from(workout))
                .map_err(|err| csv_error_to_store(err, index as u64 + 2))?;
        }
        writer.flush()?;

        Ok(())
    }

    fn load(&self, user: &mut User, path: &Path) -> StoreResult<usize> {
        let file = File::open(path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(file);

        let headers = reader
            .headers()
            .map_err(|err| csv_error_to_store(err, 1))?
            .clone();

        // Parse everything up front; the user is only touched once the whole
        // file is known good (fail-fast, no partial state).
        let mut parsed: Vec<Workout> = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|err| csv_error_to_store(err, 0))?;
            let line = record.position().map_or(0, csv::Position::line);
            let row: WorkoutRow = record
                .deserialize(Some(&headers))
                .map_err(|err| csv_error_to_store(err, line))?;
            let workout =
                Workout::try_from(row).map_err(|source| StoreError::Invalid { line, source })?;
            parsed.push(workout);
        }

        let appended = parsed.len();
        for workout in parsed {
            user.add_workout(workout);
        }

        Ok(appended)
    }
}

/// Maps a `csv::Error` onto the store taxonomy: I/O failures stay I/O,
/// everything else is a parse failure at the best-known line.
fn csv_error_to_store(err: csv::Error, fallback_line: u64) -> StoreError {
    let line = err
        .position()
        .map_or(fallback_line, csv::Position::line);
    match err.into_kind() {
        csv::ErrorKind::Io(io_err) => StoreError::Io(io_err),
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => StoreError::Parse {
            line,
            message: format!("expected {expected_len} columns, found {len}"),
        },
        csv::ErrorKind::Deserialize { err, .. } => StoreError::Parse {
            line,
            message: err.to_string(),
        },
        csv::ErrorKind::Utf8 { .. } => StoreError::Parse {
            line,
            message: "row is not valid UTF-8".to_string(),
        },
        other => StoreError::Parse {
            line,
            message: format!("unreadable row: {other:?}"),
        },
    }
}
