//! Workout domain model.
//!
//! # Responsibility
//! - Define the immutable workout record owned by a `User`.
//! - Provide the tabular row projection shared by display and persistence.
//!
//! # Invariants
//! - `date` keeps the textual `YYYY-MM-DD` shape.
//! - `exercise_type` is never empty.
//! - `duration_min` and `calories_burned` are strictly positive.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Human-readable column labels, in canonical field order.
///
/// Shared by the display projection and the persisted CSV header.
pub const TABLE_HEADER: [&str; 4] = ["Date", "Exercise Type", "Duration (min)", "Calories Burned"];

/// Validation failure for a single workout field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkoutValidationError {
    EmptyDate,
    /// Date text does not match the `YYYY-MM-DD` shape.
    MalformedDate(String),
    EmptyExerciseType,
    ZeroDuration,
    ZeroCalories,
}

impl Display for WorkoutValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDate => write!(f, "workout date must not be empty"),
            Self::MalformedDate(text) => {
                write!(f, "workout date `{text}` does not match YYYY-MM-DD")
            }
            Self::EmptyExerciseType => write!(f, "exercise type must not be empty"),
            Self::ZeroDuration => write!(f, "workout duration must be greater than zero"),
            Self::ZeroCalories => write!(f, "calories burned must be greater than zero"),
        }
    }
}

impl Error for WorkoutValidationError {}

/// One logged exercise session.
///
/// Immutable value record: constructed once (by user entry or by reload from
/// file) and never edited afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workout {
    /// Calendar date in textual `YYYY-MM-DD` form.
    pub date: String,
    /// Free-form exercise label, e.g. `Run` or `Swim`.
    pub exercise_type: String,
    /// Session length in whole minutes.
    pub duration_min: u32,
    /// Estimated energy burned over the session.
    pub calories_burned: u32,
}

impl Workout {
    /// Creates a workout after validating every field.
    ///
    /// # Errors
    /// - `EmptyDate` / `MalformedDate` when the date is absent or not shaped
    ///   `YYYY-MM-DD` (the date is shape-checked, not calendar-validated).
    /// - `EmptyExerciseType` when the label is blank.
    /// - `ZeroDuration` / `ZeroCalories` when a numeric field is zero. Zero
    ///   calories are rejected here and on reload alike.
    pub fn new(
        date: impl Into<String>,
        exercise_type: impl Into<String>,
        duration_min: u32,
        calories_burned: u32,
    ) -> Result<Self, WorkoutValidationError> {
        let date = date.into();
        let exercise_type = exercise_type.into();

        if date.trim().is_empty() {
            return Err(WorkoutValidationError::EmptyDate);
        }
        if !is_iso_date_shaped(&date) {
            return Err(WorkoutValidationError::MalformedDate(date));
        }
        if exercise_type.trim().is_empty() {
            return Err(WorkoutValidationError::EmptyExerciseType);
        }
        if duration_min == 0 {
            return Err(WorkoutValidationError::ZeroDuration);
        }
        if calories_burned == 0 {
            return Err(WorkoutValidationError::ZeroCalories);
        }

        Ok(Self {
            date,
            exercise_type,
            duration_min,
            calories_burned,
        })
    }
}

/// Checks the `YYYY-MM-DD` shape: ten chars, digits split by dashes.
fn is_iso_date_shaped(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| matches!(i, 4 | 7) || b.is_ascii_digit())
}

/// Display/persistence projection of one workout.
///
/// Field names are serialized under the human-readable labels in
/// [`TABLE_HEADER`], so the same shape backs both the workout-history table
/// and the persisted CSV rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRow {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Exercise Type")]
    pub exercise_type: String,
    #[serde(rename = "Duration (min)")]
    pub duration_min: u32,
    #[serde(rename = "Calories Burned")]
    pub calories_burned: u32,
}

impl From<&Workout> for WorkoutRow {
    fn from(workout: &Workout) -> Self {
        Self {
            date: workout.date.clone(),
            exercise_type: workout.exercise_type.clone(),
            duration_min: workout.duration_min,
            calories_burned: workout.calories_burned,
        }
    }
}

impl TryFrom<WorkoutRow> for Workout {
    type Error = WorkoutValidationError;

    /// Re-validates on the way back in, so reloaded rows honor the same
    /// invariants as user-entered workouts.
    fn try_from(row: WorkoutRow) -> Result<Self, Self::Error> {
        Workout::new(row.date, row.exercise_type, row.duration_min, row.calories_burned)
    }
}
