//! User profile and workout log.
//!
//! # Responsibility
//! - Own the append-only workout sequence for one profile.
//! - Provide the read-side table projection used for history display.
//!
//! # Invariants
//! - `workouts` only grows via [`User::add_workout`]; there is no edit or
//!   delete operation.
//! - Insertion order is entry order and is preserved end to end, including
//!   through save/load.

use crate::model::workout::{Workout, WorkoutRow};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation failure for a user profile field.
#[derive(Debug, Clone, PartialEq)]
pub enum UserValidationError {
    EmptyName,
    ZeroAge,
    /// Weight must be a positive, finite number of kilograms.
    NonPositiveWeight(f64),
}

impl Display for UserValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "user name must not be empty"),
            Self::ZeroAge => write!(f, "user age must be greater than zero"),
            Self::NonPositiveWeight(value) => {
                write!(f, "user weight `{value}` must be a positive number of kilograms")
            }
        }
    }
}

impl Error for UserValidationError {}

/// The profile owning a sequence of workout records.
///
/// Created once per session from validated input; owns its workout log
/// exclusively. Passed explicitly into every operation rather than held as
/// process-wide session state.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Display name, also the default filename stem for saved data.
    pub name: String,
    pub age: u32,
    pub weight_kg: f64,
    workouts: Vec<Workout>,
}

impl User {
    /// Creates a user profile after validating every field.
    ///
    /// # Errors
    /// - `EmptyName` when the name is blank.
    /// - `ZeroAge` when the age is zero.
    /// - `NonPositiveWeight` when the weight is zero, negative, or not finite.
    pub fn new(
        name: impl Into<String>,
        age: u32,
        weight_kg: f64,
    ) -> Result<Self, UserValidationError> {
        let name = name.into();

        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        if age == 0 {
            return Err(UserValidationError::ZeroAge);
        }
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(UserValidationError::NonPositiveWeight(weight_kg));
        }

        Ok(Self {
            name,
            age,
            weight_kg,
            workouts: Vec::new(),
        })
    }

    /// Appends one workout to the log.
    ///
    /// Field validation already happened when the `Workout` was constructed,
    /// so the append itself cannot fail.
    pub fn add_workout(&mut self, workout: Workout) {
        self.workouts.push(workout);
    }

    /// Returns the workout log in entry order.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// Produces the workout-history table: one row per workout, entry order,
    /// columns labeled per [`crate::model::workout::TABLE_HEADER`].
    pub fn workout_table(&self) -> Vec<WorkoutRow> {
        self.workouts.iter().map(WorkoutRow::from).collect()
    }

    /// Conventional data filename for this profile, `<name>_workouts.csv`.
    ///
    /// Front-ends may offer it as the default save target; any path is
    /// accepted by the store.
    pub fn default_data_filename(&self) -> String {
        format!("{}_workouts.csv", self.name)
    }
}
