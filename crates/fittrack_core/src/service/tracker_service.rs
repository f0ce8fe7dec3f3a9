//! Fitness-tracking use-case service.
//!
//! # Responsibility
//! - Provide stable add/tabulate/save/load entry points for front-ends.
//! - Delegate persistence to [`WorkoutStore`] implementations.
//!
//! # Invariants
//! - The service is stateless; the `User` is passed explicitly into every
//!   operation rather than held as session state.
//! - Store failures are logged as metadata-only events and propagated.

use crate::model::user::User;
use crate::model::workout::{Workout, WorkoutRow};
use crate::store::workout_store::{StoreResult, WorkoutStore};
use log::{error, info};
use std::path::Path;

/// Capability interface over one store implementation, consumed by every
/// presentation layer.
pub struct TrackerService<S: WorkoutStore> {
    store: S,
}

impl<S: WorkoutStore> TrackerService<S> {
    /// Creates a service using the provided store implementation.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Appends a validated workout to the user's log.
    pub fn add_workout(&self, user: &mut User, workout: Workout) {
        user.add_workout(workout);
    }

    /// Returns the workout-history table for display, one row per workout in
    /// entry order.
    pub fn workout_table(&self, user: &User) -> Vec<WorkoutRow> {
        user.workout_table()
    }

    /// Saves the user's full workout log to `path`.
    ///
    /// # Errors
    /// Propagates store failures unchanged; the in-memory log is never
    /// affected by a failed save.
    pub fn save_workouts(&self, user: &User, path: &Path) -> StoreResult<()> {
        match self.store.save(user, path) {
            Ok(()) => {
                info!(
                    "event=workouts_saved module=service status=ok count={} path={}",
                    user.workouts().len(),
                    path.display()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=workouts_saved module=service status=error path={} error={err}",
                    path.display()
                );
                Err(err)
            }
        }
    }

    /// Loads workouts from `path`, appending them after any already present.
    /// Returns the number of workouts appended.
    ///
    /// # Errors
    /// Propagates store failures unchanged; under the store's fail-fast
    /// contract a failed load leaves the log exactly as it was.
    pub fn load_workouts(&self, user: &mut User, path: &Path) -> StoreResult<usize> {
        match self.store.load(user, path) {
            Ok(appended) => {
                info!(
                    "event=workouts_loaded module=service status=ok count={appended} path={}",
                    path.display()
                );
                Ok(appended)
            }
            Err(err) => {
                error!(
                    "event=workouts_loaded module=service status=error path={} error={err}",
                    path.display()
                );
                Err(err)
            }
        }
    }
}
