//! Core domain logic for FitTrack.
//! This crate is the single source of truth for business invariants; both
//! presentation layers consume it through the same capability interface.

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::user::{User, UserValidationError};
pub use model::workout::{Workout, WorkoutRow, WorkoutValidationError, TABLE_HEADER};
pub use service::tracker_service::TrackerService;
pub use store::workout_store::{CsvWorkoutStore, StoreError, StoreResult, WorkoutStore};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
