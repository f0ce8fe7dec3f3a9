//! Persistence adapters for the workout log.
//!
//! # Responsibility
//! - Convert the in-memory workout sequence to/from a flat file.
//! - Keep file-format details behind the [`workout_store::WorkoutStore`]
//!   trait so front-ends only see save/load semantics.
//!
//! # Invariants
//! - `save` writes the full current sequence, truncating the target.
//! - `load` is fail-fast: a malformed row aborts the whole load and leaves
//!   the target user untouched.

pub mod workout_store;
