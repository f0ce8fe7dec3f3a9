//! Domain model for the fitness-tracking core.
//!
//! # Responsibility
//! - Define the canonical `User` and `Workout` records shared by every
//!   front-end.
//! - Keep model invariants enforced at construction time.
//!
//! # Invariants
//! - A `Workout` never exists with empty or non-positive fields.
//! - A `User`'s workout log is append-only within a session.

pub mod user;
pub mod workout;
