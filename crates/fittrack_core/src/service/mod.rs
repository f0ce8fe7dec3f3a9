//! Use-case services exposed to front-ends.
//!
//! # Responsibility
//! - Provide the capability interface (add, tabulate, save, load) that both
//!   presentation layers consume.
//! - Delegate persistence to store implementations.
//!
//! # Invariants
//! - Services never bypass model validation or store contracts.
//! - Failures propagate to the caller; the service logs but never swallows.

pub mod tracker_service;
