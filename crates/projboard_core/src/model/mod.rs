//! Project domain model.
//!
//! # Responsibility
//! - Define the record shared by the form producer and the list projections.
//!
//! # Invariants
//! - Every project is identified by a time-ordered `ProjectId`.
//! - Status is the only field that changes after creation.

pub mod project;
