//! Shared project state.
//!
//! # Responsibility
//! - Own the project collection and broadcast snapshots on change.
//!
//! # See also
//! - `crate::view` for the subscribers.

pub mod project_store;
