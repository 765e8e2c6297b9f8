//! Concrete views built on the component lifecycle.
//!
//! # Responsibility
//! - `ProjectInput` produces projects from form input.
//! - `ProjectList` projects store snapshots filtered by status.
//!
//! # Invariants
//! - Views share one injected `ProjectStore`; none keeps its own copy of
//!   the collection beyond a render-only filtered list.

pub mod project_form;
pub mod project_list;
