//! Project domain model.
//!
//! # Responsibility
//! - Define the canonical project record rendered by list views.
//! - Provide the status tag used to split projects between views.
//!
//! # Invariants
//! - `id` is derived from the creation timestamp and never reused in-process.
//! - New projects always start as `ProjectStatus::Active`.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for one project.
///
/// UUID v7 embeds the creation timestamp, so identifiers sort by creation
/// order and stay unique within a process.
pub type ProjectId = Uuid;

/// Lifecycle state a project is filtered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// Work still in progress.
    Active,
    /// Work completed.
    Finished,
}

impl ProjectStatus {
    /// Lower-case tag used for element ids (`active`, `finished`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Finished => "finished",
        }
    }
}

impl Display for ProjectStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One project record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    /// Number of people assigned.
    pub people: u32,
    pub status: ProjectStatus,
}

impl Project {
    /// Creates an active project with a freshly generated identifier.
    ///
    /// Inputs are expected to be validated by the caller; construction
    /// itself cannot fail.
    pub fn new(title: impl Into<String>, description: impl Into<String>, people: u32) -> Self {
        Self {
            id: Uuid::now_v7(),
            title: title.into(),
            description: description.into(),
            people,
            status: ProjectStatus::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Project, ProjectStatus};

    #[test]
    fn new_project_starts_active() {
        let project = Project::new("Build X", "a sufficiently long description", 3);
        assert_eq!(project.status, ProjectStatus::Active);
        assert!(!project.id.is_nil());
    }

    #[test]
    fn status_display_is_lowercase_tag() {
        assert_eq!(ProjectStatus::Finished.to_string(), "finished");
    }
}
