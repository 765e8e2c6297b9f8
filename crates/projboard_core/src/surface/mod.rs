//! Render-surface contracts consumed by components.
//!
//! # Responsibility
//! - Declare the template, container and notice collaborators views depend on.
//! - Provide an in-memory element tree implementing those contracts.
//!
//! # Invariants
//! - Lookups return `None` on absence; turning that into an error is the
//!   caller's job (see `crate::component::ComponentError`).
//! - Event callbacks run synchronously inside `ElementRef::dispatch`.

pub mod document;
pub mod element;

pub use document::{Document, Template};
pub use element::{ElementRef, Event, EventCallback};

/// Where a mounted fragment goes among the host's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertPosition {
    /// Before the first existing child.
    AtStart,
    /// After the last existing child.
    AtEnd,
}

/// Resolves template fragments by id.
pub trait TemplateProvider {
    fn template(&self, id: &str) -> Option<Template>;
}

/// Resolves host containers by id.
pub trait ContainerProvider {
    fn container(&self, id: &str) -> Option<ElementRef>;
}

/// Blocking, user-visible notice surface.
pub trait Notifier {
    fn alert(&self, message: &str);
}
