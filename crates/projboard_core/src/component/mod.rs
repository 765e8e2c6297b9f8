//! Component lifecycle shared by every view.
//!
//! # Responsibility
//! - Instantiate a template fragment and attach it to its host container.
//! - Run the two extension points of a concrete component in a fixed order.
//!
//! # Invariants
//! - Mounting never trusts a lookup: missing templates, hosts or elements
//!   surface as `ComponentError`.
//! - `activate` calls `configure` first, then `render_content`, each once.

use crate::surface::{ContainerProvider, ElementRef, InsertPosition, TemplateProvider};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Collaborator-resolution failures raised while building a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentError {
    TemplateNotFound(String),
    ContainerNotFound(String),
    EmptyTemplate(String),
    ElementNotFound(String),
}

impl Display for ComponentError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TemplateNotFound(id) => write!(f, "template not found: {id}"),
            Self::ContainerNotFound(id) => write!(f, "host container not found: {id}"),
            Self::EmptyTemplate(id) => write!(f, "template has no root element: {id}"),
            Self::ElementNotFound(selector) => {
                write!(f, "element not found in fragment: {selector}")
            }
        }
    }
}

impl Error for ComponentError {}

pub type ComponentResult<T> = Result<T, ComponentError>;

/// Where and how a component's fragment is mounted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MountSpec {
    pub template_id: String,
    pub host_id: String,
    pub position: InsertPosition,
    /// Id assigned to the root of the instantiated fragment.
    pub element_id: Option<String>,
}

impl MountSpec {
    pub fn new(
        template_id: impl Into<String>,
        host_id: impl Into<String>,
        position: InsertPosition,
    ) -> Self {
        Self {
            template_id: template_id.into(),
            host_id: host_id.into(),
            position,
            element_id: None,
        }
    }

    pub fn with_element_id(mut self, element_id: impl Into<String>) -> Self {
        self.element_id = Some(element_id.into());
        self
    }
}

/// Mounted fragment state every component embeds.
#[derive(Debug, Clone)]
pub struct ComponentBase {
    element: ElementRef,
}

impl ComponentBase {
    /// Resolves template and host, clones the fragment root and attaches it.
    pub fn mount<P>(spec: &MountSpec, provider: &P) -> ComponentResult<Self>
    where
        P: TemplateProvider + ContainerProvider + ?Sized,
    {
        let template = provider
            .template(&spec.template_id)
            .ok_or_else(|| ComponentError::TemplateNotFound(spec.template_id.clone()))?;
        let host = provider
            .container(&spec.host_id)
            .ok_or_else(|| ComponentError::ContainerNotFound(spec.host_id.clone()))?;

        let element = template
            .first_element()
            .ok_or_else(|| ComponentError::EmptyTemplate(spec.template_id.clone()))?
            .deep_clone();
        if let Some(id) = &spec.element_id {
            element.set_id(id.clone());
        }
        host.insert(spec.position, element.clone());

        debug!(
            "event=component_mounted module=component template={} host={} element_id={}",
            spec.template_id,
            spec.host_id,
            spec.element_id.as_deref().unwrap_or("-")
        );
        Ok(Self { element })
    }

    /// Root of the instantiated fragment.
    pub fn element(&self) -> &ElementRef {
        &self.element
    }

    /// Looks up a descendant by id, failing with `ElementNotFound`.
    pub fn require_by_id(&self, id: &str) -> ComponentResult<ElementRef> {
        self.element
            .find_by_id(id)
            .ok_or_else(|| ComponentError::ElementNotFound(format!("#{id}")))
    }

    /// Looks up a descendant by tag, failing with `ElementNotFound`.
    pub fn require_by_tag(&self, tag: &str) -> ComponentResult<ElementRef> {
        self.element
            .find_by_tag(tag)
            .ok_or_else(|| ComponentError::ElementNotFound(tag.to_string()))
    }
}

/// Extension points implemented by concrete views.
pub trait Component {
    fn base(&self) -> &ComponentBase;

    /// Wires event and store subscriptions.
    fn configure(&mut self) -> ComponentResult<()>;

    /// Fills static, non-reactive content.
    fn render_content(&mut self) -> ComponentResult<()>;
}

/// Runs `configure` then `render_content` on a freshly mounted component.
pub fn activate<C: Component>(mut component: C) -> ComponentResult<C> {
    component.configure()?;
    component.render_content()?;
    Ok(component)
}
