//! In-memory document: template registry plus a body tree.

use crate::surface::{ContainerProvider, ElementRef, TemplateProvider};
use std::collections::BTreeMap;

/// Cloneable markup skeleton.
#[derive(Debug, Clone)]
pub struct Template {
    content: Vec<ElementRef>,
}

impl Template {
    pub fn new(content: Vec<ElementRef>) -> Self {
        Self { content }
    }

    /// Template with a single root element.
    pub fn single(root: ElementRef) -> Self {
        Self::new(vec![root])
    }

    /// Root element of the fragment, if any.
    pub fn first_element(&self) -> Option<&ElementRef> {
        self.content.first()
    }
}

/// Document holding registered templates and a `body` element tree.
#[derive(Debug)]
pub struct Document {
    templates: BTreeMap<String, Template>,
    body: ElementRef,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            templates: BTreeMap::new(),
            body: ElementRef::new("body"),
        }
    }

    pub fn body(&self) -> &ElementRef {
        &self.body
    }

    /// Registers (or replaces) a template under `id`.
    pub fn register_template(&mut self, id: impl Into<String>, template: Template) {
        self.templates.insert(id.into(), template);
    }

    pub fn get_element_by_id(&self, id: &str) -> Option<ElementRef> {
        self.body.find_by_id(id)
    }
}

impl TemplateProvider for Document {
    fn template(&self, id: &str) -> Option<Template> {
        self.templates.get(id).cloned()
    }
}

impl ContainerProvider for Document {
    fn container(&self, id: &str) -> Option<ElementRef> {
        self.get_element_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::{Document, Template};
    use crate::surface::{ContainerProvider, ElementRef, TemplateProvider};

    #[test]
    fn resolves_registered_templates_and_containers() {
        let mut document = Document::new();
        document.body().append_child(ElementRef::new("div").with_id("app"));
        document.register_template("project-input", Template::single(ElementRef::new("form")));

        assert!(document.template("project-input").is_some());
        assert!(document.template("missing").is_none());
        assert_eq!(document.container("app").expect("host").tag(), "div");
        assert!(document.container("nowhere").is_none());
    }
}
