//! Core of the project board: an observable project store, field validation
//! and the component lifecycle the form and list views are built on.

pub mod component;
pub mod config;
pub mod logging;
pub mod model;
pub mod store;
pub mod surface;
pub mod validation;
pub mod view;

pub use component::{
    activate, Component, ComponentBase, ComponentError, ComponentResult, MountSpec,
};
pub use config::{BoardLayout, ConfigError};
pub use logging::{default_log_level, init_logging, init_stderr_logging, logging_status, LogTarget};
pub use model::project::{Project, ProjectId, ProjectStatus};
pub use store::project_store::{Listener, ListenerId, ProjectStore};
pub use surface::{
    ContainerProvider, Document, ElementRef, Event, InsertPosition, Notifier, Template,
    TemplateProvider,
};
pub use validation::{coerce_number, validate, FieldValue, RuleSet};
pub use view::project_form::{ProjectDraft, ProjectInput, INVALID_INPUT_MESSAGE};
pub use view::project_list::ProjectList;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Registers the standard `project-input` and `project-list` templates and an
/// empty host container on `document`, following `layout`.
pub fn install_standard_markup(document: &mut Document, layout: &BoardLayout) {
    if document.get_element_by_id(&layout.host_id).is_none() {
        document
            .body()
            .append_child(ElementRef::new("div").with_id(layout.host_id.as_str()));
    }
    document.register_template(
        layout.input_template_id.as_str(),
        Template::single(
            ElementRef::new("form")
                .with_child(ElementRef::new("input").with_id(layout.title_input_id.as_str()))
                .with_child(
                    ElementRef::new("textarea").with_id(layout.description_input_id.as_str()),
                )
                .with_child(ElementRef::new("input").with_id(layout.people_input_id.as_str()))
                .with_child(ElementRef::new("button")),
        ),
    );
    document.register_template(
        layout.list_template_id.as_str(),
        Template::single(
            ElementRef::new("section")
                .with_child(ElementRef::new("header").with_child(ElementRef::new("h2")))
                .with_child(ElementRef::new("ul")),
        ),
    );
}
