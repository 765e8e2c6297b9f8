//! Project input form.
//!
//! # Responsibility
//! - Read raw title/description/people input on submit.
//! - Validate it and commit valid input to the shared store.
//!
//! # Invariants
//! - The submit handler suppresses the default action before anything else.
//! - Rejected input is left untouched and never reaches the store.
//! - The handler always runs against the form that registered it.

use crate::component::{activate, Component, ComponentBase, ComponentResult, MountSpec};
use crate::config::BoardLayout;
use crate::store::project_store::ProjectStore;
use crate::surface::{
    ContainerProvider, ElementRef, Event, InsertPosition, Notifier, TemplateProvider,
};
use crate::validation::{coerce_number, validate, FieldValue, RuleSet};
use log::{info, warn};
use std::rc::Rc;

/// Notice shown when any field fails validation.
pub const INVALID_INPUT_MESSAGE: &str = "Please enter valid input values";

/// Validated form input ready to be committed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Form state captured by the submit handler.
struct FormState {
    title_input: ElementRef,
    description_input: ElementRef,
    people_input: ElementRef,
    store: Rc<ProjectStore>,
    notifier: Rc<dyn Notifier>,
}

impl FormState {
    fn handle_submit(&self, event: &mut Event) {
        event.prevent_default();
        let Some(draft) = self.gather_input() else {
            warn!("event=form_submit module=view status=rejected");
            self.notifier.alert(INVALID_INPUT_MESSAGE);
            return;
        };

        let id = self
            .store
            .add_project(draft.title, draft.description, draft.people);
        info!("event=form_submit module=view status=ok project_id={id}");
        self.clear_inputs();
    }

    fn gather_input(&self) -> Option<ProjectDraft> {
        let title = self.title_input.value();
        let description = self.description_input.value();
        let people = coerce_number(&self.people_input.value());

        let title_valid = validate(&FieldValue::text(title.as_str()), &RuleSet::new().required());
        let description_valid = validate(
            &FieldValue::text(description.as_str()),
            &RuleSet::new().required().min_length(5),
        );
        let people_valid = validate(
            &FieldValue::number(people),
            &RuleSet::new().required().min(1.0).max(5.0),
        );

        if !(title_valid && description_valid && people_valid) {
            return None;
        }
        Some(ProjectDraft {
            title,
            description,
            // Bounds already checked; fractional counts are truncated.
            people: people as u32,
        })
    }

    fn clear_inputs(&self) {
        self.title_input.set_value("");
        self.description_input.set_value("");
        self.people_input.set_value("");
    }
}

/// Form that creates projects in the shared store.
pub struct ProjectInput {
    base: ComponentBase,
    state: Rc<FormState>,
}

impl ProjectInput {
    /// Mounts the input template at the start of the host and activates it.
    pub fn new<P>(
        store: Rc<ProjectStore>,
        notifier: Rc<dyn Notifier>,
        provider: &P,
        layout: &BoardLayout,
    ) -> ComponentResult<Self>
    where
        P: TemplateProvider + ContainerProvider + ?Sized,
    {
        let spec = MountSpec::new(
            layout.input_template_id.as_str(),
            layout.host_id.as_str(),
            InsertPosition::AtStart,
        )
        .with_element_id(layout.form_element_id.as_str());
        let base = ComponentBase::mount(&spec, provider)?;

        let state = Rc::new(FormState {
            title_input: base.require_by_id(&layout.title_input_id)?,
            description_input: base.require_by_id(&layout.description_input_id)?,
            people_input: base.require_by_id(&layout.people_input_id)?,
            store,
            notifier,
        });
        activate(Self { base, state })
    }

    pub fn title_input(&self) -> &ElementRef {
        &self.state.title_input
    }

    pub fn description_input(&self) -> &ElementRef {
        &self.state.description_input
    }

    pub fn people_input(&self) -> &ElementRef {
        &self.state.people_input
    }

    /// Fills all three fields with raw text.
    pub fn fill(&self, title: &str, description: &str, people: &str) {
        self.state.title_input.set_value(title);
        self.state.description_input.set_value(description);
        self.state.people_input.set_value(people);
    }

    /// Fires the form's submit event and returns it after handling.
    pub fn submit(&self) -> Event {
        self.base.element().dispatch("submit")
    }
}

impl Component for ProjectInput {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn configure(&mut self) -> ComponentResult<()> {
        let state = Rc::clone(&self.state);
        self.base
            .element()
            .add_event_listener("submit", move |event| state.handle_submit(event));
        Ok(())
    }

    fn render_content(&mut self) -> ComponentResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{ProjectInput, INVALID_INPUT_MESSAGE};
    use crate::config::BoardLayout;
    use crate::store::project_store::ProjectStore;
    use crate::surface::{Document, ElementRef, Notifier, Template};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct RecordingNotifier {
        messages: RefCell<Vec<String>>,
    }

    impl Notifier for RecordingNotifier {
        fn alert(&self, message: &str) {
            self.messages.borrow_mut().push(message.to_string());
        }
    }

    fn document() -> Document {
        let mut document = Document::new();
        document.body().append_child(ElementRef::new("div").with_id("app"));
        document.register_template(
            "project-input",
            Template::single(
                ElementRef::new("form")
                    .with_child(ElementRef::new("input").with_id("title"))
                    .with_child(ElementRef::new("textarea").with_id("description"))
                    .with_child(ElementRef::new("input").with_id("people")),
            ),
        );
        document
    }

    #[test]
    fn fractional_people_count_is_truncated() {
        let document = document();
        let store = ProjectStore::new();
        let form = ProjectInput::new(
            store.clone(),
            Rc::new(RecordingNotifier::default()),
            &document,
            &BoardLayout::default(),
        )
        .expect("form");

        form.fill("Plan", "long enough", " 2.7 ");
        assert!(form.submit().default_prevented());
        assert_eq!(store.projects()[0].people, 2);
    }

    #[test]
    fn blank_people_count_is_rejected() {
        let document = document();
        let store = ProjectStore::new();
        let notifier = Rc::new(RecordingNotifier::default());
        let form = ProjectInput::new(
            store.clone(),
            notifier.clone(),
            &document,
            &BoardLayout::default(),
        )
        .expect("form");

        form.fill("Plan", "long enough", "");
        form.submit();

        assert!(store.is_empty());
        assert_eq!(*notifier.messages.borrow(), vec![INVALID_INPUT_MESSAGE.to_string()]);
    }

    #[test]
    fn missing_input_fails_construction() {
        let mut document = document();
        document.register_template(
            "project-input",
            Template::single(
                ElementRef::new("form").with_child(ElementRef::new("input").with_id("title")),
            ),
        );
        let err = ProjectInput::new(
            ProjectStore::new(),
            Rc::new(RecordingNotifier::default()),
            &document,
            &BoardLayout::default(),
        )
        .err()
        .expect("missing description input");
        assert_eq!(err.to_string(), "element not found in fragment: #description");
    }
}
