//! Status-filtered project list view.
//!
//! # Responsibility
//! - Subscribe to store snapshots and keep only projects of one status.
//! - Re-render the whole list surface on every snapshot.
//!
//! # Invariants
//! - Rendering is total: the list is cleared, then one row per retained
//!   project is appended in snapshot order.
//! - Header text and list id are set once, outside the reactive path.
//! - Dropping the view removes its store listener.

use crate::component::{activate, Component, ComponentBase, ComponentResult, MountSpec};
use crate::config::BoardLayout;
use crate::model::project::{Project, ProjectStatus};
use crate::store::project_store::{ListenerId, ProjectStore};
use crate::surface::{ContainerProvider, ElementRef, InsertPosition, TemplateProvider};
use log::debug;
use std::cell::RefCell;
use std::rc::Rc;

/// Render-only state shared with the store listener.
struct ListState {
    status: ProjectStatus,
    assigned: Vec<Project>,
    list: ElementRef,
}

impl ListState {
    fn apply_snapshot(&mut self, snapshot: Vec<Project>) {
        let status = self.status;
        self.assigned = snapshot
            .into_iter()
            .filter(|project| project.status == status)
            .collect();
        self.render_projects();
    }

    fn render_projects(&self) {
        self.list.clear_children();
        for project in &self.assigned {
            let row = ElementRef::new("li");
            row.set_text(project.title.clone());
            self.list.append_child(row);
        }
        debug!(
            "event=list_rendered module=view status={} rows={}",
            self.status,
            self.assigned.len()
        );
    }
}

/// List of projects with one status.
pub struct ProjectList {
    base: ComponentBase,
    store: Rc<ProjectStore>,
    state: Rc<RefCell<ListState>>,
    listener: Option<ListenerId>,
}

impl ProjectList {
    /// Mounts the list template at the end of the host and activates it.
    pub fn new<P>(
        status: ProjectStatus,
        store: Rc<ProjectStore>,
        provider: &P,
        layout: &BoardLayout,
    ) -> ComponentResult<Self>
    where
        P: TemplateProvider + ContainerProvider + ?Sized,
    {
        let spec = MountSpec::new(
            layout.list_template_id.as_str(),
            layout.host_id.as_str(),
            InsertPosition::AtEnd,
        )
        .with_element_id(format!("{status}-projects"));
        let base = ComponentBase::mount(&spec, provider)?;
        let list = base.require_by_tag("ul")?;

        activate(Self {
            base,
            store,
            state: Rc::new(RefCell::new(ListState {
                status,
                assigned: Vec::new(),
                list,
            })),
            listener: None,
        })
    }

    pub fn status(&self) -> ProjectStatus {
        self.state.borrow().status
    }

    /// Projects currently retained after filtering.
    pub fn assigned_projects(&self) -> Vec<Project> {
        self.state.borrow().assigned.clone()
    }

    /// Row texts currently rendered on the list surface.
    pub fn rendered_titles(&self) -> Vec<String> {
        self.state
            .borrow()
            .list
            .children()
            .iter()
            .map(ElementRef::text)
            .collect()
    }
}

impl Component for ProjectList {
    fn base(&self) -> &ComponentBase {
        &self.base
    }

    fn configure(&mut self) -> ComponentResult<()> {
        let state = Rc::downgrade(&self.state);
        let id = self.store.add_listener(move |snapshot| {
            if let Some(state) = state.upgrade() {
                state.borrow_mut().apply_snapshot(snapshot);
            }
        });
        self.listener = Some(id);
        Ok(())
    }

    fn render_content(&mut self) -> ComponentResult<()> {
        let state = self.state.borrow();
        state.list.set_id(format!("{}-projects-list", state.status));
        self.base
            .require_by_tag("h2")?
            .set_text(format!("{} PROJECTS", state.status.as_str().to_uppercase()));
        Ok(())
    }
}

impl Drop for ProjectList {
    fn drop(&mut self) {
        if let Some(id) = self.listener.take() {
            self.store.remove_listener(id);
        }
    }
}
