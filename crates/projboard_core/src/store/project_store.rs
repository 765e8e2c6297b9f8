//! Observable project store.
//!
//! # Responsibility
//! - Accept project mutations and keep insertion order.
//! - Fan out a snapshot to every listener after each mutation.
//!
//! # Invariants
//! - Listeners run synchronously, in registration order, before the
//!   mutating call returns.
//! - Each listener receives its own copy of the collection; changing it
//!   never reaches store-internal state.
//! - A listener may call back into the store during notification; the
//!   nested change is broadcast after the current round, so every listener
//!   of one round receives identical content.

use crate::model::project::{Project, ProjectId, ProjectStatus};
use log::{debug, info};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Callback invoked with an owned snapshot of every project.
pub type Listener = Rc<dyn Fn(Vec<Project>)>;

/// Handle returned by `add_listener`, used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

thread_local! {
    static INSTANCE: Rc<ProjectStore> = ProjectStore::new();
}

/// Single shared container of projects.
///
/// Composition roots create one with [`ProjectStore::new`] and hand the `Rc`
/// to every view; [`ProjectStore::instance`] returns a lazily created
/// per-thread store for callers that do not inject one.
#[derive(Default)]
pub struct ProjectStore {
    projects: RefCell<Vec<Project>>,
    listeners: RefCell<Vec<(ListenerId, Listener)>>,
    next_listener_id: Cell<u64>,
    notifying: Cell<bool>,
    pending: Cell<bool>,
}

impl ProjectStore {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// Returns the shared store, creating it on first call.
    ///
    /// Every call on the same thread returns the same `Rc`.
    pub fn instance() -> Rc<Self> {
        INSTANCE.with(Rc::clone)
    }

    /// Registers a listener. Duplicates are not detected.
    pub fn add_listener(&self, listener: impl Fn(Vec<Project>) + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener_id.get());
        self.next_listener_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        debug!(
            "event=listener_added module=store listener_id={} total={}",
            id.0,
            self.listener_count()
        );
        id
    }

    /// Unregisters a listener. Returns `false` when the id is unknown.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        before != listeners.len()
    }

    /// Appends a new active project and notifies every listener.
    pub fn add_project(
        &self,
        title: impl Into<String>,
        description: impl Into<String>,
        people: u32,
    ) -> ProjectId {
        let project = Project::new(title, description, people);
        let id = project.id;
        self.projects.borrow_mut().push(project);
        info!("event=project_added module=store status=ok project_id={id}");
        self.notify();
        id
    }

    /// Changes a project's status and notifies listeners when it changed.
    pub fn move_project(&self, id: ProjectId, status: ProjectStatus) -> bool {
        let changed = {
            let mut projects = self.projects.borrow_mut();
            match projects.iter_mut().find(|project| project.id == id) {
                Some(project) if project.status != status => {
                    project.status = status;
                    true
                }
                _ => false,
            }
        };
        if changed {
            info!("event=project_moved module=store status=ok project_id={id} to={status}");
            self.notify();
        }
        changed
    }

    /// Returns a copy of every project in insertion order.
    pub fn projects(&self) -> Vec<Project> {
        self.projects.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.projects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.borrow().is_empty()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    fn notify(&self) {
        if self.notifying.get() {
            self.pending.set(true);
            return;
        }
        self.notifying.set(true);
        loop {
            self.pending.set(false);
            let listeners: Vec<Listener> = self
                .listeners
                .borrow()
                .iter()
                .map(|(_, listener)| Rc::clone(listener))
                .collect();
            let snapshot = self.projects();
            debug!(
                "event=store_notify module=store listeners={} projects={}",
                listeners.len(),
                snapshot.len()
            );
            for listener in listeners {
                listener(snapshot.clone());
            }
            if !self.pending.get() {
                break;
            }
        }
        self.notifying.set(false);
    }
}
