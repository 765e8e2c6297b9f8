//! Shared, mutable element handles.

use crate::surface::InsertPosition;
use std::cell::RefCell;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// Callback subscribed to a named event.
pub type EventCallback = Rc<dyn Fn(&mut Event)>;

/// Event delivered to element listeners.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Event {
    default_prevented: bool,
}

impl Event {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppresses the event's default behavior.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

#[derive(Default)]
struct ElementData {
    tag: String,
    id: Option<String>,
    text: String,
    value: String,
    children: Vec<ElementRef>,
    listeners: Vec<(String, EventCallback)>,
}

/// Reference-counted handle to one element.
///
/// Clones share the same element; use [`ElementRef::deep_clone`] for an
/// independent copy.
#[derive(Clone)]
pub struct ElementRef(Rc<RefCell<ElementData>>);

impl ElementRef {
    pub fn new(tag: impl Into<String>) -> Self {
        Self(Rc::new(RefCell::new(ElementData {
            tag: tag.into(),
            ..ElementData::default()
        })))
    }

    /// Builder-style id assignment for constructing trees.
    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.set_id(id);
        self
    }

    /// Builder-style child append for constructing trees.
    pub fn with_child(self, child: ElementRef) -> Self {
        self.append_child(child);
        self
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn id(&self) -> Option<String> {
        self.0.borrow().id.clone()
    }

    pub fn set_id(&self, id: impl Into<String>) {
        self.0.borrow_mut().id = Some(id.into());
    }

    pub fn text(&self) -> String {
        self.0.borrow().text.clone()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        self.0.borrow_mut().text = text.into();
    }

    /// Current input value (meaningful for form fields).
    pub fn value(&self) -> String {
        self.0.borrow().value.clone()
    }

    pub fn set_value(&self, value: impl Into<String>) {
        self.0.borrow_mut().value = value.into();
    }

    pub fn children(&self) -> Vec<ElementRef> {
        self.0.borrow().children.clone()
    }

    pub fn child_count(&self) -> usize {
        self.0.borrow().children.len()
    }

    pub fn append_child(&self, child: ElementRef) {
        self.insert(InsertPosition::AtEnd, child);
    }

    pub fn insert(&self, position: InsertPosition, child: ElementRef) {
        let mut data = self.0.borrow_mut();
        match position {
            InsertPosition::AtStart => data.children.insert(0, child),
            InsertPosition::AtEnd => data.children.push(child),
        }
    }

    pub fn clear_children(&self) {
        self.0.borrow_mut().children.clear();
    }

    /// Copies this element and its whole subtree.
    ///
    /// Event listeners are not copied.
    pub fn deep_clone(&self) -> Self {
        let data = self.0.borrow();
        Self(Rc::new(RefCell::new(ElementData {
            tag: data.tag.clone(),
            id: data.id.clone(),
            text: data.text.clone(),
            value: data.value.clone(),
            children: data.children.iter().map(ElementRef::deep_clone).collect(),
            listeners: Vec::new(),
        })))
    }

    /// Finds this element or the first descendant with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<ElementRef> {
        self.find(&|element| element.id().as_deref() == Some(id))
    }

    /// Finds the first descendant (depth-first) with the given tag.
    pub fn find_by_tag(&self, tag: &str) -> Option<ElementRef> {
        self.children()
            .iter()
            .find_map(|child| child.find(&|element| element.0.borrow().tag == tag))
    }

    fn find(&self, predicate: &dyn Fn(&ElementRef) -> bool) -> Option<ElementRef> {
        if predicate(self) {
            return Some(self.clone());
        }
        self.children()
            .iter()
            .find_map(|child| child.find(predicate))
    }

    /// Subscribes `callback` to events named `name`.
    pub fn add_event_listener(
        &self,
        name: impl Into<String>,
        callback: impl Fn(&mut Event) + 'static,
    ) {
        self.0
            .borrow_mut()
            .listeners
            .push((name.into(), Rc::new(callback)));
    }

    /// Fires an event on this element and returns it after all listeners ran.
    pub fn dispatch(&self, name: &str) -> Event {
        let callbacks: Vec<EventCallback> = self
            .0
            .borrow()
            .listeners
            .iter()
            .filter(|(event_name, _)| event_name == name)
            .map(|(_, callback)| Rc::clone(callback))
            .collect();
        let mut event = Event::new();
        for callback in callbacks {
            callback(&mut event);
        }
        event
    }

    pub fn ptr_eq(&self, other: &ElementRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for ElementRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let data = self.0.borrow();
        f.debug_struct("ElementRef")
            .field("tag", &data.tag)
            .field("id", &data.id)
            .field("text", &data.text)
            .field("children", &data.children)
            .finish()
    }
}
