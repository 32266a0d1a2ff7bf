use std::time::Duration;

use log::trace;

use crate::element::{find_element, find_element_mut, path_to, Content, Element};
use crate::error::DomError;
use crate::event::{Callback, Event, EventKind, Listener, ListenerId, ListenerTarget};
use crate::timer::{TimerCallback, TimerId, Timers};

/// ID given to the root element of [`Document::default`].
pub const BODY_ID: &str = "body";

/// An element tree plus the listeners bound to it and the timers scheduled
/// against it.
///
/// All mutation goes through the document so that listeners and timer
/// callbacks, which receive `&mut Document`, observe a consistent tree.
#[derive(Debug)]
pub struct Document {
    root: Element,
    listeners: Vec<Listener>,
    timers: Timers,
}

impl Default for Document {
    fn default() -> Self {
        Self::new(Element::box_().id(BODY_ID).tag("body"))
    }
}

impl Document {
    /// Create a document whose body is `root`.
    pub fn new(root: Element) -> Self {
        Self {
            root,
            listeners: Vec::new(),
            timers: Timers::default(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn body_id(&self) -> &str {
        &self.root.id
    }

    // -------------------------------------------------------------------------
    // Tree access
    // -------------------------------------------------------------------------

    pub fn exists(&self, id: &str) -> bool {
        find_element(&self.root, id).is_some()
    }

    pub fn element(&self, id: &str) -> Result<&Element, DomError> {
        find_element(&self.root, id).ok_or_else(|| DomError::NotFound(id.to_string()))
    }

    pub fn element_mut(&mut self, id: &str) -> Result<&mut Element, DomError> {
        find_element_mut(&mut self.root, id).ok_or_else(|| DomError::NotFound(id.to_string()))
    }

    /// Read an attribute. The outer error is a missing element, the inner
    /// `None` a missing attribute.
    pub fn attr(&self, id: &str, name: &str) -> Result<Option<&str>, DomError> {
        Ok(self.element(id)?.get_attr(name))
    }

    pub fn has_class(&self, id: &str, class: &str) -> Result<bool, DomError> {
        Ok(self.element(id)?.has_class(class))
    }

    pub fn is_hidden(&self, id: &str) -> Result<bool, DomError> {
        Ok(self.element(id)?.is_hidden())
    }

    pub fn text_content(&self, id: &str) -> Result<String, DomError> {
        Ok(self.element(id)?.text_content())
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    pub fn add_class(&mut self, id: &str, class: &str) -> Result<bool, DomError> {
        Ok(self.element_mut(id)?.add_class(class))
    }

    pub fn remove_class(&mut self, id: &str, class: &str) -> Result<bool, DomError> {
        Ok(self.element_mut(id)?.remove_class(class))
    }

    pub fn toggle_class(&mut self, id: &str, class: &str) -> Result<bool, DomError> {
        Ok(self.element_mut(id)?.toggle_class(class))
    }

    pub fn set_hidden(&mut self, id: &str, hidden: bool) -> Result<(), DomError> {
        self.element_mut(id)?.set_hidden(hidden);
        Ok(())
    }

    pub fn set_text(&mut self, id: &str, text: impl Into<String>) -> Result<(), DomError> {
        self.element_mut(id)?.set_text(text);
        Ok(())
    }

    /// Insert `child` as the last child of `parent`.
    ///
    /// Fails without modifying the tree if any ID in the new subtree is
    /// already present in the document.
    pub fn append_child(&mut self, parent: &str, child: Element) -> Result<(), DomError> {
        if let Some(duplicate) = first_duplicate(&self.root, &child) {
            return Err(DomError::DuplicateId(duplicate));
        }
        self.element_mut(parent)?.append_child(child);
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Subscribe `callback` to events of `kind` at `target`.
    pub fn add_listener(
        &mut self,
        target: ListenerTarget,
        kind: EventKind,
        callback: impl FnMut(&mut Document, &Event) + Send + 'static,
    ) -> ListenerId {
        let id = ListenerId::new();
        trace!("Listener {id} added for {kind:?} on {target:?}");
        self.listeners.push(Listener {
            id,
            target,
            kind,
            callback: Some(Box::new(callback)),
        });
        id
    }

    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|listener| listener.id != id);
        self.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver `event` to its listeners. Returns how many callbacks ran.
    ///
    /// Clicks visit the target, then each ancestor up to the root, then
    /// document-level listeners. Pointer events only reach the exact target.
    /// The set of listeners is fixed when dispatch starts.
    pub fn dispatch(&mut self, event: Event) -> Result<usize, DomError> {
        let kind = event.kind();

        let mut route: Vec<ListenerTarget> = match event.target() {
            Some(id) => {
                let path =
                    path_to(&self.root, id).ok_or_else(|| DomError::NotFound(id.to_string()))?;
                if event.bubbles() {
                    path.into_iter().rev().map(ListenerTarget::Element).collect()
                } else {
                    vec![ListenerTarget::Element(id.to_string())]
                }
            }
            None => Vec::new(),
        };
        if event.bubbles() {
            route.push(ListenerTarget::Document);
        }

        let scheduled: Vec<ListenerId> = route
            .iter()
            .flat_map(|target| {
                self.listeners
                    .iter()
                    .filter(move |listener| listener.kind == kind && &listener.target == target)
                    .map(|listener| listener.id)
            })
            .collect();

        trace!("Dispatching {event:?} to {} listener(s)", scheduled.len());

        let mut fired = 0;
        for id in scheduled {
            // Removed by an earlier callback in this dispatch.
            let Some(mut callback) = self.take_callback(id) else {
                continue;
            };
            callback(self, &event);
            self.restore_callback(id, callback);
            fired += 1;
        }
        Ok(fired)
    }

    fn take_callback(&mut self, id: ListenerId) -> Option<Callback> {
        self.listeners
            .iter_mut()
            .find(|listener| listener.id == id)
            .and_then(|listener| listener.callback.take())
    }

    fn restore_callback(&mut self, id: ListenerId, callback: Callback) {
        if let Some(listener) = self.listeners.iter_mut().find(|listener| listener.id == id) {
            listener.callback = Some(callback);
        }
    }

    // -------------------------------------------------------------------------
    // Timers
    // -------------------------------------------------------------------------

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.timers.now()
    }

    /// Run `callback` once `delay` has elapsed on the document clock.
    pub fn set_timeout(
        &mut self,
        delay: Duration,
        callback: impl FnOnce(&mut Document) + Send + 'static,
    ) -> TimerId {
        let boxed: TimerCallback = Box::new(callback);
        let id = self.timers.schedule(delay, boxed);
        trace!("Scheduled {id} in {delay:?}");
        id
    }

    /// Cancel a pending timer. Returns false if it already fired or was
    /// cancelled before.
    pub fn clear_timeout(&mut self, id: TimerId) -> bool {
        let cancelled = self.timers.cancel(id);
        if cancelled {
            trace!("Cancelled {id}");
        }
        cancelled
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.timers.is_pending(id)
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Move the clock forward by `by`, firing every timer that falls due.
    ///
    /// Timers fire in deadline order and see `now()` equal to their own
    /// deadline. Timers scheduled by a callback that fall due inside the
    /// window fire in the same call. Returns how many fired.
    ///
    /// The clock stops at `Duration::MAX` instead of overflowing.
    pub fn advance(&mut self, by: Duration) -> usize {
        let until = self.timers.now().saturating_add(by);
        let mut fired = 0;
        while let Some((id, callback)) = self.timers.pop_due(until) {
            trace!("Firing {id} at {:?}", self.timers.now());
            callback(self);
            fired += 1;
        }
        self.timers.set_now(until);
        fired
    }
}

fn first_duplicate(root: &Element, subtree: &Element) -> Option<String> {
    if find_element(root, &subtree.id).is_some() {
        return Some(subtree.id.clone());
    }
    if let Content::Children(children) = &subtree.content {
        for child in children {
            if let Some(duplicate) = first_duplicate(root, child) {
                return Some(duplicate);
            }
        }
    }
    None
}
