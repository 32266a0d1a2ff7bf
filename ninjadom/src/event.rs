use std::sync::atomic::{AtomicU64, Ordering};

use crate::Document;

/// Input events with element targeting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Pointer moved onto an element. Does not bubble.
    PointerEnter { target: String },
    /// Pointer moved off an element. Does not bubble.
    PointerLeave { target: String },
    /// Click. `None` means the click landed outside every element.
    /// Bubbles from the target up to the root, then to the document.
    Click { target: Option<String> },
}

impl Event {
    pub fn pointer_enter(target: impl Into<String>) -> Self {
        Self::PointerEnter {
            target: target.into(),
        }
    }

    pub fn pointer_leave(target: impl Into<String>) -> Self {
        Self::PointerLeave {
            target: target.into(),
        }
    }

    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: Some(target.into()),
        }
    }

    pub fn click_outside() -> Self {
        Self::Click { target: None }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            Self::PointerEnter { .. } => EventKind::PointerEnter,
            Self::PointerLeave { .. } => EventKind::PointerLeave,
            Self::Click { .. } => EventKind::Click,
        }
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            Self::PointerEnter { target } | Self::PointerLeave { target } => Some(target),
            Self::Click { target } => target.as_deref(),
        }
    }

    pub fn bubbles(&self) -> bool {
        matches!(self, Self::Click { .. })
    }
}

/// Event type, used when subscribing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    PointerEnter,
    PointerLeave,
    Click,
}

/// Where a listener is attached.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ListenerTarget {
    Element(String),
    /// Document-level listener, reached last by bubbling events.
    Document,
}

impl ListenerTarget {
    pub fn element(id: impl Into<String>) -> Self {
        Self::Element(id.into())
    }
}

/// Unique identifier for a registered listener
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(u64);

impl ListenerId {
    pub(crate) fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "listener-{}", self.0)
    }
}

/// Listener callback. Receives the document so it can mutate the tree and
/// schedule timers while the event is being dispatched.
pub type Callback = Box<dyn FnMut(&mut Document, &Event) + Send>;

pub(crate) struct Listener {
    pub id: ListenerId,
    pub target: ListenerTarget,
    pub kind: EventKind,
    /// Taken out while the callback runs.
    pub callback: Option<Callback>,
}

impl std::fmt::Debug for Listener {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Listener")
            .field("id", &self.id)
            .field("target", &self.target)
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}
