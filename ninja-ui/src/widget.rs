//! The contract every widget satisfies.

use std::sync::atomic::{AtomicUsize, Ordering};

use ninjadom::Document;

use crate::error::WidgetError;

/// Unique identifier for a widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WidgetId {
    kind: &'static str,
    serial: usize,
}

impl WidgetId {
    pub(crate) fn new(kind: &'static str) -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self {
            kind,
            serial: COUNTER.fetch_add(1, Ordering::SeqCst),
        }
    }

    /// Widget type name ("tabs", "snackbar", ...).
    pub fn kind(&self) -> &'static str {
        self.kind
    }
}

impl std::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__{}_{}", self.kind, self.serial)
    }
}

/// A discrete UI behaviour bound to zero or one target elements.
///
/// Widgets are constructed from an explicit target (or none) and wired to
/// the document by a single call to [`init`](Widget::init). There is no
/// teardown; a widget lives as long as its page.
pub trait Widget {
    fn id(&self) -> WidgetId;

    /// Widget type name, used in logs and errors.
    fn name(&self) -> &'static str {
        self.id().kind()
    }

    /// Create owned elements, bind listeners and establish initial state.
    ///
    /// Structural problems are reported before the document is touched.
    /// Calling `init` again returns [`WidgetError::AlreadyInitialized`].
    fn init(&mut self, doc: &mut Document) -> Result<(), WidgetError>;

    fn is_initialized(&self) -> bool;
}

pub(crate) fn already_initialized(id: WidgetId) -> WidgetError {
    WidgetError::AlreadyInitialized {
        widget: id.to_string(),
    }
}

pub(crate) fn not_initialized(id: WidgetId) -> WidgetError {
    WidgetError::NotInitialized {
        widget: id.to_string(),
    }
}

pub(crate) fn poisoned(id: WidgetId) -> WidgetError {
    WidgetError::Poisoned {
        widget: id.to_string(),
    }
}
