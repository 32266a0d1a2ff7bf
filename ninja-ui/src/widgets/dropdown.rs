//! Dropdown widget.
//!
//! Clicking the trigger toggles the open class on the container. Closing on
//! outside clicks is opt-in through
//! [`DropdownConfig::dismiss_on_outside_click`](crate::config::DropdownConfig).

use std::sync::{Arc, RwLock};

use log::{debug, trace, warn};
use ninjadom::{Document, Event, EventKind, ListenerTarget, contains};

use crate::config::UiConfig;
use crate::error::WidgetError;
use crate::parts::DropdownParts;
use crate::widget::{Widget, WidgetId, already_initialized, not_initialized, poisoned};

#[derive(Debug, Default)]
struct DropdownInner {
    open: bool,
    initialized: bool,
}

/// A click-toggled menu.
#[derive(Debug)]
pub struct Dropdown {
    id: WidgetId,
    parts: Arc<DropdownParts>,
    open_class: Arc<str>,
    dismiss_on_outside_click: bool,
    inner: Arc<RwLock<DropdownInner>>,
}

impl Dropdown {
    pub fn new(parts: DropdownParts, config: &UiConfig) -> Self {
        Self {
            id: WidgetId::new("dropdown"),
            parts: Arc::new(parts),
            open_class: Arc::from(config.open_class.as_str()),
            dismiss_on_outside_click: config.dropdown.dismiss_on_outside_click,
            inner: Arc::new(RwLock::new(DropdownInner::default())),
        }
    }

    pub fn parts(&self) -> &DropdownParts {
        &self.parts
    }

    pub fn is_open(&self) -> bool {
        self.inner.read().map(|guard| guard.open).unwrap_or(false)
    }

    pub fn open(&self, doc: &mut Document) -> Result<bool, WidgetError> {
        self.set_open(doc, true)
    }

    pub fn close(&self, doc: &mut Document) -> Result<bool, WidgetError> {
        self.set_open(doc, false)
    }

    /// Flip the open state. Returns the new state.
    pub fn toggle(&self, doc: &mut Document) -> Result<bool, WidgetError> {
        let open = !self.is_open();
        self.set_open(doc, open)?;
        Ok(open)
    }

    /// Returns false if the dropdown was already in the requested state.
    fn set_open(&self, doc: &mut Document, open: bool) -> Result<bool, WidgetError> {
        if !self.is_initialized() {
            return Err(not_initialized(self.id));
        }
        apply_open(doc, self.id, &self.parts, &self.open_class, &self.inner, open)
    }
}

impl Widget for Dropdown {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn init(&mut self, doc: &mut Document) -> Result<(), WidgetError> {
        if self.is_initialized() {
            return Err(already_initialized(self.id));
        }
        self.parts.validate(doc)?;

        // Markup may start out open
        let open = doc.has_class(&self.parts.container, &self.open_class)?;

        {
            let parts = Arc::clone(&self.parts);
            let class = Arc::clone(&self.open_class);
            let inner = Arc::clone(&self.inner);
            let id = self.id;
            doc.add_listener(
                ListenerTarget::element(self.parts.trigger.as_str()),
                EventKind::Click,
                move |doc, _event| {
                    let open = inner.read().map(|guard| !guard.open).unwrap_or(true);
                    if let Err(e) = apply_open(doc, id, &parts, &class, &inner, open) {
                        warn!("{id}: failed to toggle: {e}");
                    }
                },
            );
        }

        if self.dismiss_on_outside_click {
            let parts = Arc::clone(&self.parts);
            let class = Arc::clone(&self.open_class);
            let inner = Arc::clone(&self.inner);
            let id = self.id;
            doc.add_listener(
                ListenerTarget::Document,
                EventKind::Click,
                move |doc, event: &Event| {
                    let inside = event
                        .target()
                        .is_some_and(|target| contains(doc.root(), &parts.container, target));
                    if inside {
                        return;
                    }
                    trace!("{id}: click outside '{}'", parts.container);
                    if let Err(e) = apply_open(doc, id, &parts, &class, &inner, false) {
                        warn!("{id}: failed to dismiss: {e}");
                    }
                },
            );
        }

        if let Ok(mut guard) = self.inner.write() {
            guard.open = open;
            guard.initialized = true;
        }
        debug!(
            "{}: initialized on '{}' (outside dismissal: {})",
            self.id, self.parts.container, self.dismiss_on_outside_click
        );
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.initialized)
            .unwrap_or(false)
    }
}

fn apply_open(
    doc: &mut Document,
    id: WidgetId,
    parts: &DropdownParts,
    class: &str,
    inner: &RwLock<DropdownInner>,
    open: bool,
) -> Result<bool, WidgetError> {
    let Ok(mut guard) = inner.write() else {
        return Err(poisoned(id));
    };
    if guard.open == open {
        return Ok(false);
    }
    if open {
        doc.add_class(&parts.container, class)?;
    } else {
        doc.remove_class(&parts.container, class)?;
    }
    guard.open = open;
    debug!("{id}: '{}' open = {open}", parts.container);
    Ok(true)
}
