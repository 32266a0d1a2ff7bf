//! Tabs widget.
//!
//! A set of header/panel pairs of which exactly one is active. The active
//! header and panel carry the active class and the active panel is the only
//! visible one.

use std::sync::{Arc, RwLock};

use log::{debug, warn};
use ninjadom::{Document, DomError, EventKind, ListenerTarget};

use crate::config::UiConfig;
use crate::error::WidgetError;
use crate::parts::TabsParts;
use crate::widget::{Widget, WidgetId, already_initialized, not_initialized, poisoned};

/// Internal state for a Tabs widget
#[derive(Debug, Default)]
struct TabsInner {
    /// Index of the active pair. None before init, or when there are no tabs.
    active: Option<usize>,
    initialized: bool,
}

/// A tab group with reactive selection state.
///
/// # Example
///
/// ```ignore
/// let mut tabs = Tabs::new(
///     TabsParts::new("tabs").pair("t0", "p0").pair("t1", "p1"),
///     &UiConfig::default(),
/// );
/// tabs.init(&mut doc)?;
/// doc.dispatch(Event::click("t1"))?;
/// assert_eq!(tabs.active(), Some(1));
/// ```
#[derive(Debug)]
pub struct Tabs {
    id: WidgetId,
    parts: Arc<TabsParts>,
    active_class: Arc<str>,
    inner: Arc<RwLock<TabsInner>>,
}

impl Tabs {
    pub fn new(parts: TabsParts, config: &UiConfig) -> Self {
        Self {
            id: WidgetId::new("tabs"),
            parts: Arc::new(parts),
            active_class: Arc::from(config.active_class.as_str()),
            inner: Arc::new(RwLock::new(TabsInner::default())),
        }
    }

    pub fn parts(&self) -> &TabsParts {
        &self.parts
    }

    /// Number of header/panel pairs.
    pub fn len(&self) -> usize {
        self.parts.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.headers.is_empty()
    }

    /// Index of the active pair.
    pub fn active(&self) -> Option<usize> {
        self.inner.read().ok().and_then(|guard| guard.active)
    }

    /// Activate pair `index`, as if its header had been clicked.
    ///
    /// Returns false if `index` was already active.
    pub fn select(&self, doc: &mut Document, index: usize) -> Result<bool, WidgetError> {
        if !self.is_initialized() {
            return Err(not_initialized(self.id));
        }
        if index >= self.len() {
            return Err(WidgetError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        transition(doc, self.id, &self.parts, &self.active_class, &self.inner, index)
    }
}

impl Widget for Tabs {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn init(&mut self, doc: &mut Document) -> Result<(), WidgetError> {
        if self.is_initialized() {
            return Err(already_initialized(self.id));
        }

        // Validate everything before the first mutation
        self.parts.validate(doc)?;

        if self.is_empty() {
            debug!("{}: no tabs in '{}', nothing to wire", self.id, self.parts.container);
            self.mark_initialized(None);
            return Ok(());
        }

        // Normalize whatever state the markup arrived in
        for (index, (header, panel)) in self
            .parts
            .headers
            .iter()
            .zip(&self.parts.panels)
            .enumerate()
        {
            set_pair(doc, header, panel, &self.active_class, index == 0)?;
        }

        for (index, header) in self.parts.headers.iter().enumerate() {
            let parts = Arc::clone(&self.parts);
            let class = Arc::clone(&self.active_class);
            let inner = Arc::clone(&self.inner);
            let id = self.id;
            doc.add_listener(
                ListenerTarget::element(header.as_str()),
                EventKind::Click,
                move |doc, _event| {
                    if let Err(e) = transition(doc, id, &parts, &class, &inner, index) {
                        warn!("{id}: failed to activate tab {index}: {e}");
                    }
                },
            );
        }

        self.mark_initialized(Some(0));
        debug!(
            "{}: initialized {} tab(s) in '{}'",
            self.id,
            self.len(),
            self.parts.container
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

impl Tabs {
    fn mark_initialized(&self, active: Option<usize>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.initialized = true;
            guard.active = active;
        }
    }
}

/// Move the active marker to pair `to`. Returns false when `to` is already
/// active.
fn transition(
    doc: &mut Document,
    id: WidgetId,
    parts: &TabsParts,
    class: &str,
    inner: &RwLock<TabsInner>,
    to: usize,
) -> Result<bool, WidgetError> {
    let Ok(mut guard) = inner.write() else {
        return Err(poisoned(id));
    };
    let from = guard.active;
    if from == Some(to) {
        return Ok(false);
    }

    if let Some(from) = from {
        set_pair(doc, &parts.headers[from], &parts.panels[from], class, false)?;
    }
    set_pair(doc, &parts.headers[to], &parts.panels[to], class, true)?;
    guard.active = Some(to);

    debug!("{id}: '{}' {from:?} -> {to}", parts.container);
    Ok(true)
}

fn set_pair(
    doc: &mut Document,
    header: &str,
    panel: &str,
    class: &str,
    active: bool,
) -> Result<(), DomError> {
    if active {
        doc.add_class(header, class)?;
        doc.add_class(panel, class)?;
    } else {
        doc.remove_class(header, class)?;
        doc.remove_class(panel, class)?;
    }
    doc.set_hidden(panel, !active)
}
