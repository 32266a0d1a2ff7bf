//! Snackbar widget.
//!
//! A single transient message surface owned by the page. Each `show` replaces
//! the message and restarts the auto-dismiss timer, so there is never more
//! than one pending hide per snackbar and a newer message is never hidden
//! early by an older message's timer.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use log::{debug, trace, warn};
use ninjadom::element::generate_id;
use ninjadom::{Document, DomError, Element, TimerId};

use crate::config::UiConfig;
use crate::error::WidgetError;
use crate::widget::{Widget, WidgetId, already_initialized, not_initialized, poisoned};

/// Internal state for a Snackbar
#[derive(Debug, Default)]
struct SnackbarInner {
    /// ID of the surface element, set by init.
    surface: Option<String>,
    message: String,
    visible: bool,
    /// The one outstanding hide timer.
    pending: Option<TimerId>,
    /// Bumped by every show/dismiss; a hide callback only acts if the
    /// generation it was scheduled under is still current.
    generation: u64,
}

/// A timed notification surface.
///
/// Cloning gives another handle to the same snackbar, which lets a click
/// listener call [`show`](Snackbar::show).
#[derive(Debug, Clone)]
pub struct Snackbar {
    id: WidgetId,
    duration: Duration,
    surface_class: Arc<str>,
    active_class: Arc<str>,
    inner: Arc<RwLock<SnackbarInner>>,
}

impl Snackbar {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            id: WidgetId::new("snackbar"),
            duration: config.snackbar.duration(),
            surface_class: Arc::from(config.conventions.snackbar.as_str()),
            active_class: Arc::from(config.active_class.as_str()),
            inner: Arc::new(RwLock::new(SnackbarInner::default())),
        }
    }

    /// Override the auto-dismiss delay.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// ID of the surface element, once initialized.
    pub fn surface_id(&self) -> Option<String> {
        self.inner.read().ok().and_then(|guard| guard.surface.clone())
    }

    pub fn is_visible(&self) -> bool {
        self.inner.read().map(|guard| guard.visible).unwrap_or(false)
    }

    /// The last message shown.
    pub fn message(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.message.clone())
            .unwrap_or_default()
    }

    /// The pending hide timer, if the snackbar is showing.
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.inner.read().ok().and_then(|guard| guard.pending)
    }

    /// Display `message` and (re)start the auto-dismiss timer.
    ///
    /// Any pending hide is cancelled first. An empty message shows an empty
    /// surface.
    pub fn show(&self, doc: &mut Document, message: impl Into<String>) -> Result<(), WidgetError> {
        let message = message.into();
        let Ok(mut guard) = self.inner.write() else {
            return Err(poisoned(self.id));
        };
        let Some(surface) = guard.surface.clone() else {
            return Err(not_initialized(self.id));
        };

        if let Some(previous) = guard.pending.take() {
            doc.clear_timeout(previous);
            trace!("{}: restarting timer, cancelled {previous}", self.id);
        }

        doc.set_text(&surface, message.as_str())?;
        doc.add_class(&surface, &self.active_class)?;
        doc.set_hidden(&surface, false)?;

        guard.generation += 1;
        let generation = guard.generation;
        let inner = Arc::clone(&self.inner);
        let class = Arc::clone(&self.active_class);
        let id = self.id;
        let timer = doc.set_timeout(self.duration, move |doc| {
            let Ok(mut guard) = inner.write() else {
                return;
            };
            if guard.generation != generation {
                return;
            }
            guard.pending = None;
            guard.visible = false;
            if let Err(e) = hide_surface(doc, &surface, &class) {
                warn!("{id}: failed to hide: {e}");
            }
            debug!("{id}: auto-dismissed");
        });

        guard.pending = Some(timer);
        guard.visible = true;
        guard.message = message;
        debug!("{}: showing {:?} for {:?}", self.id, guard.message, self.duration);
        Ok(())
    }

    /// Hide immediately and cancel the pending timer.
    pub fn dismiss(&self, doc: &mut Document) -> Result<(), WidgetError> {
        let Ok(mut guard) = self.inner.write() else {
            return Err(poisoned(self.id));
        };
        let Some(surface) = guard.surface.clone() else {
            return Err(not_initialized(self.id));
        };
        if let Some(pending) = guard.pending.take() {
            doc.clear_timeout(pending);
        }
        guard.generation += 1;
        guard.visible = false;
        hide_surface(doc, &surface, &self.active_class)?;
        Ok(())
    }
}

impl Widget for Snackbar {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn init(&mut self, doc: &mut Document) -> Result<(), WidgetError> {
        if self.is_initialized() {
            return Err(already_initialized(self.id));
        }

        let surface_id = generate_id("snackbar");
        let surface = Element::box_()
            .id(surface_id.as_str())
            .class(&*self.surface_class)
            .hidden(true);
        let body = doc.body_id().to_string();
        doc.append_child(&body, surface)?;

        if let Ok(mut guard) = self.inner.write() {
            guard.surface = Some(surface_id.clone());
        }
        debug!("{}: surface '{surface_id}' attached to '{body}'", self.id);
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.surface.is_some())
            .unwrap_or(false)
    }
}

fn hide_surface(doc: &mut Document, surface: &str, class: &str) -> Result<(), DomError> {
    doc.remove_class(surface, class)?;
    doc.set_hidden(surface, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn poison(snackbar: &Snackbar) {
        let inner = Arc::clone(&snackbar.inner);
        let _ = std::thread::spawn(move || {
            let _guard = inner.write().unwrap();
            panic!("listener panicked while holding the lock");
        })
        .join();
    }

    #[test]
    fn test_poisoned_state_is_reported() {
        let mut doc = Document::default();
        let mut snackbar = Snackbar::new(&UiConfig::default());
        snackbar.init(&mut doc).unwrap();
        poison(&snackbar);

        let expected = WidgetError::Poisoned {
            widget: snackbar.id.to_string(),
        };
        assert_eq!(snackbar.show(&mut doc, "hi"), Err(expected.clone()));
        assert_eq!(snackbar.dismiss(&mut doc), Err(expected));
        assert_eq!(doc.pending_timers(), 0);
    }
}
