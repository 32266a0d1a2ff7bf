//! Tooltip widget.

use log::{debug, warn};
use ninjadom::element::generate_id;
use ninjadom::{Document, Element, EventKind, ListenerTarget};

use crate::config::UiConfig;
use crate::error::{ConfigError, WidgetError};
use crate::widget::{Widget, WidgetId, already_initialized};

/// A hover hint attached to one element.
///
/// The caption is read from the target's attribute once, at construction.
/// A missing attribute gives an empty caption.
#[derive(Debug)]
pub struct Tooltip {
    id: WidgetId,
    target: String,
    caption: String,
    caption_id: String,
    caption_class: String,
    active_class: String,
    initialized: bool,
}

impl Tooltip {
    pub fn new(doc: &Document, target: impl Into<String>, config: &UiConfig) -> Result<Self, WidgetError> {
        let target = target.into();
        let caption = match doc.attr(&target, &config.tooltip_attribute) {
            Ok(Some(caption)) => caption.to_string(),
            Ok(None) => {
                debug!("Tooltip '{target}' has no '{}' attribute", config.tooltip_attribute);
                String::new()
            }
            Err(_) => {
                return Err(ConfigError::MissingElement {
                    role: "tooltip target",
                    id: target,
                }
                .into());
            }
        };

        Ok(Self {
            id: WidgetId::new("tooltip"),
            caption_id: generate_id(&format!("{target}-tip")),
            target,
            caption,
            caption_class: config.conventions.caption.clone(),
            active_class: config.active_class.clone(),
            initialized: false,
        })
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// ID of the caption element created by `init`.
    pub fn caption_id(&self) -> &str {
        &self.caption_id
    }

    /// Whether the caption currently carries the active class.
    pub fn is_showing(&self, doc: &Document) -> bool {
        doc.has_class(&self.caption_id, &self.active_class)
            .unwrap_or(false)
    }
}

impl Widget for Tooltip {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn init(&mut self, doc: &mut Document) -> Result<(), WidgetError> {
        if self.initialized {
            return Err(already_initialized(self.id));
        }

        let tip = Element::text(self.caption.as_str())
            .id(self.caption_id.as_str())
            .class(self.caption_class.as_str());
        doc.append_child(&self.target, tip)?;

        let id = self.id;
        let caption_id = self.caption_id.clone();
        let class = self.active_class.clone();
        doc.add_listener(
            ListenerTarget::element(self.target.as_str()),
            EventKind::PointerEnter,
            move |doc, _event| {
                if let Err(e) = doc.add_class(&caption_id, &class) {
                    warn!("{id}: failed to show caption: {e}");
                }
            },
        );

        let caption_id = self.caption_id.clone();
        let class = self.active_class.clone();
        doc.add_listener(
            ListenerTarget::element(self.target.as_str()),
            EventKind::PointerLeave,
            move |doc, _event| {
                if let Err(e) = doc.remove_class(&caption_id, &class) {
                    warn!("{id}: failed to hide caption: {e}");
                }
            },
        );

        self.initialized = true;
        debug!("{}: attached to '{}'", self.id, self.target);
        Ok(())
    }

    fn is_initialized(&self) -> bool {
        self.initialized
    }
}
