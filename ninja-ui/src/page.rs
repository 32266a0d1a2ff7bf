//! Composition root.
//!
//! A [`Page`] owns the document and every widget wired into it. Hosts build
//! one explicitly, either from descriptors through [`PageBuilder`] or from
//! markup conventions through [`Page::setup`], and then feed it events and
//! clock ticks.

use std::time::Duration;

use log::{debug, info, warn};
use ninjadom::{Document, DomError, Event, EventKind, ListenerId, ListenerTarget};

use crate::config::UiConfig;
use crate::discover::discover;
use crate::error::{ConfigError, SetupError, WidgetError};
use crate::parts::{DropdownParts, TabsParts, require};
use crate::widget::Widget;
use crate::widgets::{Dropdown, Snackbar, Tabs, Tooltip};

/// Collects widget descriptors, then constructs and initializes them.
#[derive(Debug, Clone, Default)]
pub struct PageBuilder {
    config: UiConfig,
    tooltips: Vec<String>,
    dropdowns: Vec<DropdownParts>,
    tabs: Vec<TabsParts>,
}

impl PageBuilder {
    pub fn new(config: UiConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn tooltip(mut self, target: impl Into<String>) -> Self {
        self.tooltips.push(target.into());
        self
    }

    pub fn dropdown(mut self, parts: DropdownParts) -> Self {
        self.dropdowns.push(parts);
        self
    }

    pub fn tabs(mut self, parts: TabsParts) -> Self {
        self.tabs.push(parts);
        self
    }

    /// Construct and initialize every widget, then the snackbar.
    ///
    /// Stops at the first widget that fails.
    pub fn build(self, mut document: Document) -> Result<Page, SetupError> {
        let config = self.config;

        let mut tooltips = Vec::with_capacity(self.tooltips.len());
        for target in self.tooltips {
            let mut tooltip = Tooltip::new(&document, target.as_str(), &config)
                .map_err(|source| widget_error("tooltip", &target, source))?;
            init_widget(&mut tooltip, &mut document, &target)?;
            tooltips.push(tooltip);
        }

        let mut dropdowns = Vec::with_capacity(self.dropdowns.len());
        for parts in self.dropdowns {
            let label = parts.container.clone();
            let mut dropdown = Dropdown::new(parts, &config);
            init_widget(&mut dropdown, &mut document, &label)?;
            dropdowns.push(dropdown);
        }

        let mut tabs = Vec::with_capacity(self.tabs.len());
        for parts in self.tabs {
            let label = parts.container.clone();
            let mut group = Tabs::new(parts, &config);
            init_widget(&mut group, &mut document, &label)?;
            tabs.push(group);
        }

        let mut snackbar = Snackbar::new(&config);
        init_widget(&mut snackbar, &mut document, "body")?;

        info!(
            "Page ready: {} tooltip(s), {} dropdown(s), {} tab group(s)",
            tooltips.len(),
            dropdowns.len(),
            tabs.len()
        );

        Ok(Page {
            document,
            config,
            tooltips,
            dropdowns,
            tabs,
            snackbar,
        })
    }
}

fn init_widget(widget: &mut dyn Widget, doc: &mut Document, target: &str) -> Result<(), SetupError> {
    let name = widget.name();
    debug!("Initializing {} ({name} on '{target}')", widget.id());
    widget
        .init(doc)
        .map_err(|source| widget_error(name, target, source))
}

fn widget_error(name: &str, target: &str, source: WidgetError) -> SetupError {
    SetupError::Widget {
        widget: format!("{name} '{target}'"),
        source,
    }
}

/// A document with its widgets wired in.
#[derive(Debug)]
pub struct Page {
    document: Document,
    config: UiConfig,
    tooltips: Vec<Tooltip>,
    dropdowns: Vec<Dropdown>,
    tabs: Vec<Tabs>,
    snackbar: Snackbar,
}

impl Page {
    /// Discover widgets in `document` by convention and initialize them.
    pub fn setup(document: Document, config: UiConfig) -> Result<Self, SetupError> {
        discover(&document, &config)?.build(document)
    }

    pub fn builder(config: UiConfig) -> PageBuilder {
        PageBuilder::new(config)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    pub fn tooltips(&self) -> &[Tooltip] {
        &self.tooltips
    }

    pub fn dropdowns(&self) -> &[Dropdown] {
        &self.dropdowns
    }

    pub fn tabs(&self) -> &[Tabs] {
        &self.tabs
    }

    pub fn snackbar(&self) -> &Snackbar {
        &self.snackbar
    }

    /// The tab group whose container is `container`.
    pub fn tabs_for(&self, container: &str) -> Option<&Tabs> {
        self.tabs.iter().find(|tabs| tabs.parts().container == container)
    }

    /// The dropdown whose container is `container`.
    pub fn dropdown_for(&self, container: &str) -> Option<&Dropdown> {
        self.dropdowns
            .iter()
            .find(|dropdown| dropdown.parts().container == container)
    }

    /// Deliver an input event to the document.
    pub fn dispatch(&mut self, event: Event) -> Result<usize, DomError> {
        self.document.dispatch(event)
    }

    /// Advance the page clock, firing due timers.
    pub fn advance(&mut self, by: Duration) -> usize {
        self.document.advance(by)
    }

    /// Show a snackbar message.
    pub fn show(&mut self, message: impl Into<String>) -> Result<(), WidgetError> {
        self.snackbar.show(&mut self.document, message)
    }

    /// Programmatically select a tab in the group rooted at `container`.
    pub fn select_tab(&mut self, container: &str, index: usize) -> Result<bool, WidgetError> {
        let Some(tabs) = self.tabs.iter().find(|tabs| tabs.parts().container == container) else {
            return Err(ConfigError::MissingElement {
                role: "tabs container",
                id: container.to_string(),
            }
            .into());
        };
        tabs.select(&mut self.document, index)
    }

    /// Show `message` in the snackbar whenever `button` is clicked.
    pub fn bind_snackbar(
        &mut self,
        button: &str,
        message: impl Into<String>,
    ) -> Result<ListenerId, WidgetError> {
        require(&self.document, "snackbar button", button)?;
        let snackbar = self.snackbar.clone();
        let message = message.into();
        Ok(self.document.add_listener(
            ListenerTarget::element(button),
            EventKind::Click,
            move |doc, _event| {
                if let Err(e) = snackbar.show(doc, message.as_str()) {
                    warn!("Failed to show snackbar: {e}");
                }
            },
        ))
    }
}
