//! Explicit part descriptors.
//!
//! Widgets with more than one element receive their parts by ID instead of
//! inferring them from the tree, so a widget can only ever bind to the
//! elements it was given.

use std::collections::HashSet;

use ninjadom::{Document, contains};

use crate::error::ConfigError;

/// Parts of a dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownParts {
    /// Element that receives the open class.
    pub container: String,
    /// Clicking this toggles the dropdown.
    pub trigger: String,
    pub menu: String,
}

impl DropdownParts {
    pub fn new(
        container: impl Into<String>,
        trigger: impl Into<String>,
        menu: impl Into<String>,
    ) -> Self {
        Self {
            container: container.into(),
            trigger: trigger.into(),
            menu: menu.into(),
        }
    }

    pub(crate) fn validate(&self, doc: &Document) -> Result<(), ConfigError> {
        require(doc, "dropdown container", &self.container)?;
        require_within(doc, "trigger", &self.trigger, &self.container)?;
        require_within(doc, "menu", &self.menu, &self.container)
    }
}

/// Parts of a tab group. `headers[i]` selects `panels[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabsParts {
    pub container: String,
    pub headers: Vec<String>,
    pub panels: Vec<String>,
}

impl TabsParts {
    pub fn new(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            ..Default::default()
        }
    }

    /// Add a header/panel pair.
    pub fn pair(mut self, header: impl Into<String>, panel: impl Into<String>) -> Self {
        self.headers.push(header.into());
        self.panels.push(panel.into());
        self
    }

    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.headers.push(header.into());
        self
    }

    pub fn panel(mut self, panel: impl Into<String>) -> Self {
        self.panels.push(panel.into());
        self
    }

    pub(crate) fn validate(&self, doc: &Document) -> Result<(), ConfigError> {
        require(doc, "tabs container", &self.container)?;
        if self.headers.len() != self.panels.len() {
            return Err(ConfigError::TabCountMismatch {
                container: self.container.clone(),
                headers: self.headers.len(),
                panels: self.panels.len(),
            });
        }
        // Each element may play one role once
        let mut seen = HashSet::new();
        let duplicate = self.headers.iter().chain(&self.panels).find(|id| !seen.insert(*id));
        if let Some(duplicate) = duplicate {
            return Err(ConfigError::DuplicatePart {
                container: self.container.clone(),
                id: duplicate.clone(),
            });
        }
        for header in &self.headers {
            require_within(doc, "tab header", header, &self.container)?;
        }
        for panel in &self.panels {
            require_within(doc, "tab panel", panel, &self.container)?;
        }
        Ok(())
    }
}

pub(crate) fn require(doc: &Document, role: &'static str, id: &str) -> Result<(), ConfigError> {
    if doc.exists(id) {
        Ok(())
    } else {
        Err(ConfigError::MissingElement {
            role,
            id: id.to_string(),
        })
    }
}

fn require_within(
    doc: &Document,
    role: &'static str,
    id: &str,
    container: &str,
) -> Result<(), ConfigError> {
    require(doc, role, id)?;
    if contains(doc.root(), container, id) {
        Ok(())
    } else {
        Err(ConfigError::OutsideContainer {
            role,
            id: id.to_string(),
            container: container.to_string(),
        })
    }
}
