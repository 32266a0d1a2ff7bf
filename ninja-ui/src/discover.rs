//! Convention-based discovery.
//!
//! Turns class-name conventions in a document into explicit descriptors:
//!
//! - every element with the tooltip class becomes a tooltip target
//! - every dropdown-class element must contain a trigger and a menu; the
//!   first of each (in document order) is used
//! - every tabs-class element pairs its tab-class descendants with its
//!   panel-class descendants by position
//!
//! Parts inside a nested container of the same kind belong to that nested
//! container only.

use log::debug;
use ninjadom::{Document, query_class, query_class_bounded};

use crate::config::UiConfig;
use crate::error::{ConfigError, SetupError};
use crate::page::PageBuilder;
use crate::parts::{DropdownParts, TabsParts};

/// Build a [`PageBuilder`] from the conventions in `config`.
pub fn discover(doc: &Document, config: &UiConfig) -> Result<PageBuilder, SetupError> {
    let conventions = &config.conventions;
    let root = doc.root();
    let mut builder = PageBuilder::new(config.clone());

    for target in query_class(root, &conventions.tooltip) {
        builder = builder.tooltip(target);
    }

    for container in query_class(root, &conventions.dropdown) {
        let trigger = first_within(doc, &container, &conventions.trigger, &conventions.dropdown)?;
        let menu = first_within(doc, &container, &conventions.menu, &conventions.dropdown)?;
        builder = builder.dropdown(DropdownParts::new(container, trigger, menu));
    }

    for container in query_class(root, &conventions.tabs) {
        let headers = query_class_bounded(root, &container, &conventions.tab, &conventions.tabs)
            .unwrap_or_default();
        let panels = query_class_bounded(root, &container, &conventions.panel, &conventions.tabs)
            .unwrap_or_default();
        builder = builder.tabs(TabsParts {
            container,
            headers,
            panels,
        });
    }

    debug!("Discovered {builder:?}");
    Ok(builder)
}

fn first_within(
    doc: &Document,
    container: &str,
    class: &str,
    boundary: &str,
) -> Result<String, ConfigError> {
    query_class_bounded(doc.root(), container, class, boundary)
        .and_then(|found| found.into_iter().next())
        .ok_or_else(|| ConfigError::MissingPart {
            container: container.to_string(),
            class: class.to_string(),
        })
}
