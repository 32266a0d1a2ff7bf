//! Small reusable UI widgets bound to a [`ninjadom`] document.
//!
//! Each widget is constructed from an explicit target, wired once with
//! [`Widget::init`](widget::Widget::init), and then reacts to events
//! dispatched through the document. [`Page`] is the composition root that
//! owns a document and its widgets.

pub mod config;
pub mod discover;
pub mod error;
pub mod page;
pub mod parts;
pub mod widget;
pub mod widgets;

pub use page::{Page, PageBuilder};

pub mod prelude {
    pub use crate::config::{Conventions, DropdownConfig, SnackbarConfig, UiConfig};
    pub use crate::discover::discover;
    pub use crate::error::{ConfigError, SetupError, WidgetError};
    pub use crate::page::{Page, PageBuilder};
    pub use crate::parts::{DropdownParts, TabsParts};
    pub use crate::widget::{Widget, WidgetId};
    pub use crate::widgets::{Dropdown, Snackbar, Tabs, Tooltip};

    pub use ninjadom::{Document, Element, Event};
}
