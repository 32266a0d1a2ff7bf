//! Widget error types.

use ninjadom::DomError;
use thiserror::Error;

/// A widget's expected structure is malformed or absent.
///
/// Raised at construction or `init`, before any element is modified.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An element named by a descriptor does not exist.
    #[error("{role} element '{id}' not found")]
    MissingElement {
        /// What the element was supposed to be ("tab header", "trigger", ...).
        role: &'static str,
        id: String,
    },

    /// An element named by a descriptor lives outside its widget's container.
    #[error("{role} element '{id}' is not inside container '{container}'")]
    OutsideContainer {
        role: &'static str,
        id: String,
        container: String,
    },

    /// Tab headers and panels are paired by index, so the counts must agree.
    #[error("tabs '{container}' have {headers} header(s) but {panels} panel(s)")]
    TabCountMismatch {
        container: String,
        headers: usize,
        panels: usize,
    },

    /// One element is named twice across a tab group's headers and panels.
    #[error("'{id}' is used more than once in tabs '{container}'")]
    DuplicatePart { container: String, id: String },

    /// Convention discovery found a container without a required part.
    #[error("'{container}' has no descendant with class '{class}'")]
    MissingPart { container: String, class: String },
}

/// Errors returned by widget operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WidgetError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dom(#[from] DomError),

    /// `init` was called a second time.
    #[error("{widget} is already initialized")]
    AlreadyInitialized { widget: String },

    /// An operation that needs `init` ran before it.
    #[error("{widget} is not initialized")]
    NotInitialized { widget: String },

    #[error("tab index {index} is out of range for {len} tab(s)")]
    IndexOutOfRange { index: usize, len: usize },

    /// A listener panicked while holding the widget's state lock.
    #[error("{widget} state is poisoned")]
    Poisoned { widget: String },
}

/// Errors raised while wiring a page.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    /// Convention discovery could not build a descriptor.
    #[error("discovery failed: {0}")]
    Discovery(#[from] ConfigError),

    /// A widget failed to construct or initialize.
    #[error("failed to set up {widget}: {source}")]
    Widget {
        widget: String,
        #[source]
        source: WidgetError,
    },
}
