use thiserror::Error;

/// Errors raised by document operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// No element with this ID exists in the document.
    #[error("element '{0}' not found")]
    NotFound(String),

    /// An element with this ID already exists in the document.
    #[error("element id '{0}' is already in use")]
    DuplicateId(String),
}
