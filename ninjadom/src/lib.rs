pub mod document;
pub mod element;
pub mod error;
pub mod event;
pub mod outline;
pub mod timer;

pub use document::{Document, BODY_ID};
pub use element::{
    contains, find_element, path_to, query_class, query_class_bounded, query_class_within, Element,
};
pub use error::DomError;
pub use event::{Event, EventKind, ListenerId, ListenerTarget};
pub use outline::outline;
pub use timer::TimerId;
