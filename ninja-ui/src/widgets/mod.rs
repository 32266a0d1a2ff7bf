//! The widget set.

mod dropdown;
mod snackbar;
mod tabs;
mod tooltip;

pub use dropdown::Dropdown;
pub use snackbar::Snackbar;
pub use tabs::Tabs;
pub use tooltip::Tooltip;
