//! Ratatui widgets and components for the interactive browser.

pub mod components;
mod content;
mod sidebar;
mod status_bar;

pub use content::{PageLines, WrappedLines, page_lines, wrap_lines};
pub use sidebar::SidebarView;
pub use status_bar::StatusBarView;
