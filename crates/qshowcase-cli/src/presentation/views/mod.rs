pub mod listing;
pub mod page;
pub mod topics;
pub mod tui;
