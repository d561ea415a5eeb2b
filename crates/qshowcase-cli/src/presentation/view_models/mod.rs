pub mod common;
pub mod listing;
pub mod page;
pub mod result;
pub mod topics;

pub use common::{DisplayOptions, Guidance, StatusBadge, StatusLevel, ViewMode};
pub use listing::CodeListingViewModel;
pub use page::{BlockViewModel, ListItemViewModel, PageViewModel, SectionViewModel, TopicRefViewModel};
pub use result::CommandResultViewModel;
pub use topics::{TopicEntryViewModel, TopicListViewModel};

use std::fmt;

/// Bridge from a ViewModel to the view that renders it as text
pub trait CreateView {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a>;
}
