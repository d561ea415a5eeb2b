use serde::Serialize;
use std::fmt;

use super::{CreateView, DisplayOptions};

#[derive(Debug, Clone, Serialize)]
pub struct TopicListViewModel {
    pub topics: Vec<TopicEntryViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopicEntryViewModel {
    pub position: usize,
    pub label: String,
    pub slug: String,
    pub header: String,
    pub is_default: bool,
}

impl CreateView for TopicListViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::topics::TopicListView;
        Box::new(TopicListView::new(self, options))
    }
}
