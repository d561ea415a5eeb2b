use serde::Serialize;
use std::fmt;

use super::{CreateView, DisplayOptions};

#[derive(Debug, Clone, Serialize)]
pub struct CodeListingViewModel {
    pub title: String,
    pub language: String,
    pub source: String,
    pub line_count: usize,
}

impl CreateView for CodeListingViewModel {
    fn create_view<'a>(&'a self, _options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::listing::CodeListingView;
        Box::new(CodeListingView { data: self })
    }
}
