use serde::Serialize;
use std::fmt;

use super::{CreateView, DisplayOptions};

// --------------------------------------------------------
// Data Definitions (ViewModels)
// --------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicRefViewModel {
    pub label: String,
    pub slug: String,
    /// 1-based menu position
    pub position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageViewModel {
    pub topic: TopicRefViewModel,
    pub intro: Vec<BlockViewModel>,
    pub exploration: BlockViewModel,
    pub section: SectionViewModel,
    pub footer: Vec<BlockViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionViewModel {
    pub header: String,
    pub blocks: Vec<BlockViewModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BlockViewModel {
    Heading {
        level: u8,
        text: String,
    },
    Code {
        language: String,
        source: String,
        line_count: usize,
    },
    Paragraph {
        text: String,
    },
    List {
        ordered: bool,
        items: Vec<ListItemViewModel>,
    },
    Link {
        label: String,
        url: String,
    },
    Rule,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItemViewModel {
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ListItemViewModel>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub ordered_children: bool,
}

// --------------------------------------------------------
// CreateView Trait Implementations (Bridge to Views)
// --------------------------------------------------------

impl CreateView for PageViewModel {
    fn create_view<'a>(&'a self, options: DisplayOptions) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::page::PageView;
        Box::new(PageView::new(self, options))
    }
}

impl fmt::Display for PageViewModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.create_view(DisplayOptions::default()))
    }
}
