use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::presentation::formatters::truncate;
use crate::presentation::view_models::TopicListViewModel;

pub const SIDEBAR_TITLE: &str = " Select a Topic to Explore: ";

/// Radio-style topic list
pub struct SidebarView<'a> {
    data: &'a TopicListViewModel,
    selected: usize,
    label_width: usize,
}

impl<'a> SidebarView<'a> {
    pub fn new(data: &'a TopicListViewModel, selected: usize, label_width: usize) -> Self {
        Self {
            data,
            selected,
            label_width,
        }
    }

    pub fn into_list(self) -> List<'a> {
        let items: Vec<ListItem> = self
            .data
            .topics
            .iter()
            .enumerate()
            .map(|(i, topic)| {
                let checked = i == self.selected;
                let radio = if checked { "(•) " } else { "( ) " };
                let label = truncate(&topic.label, self.label_width.saturating_sub(radio.chars().count()));
                let style = if checked {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(vec![Span::raw(radio), Span::styled(label, style)]))
            })
            .collect();

        List::new(items)
            .block(Block::default().title(SIDEBAR_TITLE).borders(Borders::ALL))
            .highlight_style(Style::default().bg(Color::DarkGray))
    }
}
