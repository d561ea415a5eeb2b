//! Sidebar Component
//!
//! Owns the single-select state of the topic menu.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{Frame, layout::Rect, widgets::ListState};

use crate::presentation::view_models::TopicListViewModel;
use crate::presentation::views::tui::SidebarView;

/// Actions the sidebar emits to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarAction {
    /// Selection moved to the topic at this index
    Select(usize),
}

pub struct SidebarComponent {
    state: ListState,
    len: usize,
}

impl SidebarComponent {
    pub fn new(len: usize, initial: usize) -> Self {
        let mut state = ListState::default();
        if len > 0 {
            state.select(Some(initial.min(len - 1)));
        }
        Self { state, len }
    }

    pub fn selected(&self) -> usize {
        self.state.selected().unwrap_or(0)
    }

    /// Returns an action when the selection changed
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<SidebarAction> {
        if self.len == 0 {
            return None;
        }

        let current = self.selected();
        let target = match key.code {
            KeyCode::Char('j') | KeyCode::Down => (current + 1) % self.len,
            KeyCode::Char('k') | KeyCode::Up => (current + self.len - 1) % self.len,
            KeyCode::Home => 0,
            KeyCode::End => self.len - 1,
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                if index >= self.len {
                    return None;
                }
                index
            }
            _ => return None,
        };

        if target == current {
            return None;
        }
        self.state.select(Some(target));
        Some(SidebarAction::Select(target))
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, data: &TopicListViewModel) {
        // Index Safety: clamp selection to data bounds
        if data.topics.is_empty() {
            self.state.select(None);
        } else if self.selected() >= data.topics.len() {
            self.state.select(Some(data.topics.len() - 1));
        }

        let inner_width = area.width.saturating_sub(2) as usize;
        let list = SidebarView::new(data, self.selected(), inner_width).into_list();
        f.render_stateful_widget(list, area, &mut self.state);
    }
}
