//! Content Component
//!
//! Holds the flattened page, its rows wrapped to the pane width, and the
//! scroll offset. Scroll positions count wrapped rows.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    text::Line,
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::view_models::PageViewModel;
use crate::presentation::views::tui::{page_lines, wrap_lines};

const PAGE_STEP: usize = 10;

pub struct ContentComponent {
    lines: Vec<Line<'static>>,
    section_offset: usize,
    /// Wrap width of `rows`; 0 until the first render
    width: usize,
    height: usize,
    rows: Vec<Line<'static>>,
    row_starts: Vec<usize>,
    scroll: usize,
}

impl ContentComponent {
    pub fn new(page: &PageViewModel) -> Self {
        let mut component = Self {
            lines: Vec::new(),
            section_offset: 0,
            width: 0,
            height: 0,
            rows: Vec::new(),
            row_starts: Vec::new(),
            scroll: 0,
        };
        component.load(page);
        component
    }

    /// Replace the page and scroll to the top
    pub fn load(&mut self, page: &PageViewModel) {
        let rendered = page_lines(page);
        self.lines = rendered.lines;
        self.section_offset = rendered.section_offset;
        self.row_starts.clear();
        self.scroll = 0;
        self.reflow(self.width);
    }

    #[cfg(test)]
    fn scroll(&self) -> usize {
        self.scroll
    }

    /// Row of the selected section's header at the current width
    pub fn section_row(&self) -> usize {
        self.row_starts
            .get(self.section_offset)
            .copied()
            .unwrap_or(0)
    }

    pub fn jump_to_section(&mut self) {
        self.scroll = self.section_row();
        self.clamp();
    }

    /// Returns true if the input was handled
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::PageDown | KeyCode::Char(' ') => {
                self.scroll += PAGE_STEP;
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(PAGE_STEP);
            }
            KeyCode::Char('g') => {
                self.scroll = 0;
            }
            KeyCode::Char('G') => {
                self.scroll = self.max_scroll();
            }
            KeyCode::Char('s') => {
                self.scroll = self.section_row();
            }
            _ => return false,
        }
        self.clamp();
        true
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, title: &str) {
        let inner_width = area.width.saturating_sub(2) as usize;
        self.height = area.height.saturating_sub(2) as usize;
        if inner_width != self.width {
            self.reflow(inner_width);
        }
        self.clamp();

        let visible: Vec<Line<'static>> = self
            .rows
            .iter()
            .skip(self.scroll)
            .take(self.height)
            .cloned()
            .collect();
        let paragraph = Paragraph::new(visible)
            .block(Block::default().title(format!(" {} ", title)).borders(Borders::ALL));
        f.render_widget(paragraph, area);
    }

    /// Rewrap at `width`, keeping the same logical line at the top
    fn reflow(&mut self, width: usize) {
        let (line, within) = self.anchor();
        let wrapped = wrap_lines(&self.lines, width);
        self.rows = wrapped.rows;
        self.row_starts = wrapped.row_starts;
        self.width = width;

        let start = self.row_starts.get(line).copied().unwrap_or(0);
        let end = self
            .row_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.rows.len());
        self.scroll = start + within.min(end.saturating_sub(start + 1));
        self.clamp();
    }

    /// Logical line under the top row, and the row offset within it
    fn anchor(&self) -> (usize, usize) {
        let line = self
            .row_starts
            .partition_point(|&start| start <= self.scroll)
            .saturating_sub(1);
        let start = self.row_starts.get(line).copied().unwrap_or(0);
        (line, self.scroll.saturating_sub(start))
    }

    /// Last scroll offset that still fills the pane
    fn max_scroll(&self) -> usize {
        self.rows.len().saturating_sub(self.height.max(1))
    }

    fn clamp(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }
}
