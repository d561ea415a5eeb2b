//! TUI Renderer for the browse command
//!
//! Acts as a router between the sidebar and the content pane:
//! - Sidebar selection changes ask the page source for a fresh `PageViewModel`
//! - Scroll keys go to the content component
//! - Renderer owns only the quit flag; components own the rest of the UI state

use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Layout},
};

use crate::presentation::view_models::{PageViewModel, TopicListViewModel};
use crate::presentation::views::tui::StatusBarView;
use crate::presentation::views::tui::components::{
    ContentComponent, SidebarAction, SidebarComponent,
};

const SIDEBAR_WIDTH: u16 = 40;

/// Produces the page for a zero-based menu index
pub type PageSource = Box<dyn Fn(usize) -> Option<PageViewModel>>;

pub struct TuiRenderer {
    topics: TopicListViewModel,
    page: PageViewModel,
    page_source: PageSource,
    sidebar: SidebarComponent,
    content: ContentComponent,
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(
        topics: TopicListViewModel,
        initial_page: PageViewModel,
        initial_index: usize,
        page_source: PageSource,
    ) -> Self {
        let sidebar = SidebarComponent::new(topics.topics.len(), initial_index);
        let content = ContentComponent::new(&initial_page);
        Self {
            topics,
            page: initial_page,
            page_source,
            sidebar,
            content,
            should_quit: false,
        }
    }

    /// Take over the terminal until the user quits
    pub fn run(mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.render(f))?;

            // Blocking read; the page only changes on input
            if let Event::Key(key) = event::read()? {
                self.handle_key_event(key);
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // Only handle key press events, not release
        if key.kind != KeyEventKind::Press {
            return;
        }

        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.should_quit = true;
            return;
        }

        if let Some(SidebarAction::Select(index)) = self.sidebar.handle_input(key) {
            self.select(index);
            return;
        }

        self.content.handle_input(key);
    }

    fn select(&mut self, index: usize) {
        let Some(page) = (self.page_source)(index) else {
            tracing::warn!(index, "no page for selection");
            return;
        };
        tracing::debug!(topic = %page.topic.slug, "selection changed");
        self.content.load(&page);
        self.content.jump_to_section();
        self.page = page;
    }

    pub fn render(&mut self, f: &mut Frame) {
        // Main layout: [Sidebar | Content] over [Status Bar]
        let rows = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(f.area());
        let columns = Layout::horizontal([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
            .split(rows[0]);

        self.sidebar.render(f, columns[0], &self.topics);
        self.content.render(f, columns[1], &self.page.topic.label);

        let status = StatusBarView::new(
            self.page.topic.position,
            self.topics.topics.len(),
            &self.page.topic.label,
        );
        f.render_widget(status, rows[1]);
    }

    #[cfg(test)]
    fn selected_slug(&self) -> &str {
        &self.page.topic.slug
    }

    #[cfg(test)]
    fn should_quit(&self) -> bool {
        self.should_quit
    }
}
