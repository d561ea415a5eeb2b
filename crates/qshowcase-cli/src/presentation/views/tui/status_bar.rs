use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct StatusBarView<'a> {
    position: usize,
    total: usize,
    label: &'a str,
}

impl<'a> StatusBarView<'a> {
    pub fn new(position: usize, total: usize, label: &'a str) -> Self {
        Self {
            position,
            total,
            label,
        }
    }
}

impl<'a> Widget for StatusBarView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hint = Style::default().fg(Color::DarkGray);
        let line = Line::from(vec![
            Span::styled(
                format!(" {}/{} ", self.position, self.total),
                Style::default().fg(Color::Black).bg(Color::Cyan),
            ),
            Span::raw(format!(" {} ", self.label)),
            Span::styled(
                "│ ↑↓/jk topic · 1-9 jump · PgUp/PgDn scroll · s section · g top · q quit",
                hint,
            ),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
