use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthChar;

use crate::presentation::formatters::{InlineStyle, parse_inline};
use crate::presentation::view_models::{BlockViewModel, ListItemViewModel, PageViewModel};

const RULE_WIDTH: usize = 30;

/// Page flattened into terminal lines
pub struct PageLines {
    pub lines: Vec<Line<'static>>,
    /// Index of the selected section's header line
    pub section_offset: usize,
}

/// Lines broken into rows no wider than `width` columns
pub struct WrappedLines {
    pub rows: Vec<Line<'static>>,
    /// First row of each input line
    pub row_starts: Vec<usize>,
}

/// Word-wrap `lines` to `width` columns; `0` keeps every line on one row.
pub fn wrap_lines(lines: &[Line<'static>], width: usize) -> WrappedLines {
    let mut rows = Vec::with_capacity(lines.len());
    let mut row_starts = Vec::with_capacity(lines.len());
    for line in lines {
        row_starts.push(rows.len());
        rows.extend(wrap_line(line, width));
    }
    WrappedLines { rows, row_starts }
}

fn wrap_line(line: &Line<'static>, width: usize) -> Vec<Line<'static>> {
    if width == 0 || line.width() <= width {
        return vec![line.clone()];
    }

    let cells: Vec<(char, Style)> = line
        .spans
        .iter()
        .flat_map(|span| span.content.chars().map(move |c| (c, span.style)))
        .collect();

    let mut rows = Vec::new();
    let mut start = 0;
    while start < cells.len() {
        let mut used = 0;
        let mut end = start;
        while end < cells.len() {
            let w = cells[end].0.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            end += 1;
        }

        if end == cells.len() {
            rows.push(cells_to_line(&cells[start..], line.style));
            break;
        }

        // Break after the last space past the indent, else mid-word
        let indent = cells[start..].iter().take_while(|(c, _)| *c == ' ').count();
        let (row_end, next) = if cells[end].0 == ' ' {
            (end, end + 1)
        } else if let Some(space) = cells[start..end]
            .iter()
            .rposition(|(c, _)| *c == ' ')
            .filter(|&pos| pos > indent)
        {
            (start + space, start + space + 1)
        } else if end == start {
            (start + 1, start + 1)
        } else {
            (end, end)
        };

        rows.push(cells_to_line(&cells[start..row_end], line.style));
        start = next;
    }
    rows
}

fn cells_to_line(cells: &[(char, Style)], line_style: Style) -> Line<'static> {
    let mut spans = Vec::new();
    let mut text = String::new();
    let mut current: Option<Style> = None;
    for &(c, style) in cells {
        if current != Some(style) {
            if let Some(prev) = current {
                spans.push(Span::styled(std::mem::take(&mut text), prev));
            }
            current = Some(style);
        }
        text.push(c);
    }
    if let Some(prev) = current {
        spans.push(Span::styled(text, prev));
    }
    Line::from(spans).style(line_style)
}

pub fn page_lines(page: &PageViewModel) -> PageLines {
    let mut lines = Vec::new();

    for block in page.intro.iter().chain(std::iter::once(&page.exploration)) {
        push_block(&mut lines, block);
        lines.push(Line::default());
    }

    let section_offset = lines.len();
    push_block(
        &mut lines,
        &BlockViewModel::Heading {
            level: 2,
            text: page.section.header.clone(),
        },
    );
    for block in &page.section.blocks {
        lines.push(Line::default());
        push_block(&mut lines, block);
    }

    for block in &page.footer {
        lines.push(Line::default());
        push_block(&mut lines, block);
    }

    PageLines {
        lines,
        section_offset,
    }
}

fn push_block(lines: &mut Vec<Line<'static>>, block: &BlockViewModel) {
    match block {
        BlockViewModel::Heading { level, text } => {
            let style = match *level {
                1 => Style::default()
                    .fg(Color::LightCyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                2 => Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                _ => Style::default().add_modifier(Modifier::BOLD),
            };
            lines.push(Line::from(Span::styled(text.clone(), style)));
        }
        BlockViewModel::Code {
            language, source, ..
        } => {
            lines.push(Line::from(Span::styled(
                format!("[{}]", language),
                Style::default().fg(Color::DarkGray),
            )));
            for line in source.lines() {
                lines.push(Line::from(Span::styled(
                    format!("  {}", line),
                    Style::default().fg(Color::Green),
                )));
            }
        }
        BlockViewModel::Paragraph { text } => lines.push(Line::from(inline_spans(text))),
        BlockViewModel::List { ordered, items } => push_items(lines, items, *ordered, 0),
        BlockViewModel::Link { label, url } => {
            lines.push(Line::from(vec![
                Span::raw(format!("{}: ", label)),
                Span::styled(
                    url.clone(),
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]));
        }
        BlockViewModel::Rule => lines.push(Line::from(Span::styled(
            "─".repeat(RULE_WIDTH),
            Style::default().fg(Color::DarkGray),
        ))),
    }
}

fn push_items(
    lines: &mut Vec<Line<'static>>,
    items: &[ListItemViewModel],
    ordered: bool,
    depth: usize,
) {
    for (i, item) in items.iter().enumerate() {
        let marker = if ordered {
            format!("{}{}. ", "    ".repeat(depth), i + 1)
        } else {
            format!("{}• ", "    ".repeat(depth))
        };
        let mut spans = vec![Span::raw(marker)];
        spans.extend(inline_spans(&item.text));
        lines.push(Line::from(spans));

        if !item.children.is_empty() {
            push_items(lines, &item.children, item.ordered_children, depth + 1);
        }
    }
}

fn inline_spans(text: &str) -> Vec<Span<'static>> {
    parse_inline(text)
        .into_iter()
        .map(|seg| match seg.style {
            InlineStyle::Plain => Span::raw(seg.text),
            InlineStyle::Strong => {
                Span::styled(seg.text, Style::default().add_modifier(Modifier::BOLD))
            }
            InlineStyle::Code => Span::styled(seg.text, Style::default().fg(Color::Yellow)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_page;
    use qshowcase_content::{Catalog, Topic};

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_section_offset_points_at_header() {
        let page = present_page(&Catalog::standard(), Topic::TeleportationStepsAndCircuitry);
        let rendered = page_lines(&page);
        assert_eq!(
            line_text(&rendered.lines[rendered.section_offset]),
            "Teleportation Steps and Circuitry"
        );
        assert_eq!(
            line_text(&rendered.lines[rendered.section_offset + 2]),
            "• Step 1: Create entanglement."
        );
    }

    #[test]
    fn test_markup_is_styled_not_printed() {
        let page = present_page(&Catalog::standard(), Topic::HistoryOfQuantumMechanics);
        let rendered = page_lines(&page);
        let all: Vec<String> = rendered.lines.iter().map(line_text).collect();
        assert!(all.contains(&"• 1900: Max Planck proposed quantization of energy.".to_string()));
        assert!(all.iter().all(|l| !l.contains("**")));
    }

    #[test]
    fn test_wrapped_rows_fit_width() {
        let page = present_page(&Catalog::standard(), Topic::RvUniversityAndCqst);
        let rendered = page_lines(&page);
        let wrapped = wrap_lines(&rendered.lines, 38);

        assert!(wrapped.rows.len() > rendered.lines.len());
        assert_eq!(wrapped.row_starts.len(), rendered.lines.len());
        assert!(wrapped.rows.iter().all(|row| row.width() <= 38));
        assert_eq!(
            line_text(&wrapped.rows[wrapped.row_starts[rendered.section_offset]]),
            "RV University and the Center for"
        );
    }

    #[test]
    fn test_wrap_breaks_at_spaces_and_keeps_styles() {
        let line = Line::from(vec![
            Span::raw("• "),
            Span::styled("Bold", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": one two three"),
        ]);
        let wrapped = wrap_lines(&[line], 12);
        let rows: Vec<String> = wrapped.rows.iter().map(line_text).collect();
        assert_eq!(rows, vec!["• Bold: one", "two three"]);
        assert_eq!(
            wrapped.rows[0].spans[1].style,
            Style::default().add_modifier(Modifier::BOLD)
        );
    }

    #[test]
    fn test_zero_width_does_not_wrap() {
        let page = present_page(&Catalog::standard(), Topic::default());
        let rendered = page_lines(&page);
        let wrapped = wrap_lines(&rendered.lines, 0);
        assert_eq!(wrapped.rows.len(), rendered.lines.len());
        assert_eq!(wrapped.row_starts[5], 5);
    }

    #[test]
    fn test_footer_is_last() {
        let page = present_page(&Catalog::standard(), Topic::default());
        let rendered = page_lines(&page);
        let last = rendered.lines.last().map(line_text).unwrap();
        assert_eq!(
            last,
            "Explore, learn, and dive deep into the world of quantum mechanics. 🚀"
        );
    }
}
