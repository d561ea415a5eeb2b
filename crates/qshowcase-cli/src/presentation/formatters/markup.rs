//! Inline markup used in section text: `**strong**` and `` `code` ``.

use owo_colors::OwoColorize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineStyle {
    Plain,
    Strong,
    Code,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub style: InlineStyle,
}

impl Segment {
    fn new(text: &str, style: InlineStyle) -> Self {
        Self {
            text: text.to_string(),
            style,
        }
    }
}

/// Split text into styled segments with markers removed.
///
/// An opening marker without a matching close is kept as literal text.
pub fn parse_inline(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut i = 0;

    while i < text.len() {
        let rest = &text[i..];
        let (marker, style) = if rest.starts_with("**") {
            ("**", InlineStyle::Strong)
        } else if rest.starts_with('`') {
            ("`", InlineStyle::Code)
        } else {
            i += rest.chars().next().map_or(1, char::len_utf8);
            continue;
        };

        let body_start = i + marker.len();
        match text[body_start..].find(marker) {
            Some(len) if len > 0 => {
                if plain_start < i {
                    segments.push(Segment::new(&text[plain_start..i], InlineStyle::Plain));
                }
                segments.push(Segment::new(&text[body_start..body_start + len], style));
                i = body_start + len + marker.len();
                plain_start = i;
            }
            _ => i = body_start,
        }
    }

    if plain_start < text.len() {
        segments.push(Segment::new(&text[plain_start..], InlineStyle::Plain));
    }
    segments
}

/// Markup text for the console: verbatim without color, styled with color
pub fn render_inline(text: &str, enable_color: bool) -> String {
    if !enable_color {
        return text.to_string();
    }

    parse_inline(text)
        .into_iter()
        .map(|seg| match seg.style {
            InlineStyle::Plain => seg.text,
            InlineStyle::Strong => seg.text.bold().to_string(),
            InlineStyle::Code => seg.text.yellow().to_string(),
        })
        .collect()
}
