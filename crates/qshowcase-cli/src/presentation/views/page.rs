use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::formatters::{render_inline, rule};
use crate::presentation::view_models::{
    BlockViewModel, DisplayOptions, ListItemViewModel, PageViewModel, ViewMode,
};

const LIST_INDENT: &str = "    ";

pub struct PageView<'a> {
    data: &'a PageViewModel,
    options: DisplayOptions,
}

impl<'a> PageView<'a> {
    pub fn new(data: &'a PageViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }

    fn section_blocks(&self) -> impl Iterator<Item = BlockViewModel> + '_ {
        std::iter::once(BlockViewModel::Heading {
            level: 2,
            text: self.data.section.header.clone(),
        })
        .chain(self.data.section.blocks.iter().cloned())
    }
}

impl<'a> fmt::Display for PageView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let blocks: Vec<BlockViewModel> = match self.options.mode {
            ViewMode::Compact => self.section_blocks().collect(),
            ViewMode::Standard => self
                .data
                .intro
                .iter()
                .cloned()
                .chain(std::iter::once(self.data.exploration.clone()))
                .chain(self.section_blocks())
                .chain(self.data.footer.iter().cloned())
                .collect(),
        };

        for (i, block) in blocks.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write_block(f, block, &self.options)?;
        }
        Ok(())
    }
}

/// Write one block followed by a newline
fn write_block(
    f: &mut fmt::Formatter<'_>,
    block: &BlockViewModel,
    options: &DisplayOptions,
) -> fmt::Result {
    let color = options.enable_color;

    match block {
        BlockViewModel::Heading { level, text } => {
            if !color {
                return writeln!(f, "{} {}", "#".repeat(*level as usize), text);
            }
            match *level {
                1 => writeln!(f, "{}", text.bold().underline().bright_cyan()),
                2 => writeln!(f, "{}", text.bold().cyan()),
                _ => writeln!(f, "{}", text.bold()),
            }
        }
        BlockViewModel::Code {
            language, source, ..
        } => {
            if color {
                writeln!(f, "{}", format!("[{}]", language).dimmed())?;
                for line in source.lines() {
                    writeln!(f, "  {}", line.green())?;
                }
                Ok(())
            } else {
                writeln!(f, "```{}", language)?;
                write!(f, "{}", source)?;
                if !source.ends_with('\n') {
                    writeln!(f)?;
                }
                writeln!(f, "```")
            }
        }
        BlockViewModel::Paragraph { text } => writeln!(f, "{}", render_inline(text, color)),
        BlockViewModel::List { ordered, items } => write_items(f, items, *ordered, 0, color),
        BlockViewModel::Link { label, url } => {
            if color {
                writeln!(f, "{}: {}", label, url.underline().blue())
            } else {
                writeln!(f, "[{}]({})", label, url)
            }
        }
        BlockViewModel::Rule => writeln!(f, "{}", rule(options.width, color)),
    }
}

fn write_items(
    f: &mut fmt::Formatter<'_>,
    items: &[ListItemViewModel],
    ordered: bool,
    depth: usize,
    color: bool,
) -> fmt::Result {
    let indent = LIST_INDENT.repeat(depth);
    for (i, item) in items.iter().enumerate() {
        let marker = match (ordered, color) {
            (true, _) => format!("{}.", i + 1),
            (false, false) => "-".to_string(),
            (false, true) => "•".to_string(),
        };
        writeln!(f, "{}{} {}", indent, marker, render_inline(&item.text, color))?;
        if !item.children.is_empty() {
            write_items(f, &item.children, item.ordered_children, depth + 1, color)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::present_page;
    use qshowcase_content::{Catalog, Topic};

    fn render(topic: Topic, mode: ViewMode) -> String {
        let vm = present_page(&Catalog::standard(), topic);
        let options = DisplayOptions {
            mode,
            ..DisplayOptions::default()
        };
        PageView::new(&vm, options).to_string()
    }

    #[test]
    fn test_history_compact_output() {
        let out = render(Topic::HistoryOfQuantumMechanics, ViewMode::Compact);
        assert_eq!(
            out,
            "## History of Quantum Mechanics\n\
             \n\
             - **1900**: Max Planck proposed quantization of energy.\n\
             - **1925-27**: Schrödinger and Heisenberg formalized quantum mechanics.\n\
             - **1980s**: Feynman envisioned quantum computers.\n"
        );
    }

    #[test]
    fn test_nested_pauli_gates_are_indented() {
        let out = render(Topic::QuantumGatesAndOperations, ViewMode::Compact);
        assert!(out.contains("- **Pauli Gates**:\n    - X: Flips |0⟩ ↔ |1⟩.\n    - Z: Phase-flip on |1⟩.\n"));
    }

    #[test]
    fn test_walkthrough_steps_are_numbered() {
        let out = render(Topic::ProjectCodeWalkthrough, ViewMode::Compact);
        assert!(out.contains("- **Teleport Operation**:\n    1. Generates entanglement.\n"));
        assert!(out.contains("    3. Applies corrections conditionally.\n"));
    }

    #[test]
    fn test_standard_output_order() {
        let out = render(Topic::HistoryOfQuantumMechanics, ViewMode::Standard);
        assert!(out.starts_with("# Quantum Teleportation: Project Showcase and Deep Dive\n\n"));

        let code = out.find("```qsharp\nnamespace Sample {").unwrap();
        let description = out.find("### Code Description:").unwrap();
        let explore = out
            .find("## Explore More About Quantum Mechanics and Teleportation")
            .unwrap();
        let section = out.find("## History of Quantum Mechanics").unwrap();
        let footer = out.find("---\n\nExplore, learn, and dive deep").unwrap();
        assert!(code < description && description < explore);
        assert!(explore < section && section < footer);
        assert!(out.ends_with("quantum mechanics. 🚀\n"));
    }

    #[test]
    fn test_section_appears_exactly_once() {
        let out = render(Topic::default(), ViewMode::Standard);
        assert_eq!(out.matches("## Project Code Walkthrough").count(), 1);
    }

    #[test]
    fn test_link_is_markdown_without_color() {
        let out = render(Topic::RvUniversityAndCqst, ViewMode::Compact);
        assert!(out.ends_with("[Visit CQST: RV University](https://www.rvu.edu.in)\n"));
    }

    #[test]
    fn test_color_output_strips_markers() {
        let vm = present_page(&Catalog::standard(), Topic::HistoryOfQuantumMechanics);
        let options = DisplayOptions {
            mode: ViewMode::Compact,
            enable_color: true,
            width: 40,
        };
        let out = PageView::new(&vm, options).to_string();
        assert!(!out.contains("**"));
        assert!(out.contains("• "));
    }
}
