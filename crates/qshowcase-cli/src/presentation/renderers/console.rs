use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::{self, Write as _};
use std::io::Write as _;

use super::traits::Renderer;
use crate::presentation::view_models::{CommandResultViewModel, CreateView, DisplayOptions};

pub struct ConsoleRenderer {
    json_mode: bool,
    options: DisplayOptions,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool, options: DisplayOptions) -> Self {
        Self { json_mode, options }
    }

    /// Text (or JSON) exactly as `render` would print it
    pub fn render_to_string<T>(&self, result: &CommandResultViewModel<T>) -> Result<String>
    where
        T: Serialize + CreateView,
    {
        if self.json_mode {
            return Ok(format!("{}\n", serde_json::to_string_pretty(result)?));
        }
        let mut out = String::new();
        self.write_text(&mut out, result)?;
        Ok(out)
    }

    fn write_text<T>(&self, out: &mut String, result: &CommandResultViewModel<T>) -> fmt::Result
    where
        T: Serialize + CreateView,
    {
        let color = self.options.enable_color;

        if let Some(badge) = &result.badge {
            if color {
                writeln!(out, "{} {}", badge.icon(), badge.label.bold())?;
            } else {
                writeln!(out, "{} {}", badge.icon(), badge.label)?;
            }
            writeln!(out)?;
        }

        write!(out, "{}", result.content.create_view(self.options))?;

        if !result.suggestions.is_empty() {
            if color {
                writeln!(out, "\n{}", "💡 Tips:".yellow().bold())?;
            } else {
                writeln!(out, "\n💡 Tips:")?;
            }
            for tip in &result.suggestions {
                write!(out, "  • {}", tip.description)?;
                if let Some(cmd) = &tip.command {
                    if color {
                        write!(out, ": {}", cmd.cyan())?;
                    } else {
                        write!(out, ": {}", cmd)?;
                    }
                }
                writeln!(out)?;
            }
        }

        Ok(())
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let text = self.render_to_string(&result)?;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }
}
