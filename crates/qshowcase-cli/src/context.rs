use crate::config::Config;
use crate::error::Result;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, DisplayOptions, ViewMode,
};
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::{ColorMode, OutputFormat};
use is_terminal::IsTerminal;
use qshowcase_content::{Catalog, Topic};
use serde::Serialize;

const FALLBACK_WIDTH: usize = 80;

/// Per-invocation settings resolved from flags and config.
pub struct ExecutionContext {
    pub catalog: Catalog,
    pub format: OutputFormat,
    pub enable_color: bool,
    pub default_topic: Topic,
    pub width: usize,
}

impl ExecutionContext {
    pub fn new(format: OutputFormat, color: Option<ColorMode>, config: &Config) -> Result<Self> {
        let color_mode = color.unwrap_or_else(|| config.color());
        let enable_color = color_mode.enabled(std::io::stdout().is_terminal());
        let width = terminal_size::terminal_size()
            .map(|(terminal_size::Width(w), _)| w as usize)
            .unwrap_or(FALLBACK_WIDTH);

        Ok(Self {
            catalog: Catalog::standard(),
            format,
            enable_color,
            default_topic: config.default_topic()?,
            width,
        })
    }

    pub fn json_mode(&self) -> bool {
        self.format == OutputFormat::Json
    }

    pub fn display_options(&self, mode: ViewMode) -> DisplayOptions {
        DisplayOptions {
            mode,
            enable_color: self.enable_color,
            width: self.width,
        }
    }

    /// Render a view model using the configured format
    pub fn render<T>(&self, mode: ViewMode, view_model: CommandResultViewModel<T>) -> anyhow::Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.json_mode(), self.display_options(mode));
        renderer.render(view_model)
    }

    /// Parse an explicit topic, falling back to the configured default
    pub fn resolve_topic(&self, raw: Option<&str>) -> Result<Topic> {
        match raw {
            Some(raw) => Ok(raw.parse::<Topic>()?),
            None => Ok(self.default_topic),
        }
    }
}
