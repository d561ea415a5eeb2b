use owo_colors::OwoColorize;
use std::fmt;

use crate::presentation::view_models::{DisplayOptions, TopicListViewModel};

pub struct TopicListView<'a> {
    data: &'a TopicListViewModel,
    options: DisplayOptions,
}

impl<'a> TopicListView<'a> {
    pub fn new(data: &'a TopicListViewModel, options: DisplayOptions) -> Self {
        Self { data, options }
    }
}

impl<'a> fmt::Display for TopicListView<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .data
            .topics
            .iter()
            .map(|t| t.label.chars().count())
            .max()
            .unwrap_or(0);

        writeln!(f, "Select a Topic to Explore:")?;
        for topic in &self.data.topics {
            let label = format!("{:<width$}", topic.label, width = width);
            let marker = if topic.is_default { "  (default)" } else { "" };
            if self.options.enable_color {
                let label = if topic.is_default {
                    label.bold().to_string()
                } else {
                    label
                };
                writeln!(
                    f,
                    "{:>2}. {}  {}{}",
                    topic.position,
                    label,
                    topic.slug.cyan(),
                    marker.dimmed()
                )?;
            } else {
                writeln!(
                    f,
                    "{:>2}. {}  {}{}",
                    topic.position, label, topic.slug, marker
                )?;
            }
        }
        Ok(())
    }
}
