use crate::context::ExecutionContext;
use crate::presentation::presenters::present_page;
use crate::presentation::view_models::{CommandResultViewModel, ViewMode};
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext, topic: Option<&str>, section_only: bool) -> Result<()> {
    let topic = ctx.resolve_topic(topic)?;
    tracing::info!(topic = topic.slug(), "rendering page");

    let mode = if section_only {
        ViewMode::Compact
    } else {
        ViewMode::Standard
    };

    let view_model = present_page(&ctx.catalog, topic);
    ctx.render(mode, CommandResultViewModel::new(view_model))
}
