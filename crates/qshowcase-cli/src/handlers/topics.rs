use crate::context::ExecutionContext;
use crate::presentation::presenters::present_topic_list;
use crate::presentation::view_models::{CommandResultViewModel, Guidance, StatusBadge, ViewMode};
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let view_model = present_topic_list(&ctx.catalog, ctx.default_topic);
    tracing::debug!(count = view_model.topics.len(), "listing topics");

    let result = CommandResultViewModel::new(view_model)
        .with_badge(StatusBadge::info(format!(
            "{} topics",
            ctx.catalog.topics().count()
        )))
        .with_suggestion(
            Guidance::new("Show a topic").with_command("qshowcase show --topic <slug>"),
        )
        .with_suggestion(Guidance::new("Browse interactively").with_command("qshowcase browse"));

    ctx.render(ViewMode::Standard, result)
}
