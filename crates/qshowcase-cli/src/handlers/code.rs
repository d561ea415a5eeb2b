use crate::context::ExecutionContext;
use crate::presentation::presenters::present_code_listing;
use crate::presentation::view_models::{CommandResultViewModel, ViewMode};
use anyhow::Result;

pub fn handle(ctx: &ExecutionContext) -> Result<()> {
    let view_model = present_code_listing();
    tracing::debug!(lines = view_model.line_count, "printing code listing");
    ctx.render(ViewMode::Standard, CommandResultViewModel::new(view_model))
}
