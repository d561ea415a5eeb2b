use crate::context::ExecutionContext;
use crate::error::Error;
use crate::presentation::presenters::{present_page, present_topic_list};
use crate::presentation::renderers::PageSource;
use crate::presentation::TuiRenderer;
use anyhow::Result;
use is_terminal::IsTerminal;
use qshowcase_content::Topic;

pub fn handle(ctx: &ExecutionContext, topic: Option<&str>) -> Result<()> {
    let initial = ctx.resolve_topic(topic)?;

    if ctx.json_mode() {
        return Err(Error::Terminal("browse does not support --format json".to_string()).into());
    }
    if !std::io::stdout().is_terminal() || !std::io::stdin().is_terminal() {
        return Err(Error::Terminal(
            "browse needs an interactive terminal; use `qshowcase show` instead".to_string(),
        )
        .into());
    }

    let catalog = ctx.catalog;
    let source: PageSource =
        Box::new(move |index| Topic::from_index(index).map(|t| present_page(&catalog, t)));

    tracing::info!(topic = initial.slug(), "starting browser");
    let renderer = TuiRenderer::new(
        present_topic_list(&catalog, ctx.default_topic),
        present_page(&catalog, initial),
        initial.index(),
        source,
    );
    renderer.run()
}
