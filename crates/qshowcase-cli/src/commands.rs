use super::args::{Cli, Commands};
use super::handlers;
use crate::config::{Config, resolve_config_path};
use crate::context::ExecutionContext;
use crate::logging;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    logging::init_logging(cli.log_level);

    let config_path = resolve_config_path(cli.config.as_deref())?;
    let config = Config::load_from(&config_path)?;
    let ctx = ExecutionContext::new(cli.format, cli.color, &config)?;

    let command = cli.command.unwrap_or_default();
    tracing::debug!(?command, format = %cli.format, color = ctx.enable_color, "dispatching");

    match command {
        Commands::Show {
            topic,
            section_only,
        } => handlers::show::handle(&ctx, topic.as_deref(), section_only),
        Commands::Topics => handlers::topics::handle(&ctx),
        Commands::Code => handlers::code::handle(&ctx),
        Commands::Browse { topic } => handlers::browse::handle(&ctx, topic.as_deref()),
    }
}
