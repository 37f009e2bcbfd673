use super::args::{Cli, Commands};
use super::handlers;
use super::handlers::show::ShowOptions;
use crate::config::resolve_data_dir;
use crate::context::ExecutionContext;
use crate::logging;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_data_dir(cli.data_dir.as_deref())?;
    logging::init(&data_dir, cli.log_level)?;
    tracing::debug!(data_dir = %data_dir.display(), "starting");

    let ctx = ExecutionContext::new(data_dir, cli.format);

    let Some(command) = cli.command else {
        return handlers::show::handle(
            &ctx,
            ShowOptions {
                cycles: 1,
                ..ShowOptions::default()
            },
        );
    };

    match command {
        Commands::Show {
            topic,
            play,
            interval_ms,
            cycles,
        } => handlers::show::handle(
            &ctx,
            ShowOptions {
                topic,
                play,
                interval_ms,
                cycles,
            },
        ),
        Commands::List => handlers::list::handle(&ctx),
        Commands::Describe { topic } => handlers::describe::handle(&ctx, &topic),
        Commands::Complete { topic } => handlers::complete::handle(&ctx, &topic),
        Commands::Progress => handlers::progress::handle(&ctx),
        Commands::Ask { message } => handlers::ask::handle(&ctx, &message),
        Commands::Init { force } => handlers::init::handle(&ctx, force),
    }
}
