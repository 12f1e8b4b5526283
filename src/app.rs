use crate::cli::{Cli, Command};
use crate::commands;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::logging;

pub async fn run(cli: Cli) -> AppResult<()> {
    let Cli {
        site,
        json,
        verbose,
        command,
    } = cli;

    logging::init(verbose)?;
    let ctx = AppContext::bootstrap(site, json)?;

    match command {
        Command::Render(args) => commands::render::run(&ctx, args).await,
        Command::Save(args) => commands::save::run(&ctx, args).await,
        Command::Config(args) => commands::config::run(&ctx, args.command),
    }
}
