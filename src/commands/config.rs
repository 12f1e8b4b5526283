use std::path::PathBuf;

use serde::Serialize;

use crate::cli::ConfigCommand;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::output::OutputMode;

#[derive(Debug, Serialize)]
struct ResolvedSettings<'a> {
    site: &'a str,
    settings_file: PathBuf,
    endpoint: &'a str,
    organization: &'a str,
    placeholder_photo: &'a str,
    download_dir: PathBuf,
}

pub fn run(ctx: &AppContext, command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Show => show(ctx),
    }
}

fn show(ctx: &AppContext) -> AppResult<()> {
    let resolved = ResolvedSettings {
        site: &ctx.site,
        settings_file: ctx.paths.settings_file(&ctx.site),
        endpoint: ctx.settings.endpoint(),
        organization: ctx.settings.organization(),
        placeholder_photo: ctx.settings.placeholder_photo(),
        download_dir: ctx.settings.download_dir(),
    };

    if ctx.output.mode() == OutputMode::Text {
        println!("site: {}", resolved.site);
        println!("settings file: {}", resolved.settings_file.display());
        println!("endpoint: {}", resolved.endpoint);
        println!("organization: {}", resolved.organization);
        println!("placeholder photo: {}", resolved.placeholder_photo);
        println!("download dir: {}", resolved.download_dir.display());
        return Ok(());
    }

    ctx.output.emit("", &resolved)
}
