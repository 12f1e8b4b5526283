use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use url::Url;

#[derive(Debug, Parser)]
#[command(
    name = "profilecard",
    version,
    about = "Render employee profile cards and save them as vCards"
)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        default_value = "default",
        help = "Site settings to use"
    )]
    pub site: String,
    #[arg(long, global = true, help = "Emit JSON output")]
    pub json: bool,
    #[arg(short = 'v', long, global = true, action = ArgAction::Count, help = "Verbose logging")]
    pub verbose: u8,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Render(RenderArgs),
    Save(SaveArgs),
    Config(ConfigArgs),
}

#[derive(Debug, Args)]
pub struct RenderArgs {
    #[arg(help = "Page url carrying the profile token, e.g. https://cards.example.com/?token=abc")]
    pub url: Url,
    #[arg(long, help = "Write the card markup to a file instead of stdout")]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct SaveArgs {
    #[arg(help = "Page url carrying the profile token")]
    pub url: Url,
    #[arg(long, help = "Override the vCard file name")]
    pub file_name: Option<String>,
    #[arg(long, help = "Directory to save into")]
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    Show,
}
