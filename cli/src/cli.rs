//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, OutputFlags};
use crate::commands;
use crate::infra::fs::LocalFs;

/// Render node bootstrap artifacts from a node configuration
#[derive(Parser)]
#[command(
    name = "node-bootstrapper",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render every artifact into a directory
    Render(commands::render::RenderArgs),

    /// Print one artifact
    Show(commands::show::ShowArgs),

    /// Decode a base64 payload from the environment descriptor
    Decode(commands::decode::DecodeArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            no_color,
            quiet,
            json,
            command,
        } = self;
        let app = AppContext::new(&OutputFlags {
            no_color,
            quiet,
            json,
        });
        match command {
            Command::Render(args) => commands::render::run(&app, args, &LocalFs).await,
            Command::Show(args) => commands::show::run(&app, args),
            Command::Decode(args) => commands::decode::run(&app, &args),
            Command::Version => commands::version::run(&app),
        }
    }
}
