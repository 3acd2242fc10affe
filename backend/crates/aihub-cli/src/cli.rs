use crate::commands::Commands;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "aihub")]
#[command(about = "AI Hub account and session management")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Auth backend URL (overrides client.base_url from config)
    #[arg(long, global = true)]
    pub server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
