use anyhow::Result;
use clap::{Parser, Subcommand};
use nbu_rate::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for nbu_rate::AppCommand {
    fn from(cmd: Commands) -> nbu_rate::AppCommand {
        match cmd {
            Commands::Setup => nbu_rate::AppCommand::Setup,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let command = cli
        .command
        .map_or(nbu_rate::AppCommand::Session, Into::into);
    let result = nbu_rate::run_command(command, cli.config_path.as_deref()).await;

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
