pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

pub enum AppCommand {
    Session,
    Setup,
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    match command {
        AppCommand::Setup => cli::setup::setup(),
        AppCommand::Session => {
            let config = load_config(config_path)?;
            cli::ui::set_window_title();

            let stdin = std::io::stdin();
            let mut input = stdin.lock();
            let mut output = std::io::stdout();
            run_session(&config, &mut input, &mut output).await
        }
    }
}

pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");
    Ok(config)
}

/// Runs the interactive session against the NBU provider from `config`.
pub async fn run_session<R: BufRead, W: Write>(
    config: &AppConfig,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    info!("NBU rate lookup starting...");

    let provider = providers::NbuProvider::new(config.nbu_base_url())?;
    cli::session::run(&provider, input, output).await
}
