pub mod types;
pub mod commands;
pub mod logging;

use clap::Parser;
use log::error;
use std::path::PathBuf;

use crate::config::{self, Config, ConfigOverrides};
use crate::utils::error::BoxResult;

/// Run the command-line interface
pub fn run() {
    let cli = types::Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let config = match load_config(&cli) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load config: {}", e);
            std::process::exit(1);
        }
    };

    logging::set_log_level(logging::configured_level(cli.debug, &config.log_level));

    let result = match &cli.command {
        types::Commands::Generate { input, output } => {
            commands::handle_generate_command(input, output.as_ref(), &config)
        }
        types::Commands::Toc { input } => commands::handle_toc_command(input, &config),
        types::Commands::Outline { input, format } => {
            commands::handle_outline_command(input, *format, &config)
        }
    };

    if let Err(e) = result {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Load config files from the working directory and apply command line overrides
fn load_config(cli: &types::Cli) -> BoxResult<Config> {
    let mut config = config::load_config(PathBuf::from("."), cli.config.clone())?;

    config.apply_overrides(&ConfigOverrides {
        root_section_id: cli.root_section.clone(),
        max_toc_depth: cli.max_depth,
    });
    config::validate_config(&config)?;

    Ok(config)
}
