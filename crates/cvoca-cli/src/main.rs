//! cvoca-events CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use cvoca_core::{TracingConfig, init_tracing, today_local};

use cvoca_cli::cli::{Cli, Command, ConfigAction};
use cvoca_cli::commands;
use cvoca_cli::config::CliConfig;
use cvoca_cli::error::{CliError, CliResult};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load configuration
    let config_path = cli.config.clone().unwrap_or_else(CliConfig::default_path);
    let config = match cli.config {
        Some(ref path) => CliConfig::load_from(path),
        None => CliConfig::load(),
    };
    let config = match config {
        Ok(config) => config.with_source_overrides(cli.data_dir.clone(), cli.base_url.clone()),
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Initialize tracing
    let tracing = if cli.debug || config.debug {
        TracingConfig::cli_debug()
    } else {
        TracingConfig::default()
    };
    if let Err(e) = init_tracing(tracing).map_err(CliError::from) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli.command, &config, config_path).await {
        Ok(output) => {
            if !output.is_empty() {
                println!("{}", output);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command, config: &CliConfig, config_path: PathBuf) -> CliResult<String> {
    let store = || config.event_store();
    let today = today_local();

    match command {
        Command::List(args) => commands::events::list(&store()?, config, &args, today).await,
        Command::Upcoming { limit, json } => {
            commands::events::upcoming(&store()?, config, limit, json, today).await
        }
        Command::CalendarUrl { id } => commands::events::calendar_url(&store()?, config, id).await,
        Command::Tags => commands::events::tags(&store()?).await,
        Command::Organizers => commands::events::organizers(&store()?).await,
        Command::Committees { search } => {
            commands::committees::list(&store()?, search.as_deref()).await
        }
        Command::Schema { id } => commands::events::schema(&store()?, config, id).await,
        Command::Config { action } => match action {
            ConfigAction::Dump => commands::config::dump(config, &config_path),
            ConfigAction::Path => commands::config::path(&config_path),
        },
    }
}
