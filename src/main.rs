use clap::Parser;
use std::process::ExitCode;

use javadoc_index::Settings;
use javadoc_index::cli::commands::{index, init};
use javadoc_index::cli::{Cli, Commands};
use javadoc_index::logging;

/// Load layered settings and start logging.
fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let settings = match &cli.config {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Configuration file not found: {}", path.display());
            }
            Settings::load_from(path)?
        }
        None => Settings::load()?,
    };
    logging::init_with_config(&settings.logging);
    Ok(settings)
}

fn run(mut cli: Cli) -> anyhow::Result<()> {
    match cli.command.take().unwrap_or_default() {
        Commands::Init { force } => {
            let config_path = cli
                .config
                .clone()
                .unwrap_or_else(Settings::default_config_path);
            init::run_init(&config_path, force)
        }
        Commands::Config => init::run_config(&load_settings(&cli)?),
        Commands::Index {
            files,
            list,
            output,
            format,
        } => {
            let mut settings = load_settings(&cli)?;
            let args = index::IndexArgs {
                files,
                list,
                output,
                format,
            };
            index::run(args, &mut settings).map(|_| ())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
