//! addcal CLI entry point.

use std::process::ExitCode;

use addcal_core::{LoggingConfig, init_logging};
use clap::Parser;
use tracing::warn;

use addcal_client::cli::{Cli, Command, ConfigAction};
use addcal_client::commands;
use addcal_client::commands::buttons::ButtonFlags;
use addcal_client::config::ClientConfig;
use addcal_client::error::{ClientError, ClientResult};
use addcal_client::event_file;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let logging = LoggingConfig::for_cli(cli.debug, cli.log_format.into());
    if let Err(e) = init_logging(&logging) {
        eprintln!("error: {}", e);
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> ClientResult<()> {
    let config = if let Some(ref path) = cli.config {
        ClientConfig::load_from(path).map_err(ClientError::Config)?
    } else {
        ClientConfig::load().unwrap_or_else(|e| {
            warn!(error = %e, "ignoring unreadable config, using defaults");
            ClientConfig::default()
        })
    };

    match cli.command {
        Command::Link {
            provider,
            event,
            generator_url,
            url_encode,
        } => {
            let event = event_file::resolve(&event)?;
            commands::link::run(
                &config,
                event,
                &provider,
                generator_url.as_deref(),
                url_encode,
            )
        }
        Command::Buttons {
            providers,
            event,
            inline_style,
            generator_url,
            url_encode,
            with_style,
        } => {
            let event = event_file::resolve(&event)?;
            let flags = ButtonFlags {
                inline_style,
                generator_url,
                url_encode,
                with_style,
            };
            commands::buttons::run(&config, event, &providers, &flags)
        }
        Command::Style => commands::style::run(),
        Command::Config { action } => match action {
            ConfigAction::Dump => commands::config::dump(&config),
            ConfigAction::Validate => commands::config::validate(&config),
            ConfigAction::Path => commands::config::path(),
        },
    }
}
