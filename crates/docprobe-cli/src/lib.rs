//! docprobe CLI - find Sikt design system Storybook documentation
//!
//! This is the library behind the `docprobe` binary. Command implementations
//! live in [`commands`]; this module parses arguments, sets up logging, loads
//! configuration and turns the outcome into an exit code.
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Result, anyhow};
use clap::{CommandFactory, Parser};
use docprobe_core::Config;

mod cli;
mod commands;
pub mod error;
mod output;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::{CliError, category_of, is_reported};
use crate::output::OutputFormat;
use crate::utils::initialize_logging;

/// Execute the docprobe CLI with the current process arguments.
///
/// Errors are printed here rather than returned, so the caller only has to
/// exit with the returned code.
pub async fn run() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = initialize_logging(&cli) {
        output::print_failure(&format!("failed to initialize logging: {err}"));
        return ExitCode::FAILURE;
    }

    let format = cli.output_format().unwrap_or_default();
    let result = execute_command(cli).await;

    if let Err(err) = &result {
        report_error(err, format);
    }
    error::exit_code_for(&result)
}

async fn execute_command(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Resolve(args)) => {
            let config = load_config(cli.config.as_deref())?;
            commands::resolve_component(args, &config, cli.quiet).await
        },
        Some(Commands::Normalize(args)) => commands::show_segment(&args),
        Some(Commands::Candidates(args)) => commands::show_candidates(&args),
        Some(Commands::Batch(args)) => {
            let config = load_config(cli.config.as_deref())?;
            commands::resolve_batch(args, &config).await
        },
        Some(Commands::Completions { shell }) => {
            commands::generate(shell);
            Ok(())
        },
        None => {
            // No subcommand provided - show help
            Cli::command().print_help()?;
            Ok(())
        },
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let loaded = match path {
        Some(path) if !path.exists() => {
            return Err(CliError::config(anyhow!(
                "config file not found: {}",
                path.display()
            ))
            .into());
        },
        Some(path) => Config::load_with(Some(path), |key| std::env::var(key).ok()),
        None => Config::load(),
    };
    loaded.map_err(|e| CliError::config(e).into())
}

fn report_error(err: &anyhow::Error, format: OutputFormat) {
    if is_reported(err) {
        return;
    }

    // CliError already displays its wrapped source; only plain errors need the chain
    let message = if err.downcast_ref::<CliError>().is_some() {
        err.to_string()
    } else {
        format!("{err:#}")
    };

    if format.is_machine_readable() {
        let payload = serde_json::json!({
            "error": message,
            "category": category_of(err).as_str(),
        });
        eprintln!("{payload}");
    } else {
        output::print_failure(&message);
    }
}
