//! Logging initialization and configuration.
//!
//! This module handles setting up the tracing subscriber and color control
//! based on CLI flags and environment variables.

use anyhow::Result;
use colored::control as color_control;
use is_terminal::IsTerminal;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::cli::Cli;

/// Initialize the logging subsystem based on CLI flags.
///
/// Logs always go to stderr so stdout only carries results. Machine-readable
/// output drops the level to `ERROR` unless `--verbose` was given.
///
/// # Errors
///
/// Returns an error if the global tracing subscriber cannot be set.
pub fn initialize_logging(cli: &Cli) -> Result<()> {
    let machine_output = cli
        .output_format()
        .is_some_and(|format| format.is_machine_readable());

    let level = level_for(cli.verbose, cli.quiet, machine_output);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    // Color control: disable when requested, NO_COLOR is set, stdout is piped,
    // or when emitting machine output
    let env_no_color = std::env::var_os("NO_COLOR").is_some();
    if cli.no_color || env_no_color || machine_output || !std::io::stdout().is_terminal() {
        color_control::set_override(false);
    }
    Ok(())
}

const fn level_for(verbose: bool, quiet: bool, machine_output: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else if quiet || machine_output {
        Level::ERROR
    } else {
        Level::WARN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_selection() {
        assert_eq!(level_for(false, false, false), Level::WARN);
        assert_eq!(level_for(true, false, false), Level::DEBUG);
        assert_eq!(level_for(true, false, true), Level::DEBUG);
        assert_eq!(level_for(false, true, false), Level::ERROR);
        assert_eq!(level_for(false, false, true), Level::ERROR);
    }
}
