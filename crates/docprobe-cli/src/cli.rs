//! # CLI Structure and Argument Parsing
//!
//! ```bash
//! # Find the docs page for a component
//! docprobe resolve Email Input
//!
//! # Build the most likely URL without touching the network
//! docprobe resolve --no-validate Text Area
//!
//! # Inspect the rule table
//! docprobe normalize Checkbox
//! docprobe candidates Checkbox
//!
//! # Resolve many components at once
//! docprobe batch Button "Email Input" Checkbox --concurrency 8
//! ```
//!
//! Multi-word component names may be passed unquoted to `resolve`,
//! `normalize` and `candidates`; the words are joined with single spaces.
//! `batch` treats every argument as a separate name.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::commands::BatchArgs;
use crate::output::FormatArg;

/// Main CLI structure for the `docprobe` command
#[derive(Parser, Clone, Debug)]
#[command(name = "docprobe")]
#[command(version)]
#[command(
    about = "docprobe - find Sikt design system Storybook documentation for a component",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable debug logging on stderr
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true, value_name = "PATH", env = "DOCPROBE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available subcommands
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// Find the documentation URL for a component
    Resolve(ResolveArgs),

    /// Show the canonical path segment for a component name
    Normalize(NameArgs),

    /// List every candidate URL for a component, in probing order
    Candidates(NameArgs),

    /// Resolve several components concurrently
    Batch(BatchArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Arguments for `docprobe resolve`
#[derive(Args, Clone, Debug)]
pub struct ResolveArgs {
    /// Component name; multiple words are joined with spaces
    #[arg(value_name = "COMPONENT_NAME")]
    pub name: Vec<String>,

    /// Print the most likely URL without checking that it exists
    #[arg(long)]
    pub no_validate: bool,

    /// Per-probe timeout in seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    #[command(flatten)]
    pub format: FormatArg,
}

/// A component name plus output format, for commands that never probe
#[derive(Args, Clone, Debug)]
pub struct NameArgs {
    /// Component name; multiple words are joined with spaces
    #[arg(value_name = "COMPONENT_NAME")]
    pub name: Vec<String>,

    #[command(flatten)]
    pub format: FormatArg,
}

impl Cli {
    /// Output format selected by the current subcommand, if it has one.
    #[must_use]
    pub fn output_format(&self) -> Option<crate::output::OutputFormat> {
        match &self.command {
            Some(Commands::Resolve(args)) => Some(args.format.resolve()),
            Some(Commands::Normalize(args) | Commands::Candidates(args)) => {
                Some(args.format.resolve())
            },
            Some(Commands::Batch(args)) => Some(args.format.resolve()),
            Some(Commands::Completions { .. }) | None => None,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_resolve_collects_words() {
        let cli = Cli::try_parse_from(["docprobe", "resolve", "Email", "Input", "--json"]).unwrap();
        match cli.command {
            Some(Commands::Resolve(args)) => {
                assert_eq!(args.name, ["Email", "Input"]);
                assert!(!args.no_validate);
                assert_eq!(args.format.resolve(), OutputFormat::Json);
            },
            other => panic!("expected resolve, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_without_name_parses() {
        // Missing names are reported by the command with exit code 1
        let cli = Cli::try_parse_from(["docprobe", "resolve"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Resolve(args)) if args.name.is_empty()));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(Cli::try_parse_from(["docprobe", "resolve", "Button", "--timeout", "0"]).is_err());
    }

    #[test]
    fn test_output_format_for_batch() {
        let cli = Cli::try_parse_from(["docprobe", "batch", "Button", "-f", "jsonl"]).unwrap();
        assert_eq!(cli.output_format(), Some(OutputFormat::Jsonl));
    }
}
