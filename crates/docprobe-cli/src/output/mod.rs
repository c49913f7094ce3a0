//! # Output Formatting
//!
//! Commands print either human-readable text or machine-readable JSON.
//!
//! ```bash
//! docprobe resolve Button                 # text
//! docprobe resolve Button --json          # one JSON object
//! docprobe batch Button Checkbox -f jsonl # one JSON object per line
//! ```
//!
//! Text is the default even when stdout is piped, so `docprobe resolve
//! --no-validate Button` stays usable in shell substitutions.

mod text;

use std::io::Write;

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::Serialize;

pub use text::{print_failure, print_found, write_candidates, write_not_found, write_status_line};

/// Output format for CLI results.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable formatted text (default).
    #[default]
    Text,
    /// JSON format for machine consumption.
    Json,
    /// JSON Lines format (one JSON object per line).
    Jsonl,
}

impl OutputFormat {
    /// Check if this format is machine-readable (JSON or JSONL).
    #[must_use]
    pub const fn is_machine_readable(self) -> bool {
        matches!(self, Self::Json | Self::Jsonl)
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Jsonl => write!(f, "jsonl"),
        }
    }
}

/// Shared clap argument for commands that accept an output format.
#[derive(Args, Clone, Debug, Default, PartialEq, Eq)]
pub struct FormatArg {
    /// Output format (text, json, jsonl)
    #[arg(short = 'f', long = "format", value_enum, env = "DOCPROBE_OUTPUT_FORMAT")]
    pub format: Option<OutputFormat>,

    /// Output as JSON (shorthand for --format json)
    #[arg(long, conflicts_with = "format")]
    pub json: bool,
}

impl FormatArg {
    /// Returns the effective output format.
    #[must_use]
    pub fn resolve(&self) -> OutputFormat {
        if self.json {
            return OutputFormat::Json;
        }
        self.format.unwrap_or_default()
    }
}

/// Print `value` as pretty JSON (or compact JSON for JSONL) on stdout.
pub fn print_json<T: Serialize>(value: &T, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Jsonl => serde_json::to_string(value)?,
        OutputFormat::Json | OutputFormat::Text => serde_json::to_string_pretty(value)?,
    };
    writeln!(std::io::stdout(), "{rendered}")?;
    Ok(())
}

/// Print a sequence of JSON values: an array for JSON, one line each for JSONL.
pub fn print_json_list<T: Serialize>(values: &[T], format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Jsonl {
        for value in values {
            print_json(value, format)?;
        }
        Ok(())
    } else {
        print_json(&values, format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_arg_defaults_to_text() {
        assert_eq!(FormatArg::default().resolve(), OutputFormat::Text);
    }

    #[test]
    fn test_json_shorthand() {
        let arg = FormatArg {
            format: None,
            json: true,
        };
        assert_eq!(arg.resolve(), OutputFormat::Json);
    }

    #[test]
    fn test_machine_readable() {
        assert!(OutputFormat::Json.is_machine_readable());
        assert!(OutputFormat::Jsonl.is_machine_readable());
        assert!(!OutputFormat::Text.is_machine_readable());
        assert_eq!(OutputFormat::Jsonl.to_string(), "jsonl");
    }
}
