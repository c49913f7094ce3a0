//! CLI error handling with exit codes.
//!
//! | Code | Category | Description |
//! |------|----------|-------------|
//! | 0 | - | Command completed successfully |
//! | 1 | `Usage` | Missing or blank component name, bad flags |
//! | 1 | `NotFound` | No candidate URL was reachable |
//! | 1 | `Network` | HTTP client could not be built |
//! | 1 | `Internal` | Anything unexpected |
//! | 2 | `Config` | Config file or environment override is invalid |
//!
//! ```bash
//! if url=$(docprobe resolve --no-validate "Text Area"); then
//!     open "$url"
//! fi
//! ```

use std::fmt;
use std::process::ExitCode;

use docprobe_core::Error as CoreError;

/// Semantic error category determining the exit code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Unexpected or internal error.
    Internal,
    /// Invalid or missing arguments.
    Usage,
    /// No documentation URL was found.
    NotFound,
    /// Network setup failure.
    Network,
    /// Invalid configuration.
    Config,
}

impl ErrorCategory {
    /// Get the exit code for this category.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Config => 2,
            Self::Internal | Self::Usage | Self::NotFound | Self::Network => 1,
        }
    }

    /// Stable identifier used in JSON error output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Internal => "internal",
            Self::Usage => "usage",
            Self::NotFound => "not_found",
            Self::Network => "network",
            Self::Config => "config",
        }
    }

    /// Map a core error onto a CLI category.
    #[must_use]
    pub const fn from_core(err: &CoreError) -> Self {
        match err {
            CoreError::InvalidInput(_) => Self::Usage,
            CoreError::Network(_) => Self::Network,
            CoreError::Config(_) => Self::Config,
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A CLI error with a semantic category for exit code mapping.
#[derive(Debug)]
pub struct CliError {
    /// The semantic category of this error.
    pub category: ErrorCategory,
    /// The underlying error with full context.
    pub source: anyhow::Error,
    /// Set when the command already told the user what went wrong.
    pub reported: bool,
}

impl CliError {
    /// Create a new CLI error with explicit category.
    pub fn new(category: ErrorCategory, source: impl Into<anyhow::Error>) -> Self {
        Self {
            category,
            source: source.into(),
            reported: false,
        }
    }

    /// Create a usage error.
    pub fn usage(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Usage, source)
    }

    /// Create a not-found error.
    pub fn not_found(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::NotFound, source)
    }

    /// Create a configuration error.
    pub fn config(source: impl Into<anyhow::Error>) -> Self {
        Self::new(ErrorCategory::Config, source)
    }

    /// Mark the error as already shown to the user.
    #[must_use]
    pub fn reported(mut self) -> Self {
        self.reported = true;
        self
    }

    /// Get the exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.category.exit_code()
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::new(ErrorCategory::from_core(&err), err)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

/// Determine the category of an `anyhow::Error`.
///
/// `CliError` keeps its own category; a bare core error is mapped; anything
/// else is internal.
#[must_use]
pub fn category_of(err: &anyhow::Error) -> ErrorCategory {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.category;
    }
    if let Some(core_err) = err.downcast_ref::<CoreError>() {
        return ErrorCategory::from_core(core_err);
    }
    ErrorCategory::Internal
}

/// Whether the error was already presented by the failing command.
#[must_use]
pub fn is_reported(err: &anyhow::Error) -> bool {
    err.downcast_ref::<CliError>()
        .is_some_and(|cli_err| cli_err.reported)
}

/// Convert the outcome of a run into a process exit code.
#[must_use]
pub fn exit_code_for(result: &anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => ExitCode::from(category_of(err).exit_code()),
    }
}
