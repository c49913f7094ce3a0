//! Command implementations for the docprobe CLI

mod batch;
mod completions;
mod inspect;
mod resolve;

pub use batch::{BatchArgs, execute as resolve_batch};
pub use completions::generate;
pub use inspect::{show_candidates, show_segment};
pub use resolve::execute as resolve_component;

use anyhow::anyhow;
use docprobe_core::ComponentName;

use crate::error::CliError;

/// Join positional words into a component name.
///
/// No words at all is a usage error that names the subcommand, so the message
/// reads the same as a clap usage hint.
pub(crate) fn component_name(words: &[String], command: &str) -> Result<ComponentName, CliError> {
    if words.is_empty() {
        return Err(CliError::usage(anyhow!(
            "missing component name\n\nUsage: docprobe {command} <COMPONENT_NAME>...\n\n\
             Examples:\n  docprobe {command} Button\n  docprobe {command} Email Input\n  \
             docprobe {command} 'Text Area'"
        )));
    }
    ComponentName::from_words(words).map_err(CliError::from)
}
