//! Resolve command implementation
//!
//! ```bash
//! docprobe resolve Button              # probe candidates, print the first that exists
//! docprobe resolve Text Area --json    # same, as JSON
//! docprobe resolve --no-validate Radio # build the most likely URL, no network
//! ```

use anyhow::{Result, anyhow};
use docprobe_core::{Config, HttpProbe, OfflineProbe, ResolutionResult, Resolver};
use tracing::debug;

use super::component_name;
use crate::cli::ResolveArgs;
use crate::error::CliError;
use crate::output::{self, OutputFormat};

/// Execute `docprobe resolve`.
///
/// Succeeds when a URL was found (or built, with `--no-validate`). A
/// resolution that finds nothing prints every tried candidate and fails with
/// a not-found error.
pub async fn execute(args: ResolveArgs, config: &Config, quiet: bool) -> Result<()> {
    let name = component_name(&args.name, "resolve")?;
    let format = args.format.resolve();
    let validate = !args.no_validate;

    let mut probe_config = config.probe.clone();
    if let Some(timeout_secs) = args.timeout {
        probe_config.timeout_secs = timeout_secs;
    }
    debug!(timeout_secs = probe_config.timeout_secs, validate, "resolving component");

    let resolution = if validate {
        let resolver = Resolver::new(HttpProbe::new(&probe_config).map_err(CliError::from)?);
        if format == OutputFormat::Text && !quiet {
            eprintln!("Searching for: {name}");
        }
        resolver.resolve(&name, true).await
    } else {
        Resolver::new(OfflineProbe).resolve(&name, false).await
    };

    if format.is_machine_readable() {
        output::print_json(&resolution, format)?;
    } else {
        match &resolution.result {
            ResolutionResult::Found { url, verified, .. } => output::print_found(url, *verified),
            ResolutionResult::NotFound { tried } => {
                output::write_not_found(
                    &mut std::io::stdout().lock(),
                    resolution.component.as_str(),
                    tried,
                )?;
            },
        }
    }

    if resolution.result.is_found() {
        Ok(())
    } else {
        Err(CliError::not_found(anyhow!("No documentation found for '{name}'"))
            .reported()
            .into())
    }
}
