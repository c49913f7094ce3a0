//! Batch resolution
//!
//! ```bash
//! docprobe batch Button "Email Input" Checkbox
//! docprobe batch --file components.txt --concurrency 8 -f jsonl
//! printf 'Button\nText Area\n' | docprobe batch --file -
//! ```
//!
//! Name files hold one component per line. Blank lines and lines starting with
//! `#` are skipped.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use clap::Args;
use docprobe_core::{ComponentName, Config, HttpProbe, OfflineProbe, Resolution, Resolver};
use tracing::debug;

use crate::error::CliError;
use crate::output::{self, FormatArg};

/// Arguments for `docprobe batch`
#[derive(Args, Clone, Debug)]
pub struct BatchArgs {
    /// Component names; each argument is one name (quote multi-word names)
    #[arg(value_name = "COMPONENT_NAME")]
    pub names: Vec<String>,

    /// Read additional names from a file, one per line (`-` for stdin)
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Build the most likely URLs without checking that they exist
    #[arg(long)]
    pub no_validate: bool,

    /// How many components to resolve at the same time
    #[arg(
        long,
        value_name = "N",
        value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub concurrency: Option<usize>,

    /// Per-probe timeout in seconds
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    #[command(flatten)]
    pub format: FormatArg,
}

/// Execute `docprobe batch`.
///
/// Fails with a not-found error if any component could not be resolved.
pub async fn execute(args: BatchArgs, config: &Config) -> Result<()> {
    let names = collect_names(&args)?;
    let format = args.format.resolve();

    let mut probe_config = config.probe.clone();
    if let Some(timeout_secs) = args.timeout {
        probe_config.timeout_secs = timeout_secs;
    }
    let concurrency = args.concurrency.unwrap_or(config.batch.concurrency);
    debug!(count = names.len(), concurrency, "resolving batch");

    let resolutions = if args.no_validate {
        Resolver::new(OfflineProbe)
            .resolve_many(&names, false, concurrency)
            .await
    } else {
        Resolver::new(HttpProbe::new(&probe_config).map_err(CliError::from)?)
            .resolve_many(&names, true, concurrency)
            .await
    };

    if format.is_machine_readable() {
        output::print_json_list(&resolutions, format)?;
    } else {
        let mut stdout = std::io::stdout().lock();
        for resolution in &resolutions {
            output::write_status_line(&mut stdout, resolution)?;
        }
    }

    ensure_all_found(&resolutions)
}

fn ensure_all_found(resolutions: &[Resolution]) -> Result<()> {
    let missing = resolutions.iter().filter(|r| !r.result.is_found()).count();
    if missing == 0 {
        Ok(())
    } else {
        Err(CliError::not_found(anyhow!(
            "{missing} of {} components had no documentation",
            resolutions.len()
        ))
        .into())
    }
}

fn collect_names(args: &BatchArgs) -> Result<Vec<ComponentName>> {
    let mut raw: Vec<String> = args.names.clone();
    if let Some(path) = &args.file {
        raw.extend(read_name_list(path)?);
    }

    if raw.is_empty() {
        return Err(CliError::usage(anyhow!(
            "missing component names\n\nUsage: docprobe batch <COMPONENT_NAME>... [--file <PATH>]"
        ))
        .into());
    }

    raw.into_iter()
        .map(|name| ComponentName::parse(name).map_err(|e| anyhow::Error::from(CliError::from(e))))
        .collect()
}

fn read_name_list(path: &Path) -> Result<Vec<String>> {
    let content = if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read component names from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read component names from {}", path.display()))?
    };
    Ok(parse_name_list(&content))
}

fn parse_name_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{ErrorCategory, category_of, is_reported};

    fn args(names: &[&str]) -> BatchArgs {
        BatchArgs {
            names: names.iter().map(ToString::to_string).collect(),
            file: None,
            no_validate: true,
            concurrency: None,
            timeout: None,
            format: FormatArg::default(),
        }
    }

    #[test]
    fn test_parse_name_list_skips_comments_and_blanks() {
        let names = parse_name_list("# inputs\nCheckbox\n\n  Text Area  \n#Button\nRadio\n");
        assert_eq!(names, ["Checkbox", "Text Area", "Radio"]);
    }

    #[test]
    fn test_collect_names_from_args_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.txt");
        std::fs::write(&path, "Accordion\n").unwrap();

        let mut batch = args(&["Button"]);
        batch.file = Some(path);

        let names = collect_names(&batch).unwrap();
        let names: Vec<&str> = names.iter().map(ComponentName::as_str).collect();
        assert_eq!(names, ["Button", "Accordion"]);
    }

    #[tokio::test]
    async fn test_missing_component_fails_batch() {
        let names = [
            ComponentName::parse("Button").unwrap(),
            ComponentName::parse("Zzz").unwrap(),
        ];
        let resolver = Resolver::new(OfflineProbe);

        let built = resolver.resolve_many(&names, false, 2).await;
        assert!(ensure_all_found(&built).is_ok());

        let checked = resolver.resolve_many(&names, true, 2).await;
        let err = ensure_all_found(&checked).unwrap_err();
        assert_eq!(category_of(&err), ErrorCategory::NotFound);
        assert_eq!(err.to_string(), "2 of 2 components had no documentation");
        assert!(!is_reported(&err));
    }

    #[test]
    fn test_collect_names_rejects_empty_and_blank() {
        let err = collect_names(&args(&[])).unwrap_err();
        assert_eq!(category_of(&err), ErrorCategory::Usage);

        let err = collect_names(&args(&["Button", "   "])).unwrap_err();
        assert_eq!(category_of(&err), ErrorCategory::Usage);
    }
}
