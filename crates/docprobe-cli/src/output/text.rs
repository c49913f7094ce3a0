//! Text output formatting

use std::io::{self, Write};

use colored::Colorize;
use docprobe_core::{Candidate, Resolution, ResolutionResult};

/// Print a found URL.
///
/// Unverified URLs (built without probing) are printed bare so they can be
/// captured by shell substitution.
pub fn print_found(url: &str, verified: bool) {
    if verified {
        println!("{} {url}", "✓ Found:".green());
    } else {
        println!("{url}");
    }
}

/// Write the diagnostics for a component with no reachable candidate.
pub fn write_not_found<W: Write>(out: &mut W, component: &str, tried: &[Candidate]) -> io::Result<()> {
    writeln!(
        out,
        "{} No documentation found for '{}'",
        "✗".red(),
        component.bold()
    )?;
    writeln!(out)?;
    writeln!(out, "Tried patterns:")?;
    write_candidates(out, tried, "  - ")
}

/// Write candidate URLs, one per line, with an optional prefix.
pub fn write_candidates<W: Write>(out: &mut W, candidates: &[Candidate], prefix: &str) -> io::Result<()> {
    for candidate in candidates {
        writeln!(out, "{prefix}{}", candidate.url)?;
    }
    Ok(())
}

/// Write one line summarizing a resolution, as used by batch output.
pub fn write_status_line<W: Write>(out: &mut W, resolution: &Resolution) -> io::Result<()> {
    match &resolution.result {
        ResolutionResult::Found { url, verified, .. } => {
            let mark = if *verified { "✓".green() } else { "·".dimmed() };
            writeln!(out, "{mark} {} → {url}", resolution.component)
        },
        ResolutionResult::NotFound { tried } => writeln!(
            out,
            "{} {} ({} candidates tried)",
            "✗".red(),
            resolution.component,
            tried.len()
        ),
    }
}

/// Print a top-level error message on stderr.
pub fn print_failure(message: &str) {
    eprintln!("{} {message}", "error:".red().bold());
}
