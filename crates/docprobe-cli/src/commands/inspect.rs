//! Offline inspection commands: `normalize` and `candidates`
//!
//! Neither command touches the network. They show what `resolve` would do
//! with a name, which helps when a component's docs page is not found.

use anyhow::Result;
use docprobe_core::normalize::{kebab_case, normalize_with_rule};
use docprobe_core::{Candidate, CanonicalSegment, ComponentName, NormalizeRule, candidate};
use serde::Serialize;

use super::component_name;
use crate::cli::NameArgs;
use crate::output::{self, OutputFormat};

#[derive(Serialize)]
struct SegmentReport<'a> {
    component: &'a ComponentName,
    kebab: String,
    segment: &'a CanonicalSegment,
    rule: NormalizeRule,
}

#[derive(Serialize)]
struct CandidateReport<'a> {
    component: &'a ComponentName,
    segment: &'a CanonicalSegment,
    candidates: Vec<Candidate>,
}

/// Execute `docprobe normalize`.
pub fn show_segment(args: &NameArgs) -> Result<()> {
    let name = component_name(&args.name, "normalize")?;
    let (segment, rule) = normalize_with_rule(&name);
    let format = args.format.resolve();

    if format == OutputFormat::Text {
        println!("{segment}");
        return Ok(());
    }

    output::print_json(
        &SegmentReport {
            component: &name,
            kebab: kebab_case(name.as_str()),
            segment: &segment,
            rule,
        },
        format,
    )
}

/// Execute `docprobe candidates`.
pub fn show_candidates(args: &NameArgs) -> Result<()> {
    let name = component_name(&args.name, "candidates")?;
    let (segment, _) = normalize_with_rule(&name);
    let candidates: Vec<Candidate> = candidate::candidates(&segment).collect();
    let format = args.format.resolve();

    if format == OutputFormat::Text {
        output::write_candidates(&mut std::io::stdout().lock(), &candidates, "")?;
        return Ok(());
    }

    output::print_json(
        &CandidateReport {
            component: &name,
            segment: &segment,
            candidates,
        },
        format,
    )
}
