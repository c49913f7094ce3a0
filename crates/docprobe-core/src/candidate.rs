//! Candidate documentation URLs.
//!
//! Storybook's docs pages for the design system follow one of a few path
//! conventions. A candidate is built for each, in the order they are most likely
//! to exist:
//!
//! | Priority | Suffix | Example for `components-button` |
//! |----------|--------|---------------------------------|
//! | 1 | `readme--docs` | `…/docs/components-button-readme--docs` |
//! | 2 | `--docs` | `…/docs/components-button---docs` |
//! | 3 | `--readme` | `…/docs/components-button---readme` |

use serde::Serialize;

use crate::normalize::CanonicalSegment;

/// Base URL of the design system's Storybook docs.
pub const BASE_URL: &str = "https://designsystem.sikt.no/storybook/?path=/docs/";

/// Documentation path suffixes, most likely first.
pub const SUFFIX_PATTERNS: [&str; 3] = ["readme--docs", "--docs", "--readme"];

/// One candidate documentation URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Candidate {
    /// Full URL to probe.
    pub url: String,
    /// Suffix pattern the URL was built from.
    pub suffix: &'static str,
}

impl Candidate {
    /// Build the candidate for `segment` and `suffix` under `base_url`.
    #[must_use]
    pub fn new(base_url: &str, segment: &CanonicalSegment, suffix: &'static str) -> Self {
        Self {
            url: format!("{base_url}{segment}-{suffix}"),
            suffix,
        }
    }
}

/// Lazily yield candidates for `segment` under the default [`BASE_URL`].
pub fn candidates(segment: &CanonicalSegment) -> impl Iterator<Item = Candidate> + '_ {
    candidates_with_base(BASE_URL, segment)
}

/// Lazily yield candidates for `segment` under an arbitrary base URL.
pub fn candidates_with_base<'a>(
    base_url: &'a str,
    segment: &'a CanonicalSegment,
) -> impl Iterator<Item = Candidate> + 'a {
    SUFFIX_PATTERNS
        .into_iter()
        .map(move |suffix| Candidate::new(base_url, segment, suffix))
}

/// All candidate URLs for `segment`, in priority order.
#[must_use]
pub fn candidate_urls(segment: &CanonicalSegment) -> Vec<String> {
    candidates(segment).map(|candidate| candidate.url).collect()
}
