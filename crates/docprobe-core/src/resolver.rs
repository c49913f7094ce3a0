//! Documentation URL resolution.
//!
//! Resolution normalizes a component name, lays out one candidate per suffix
//! pattern, and either returns the first candidate outright (`validate =
//! false`) or probes the candidates in priority order and stops at the first
//! one that answers.
//!
//! ```no_run
//! use docprobe_core::{ComponentName, HttpProbe, ResolutionResult, Resolver};
//!
//! # async fn example() -> docprobe_core::Result<()> {
//! let resolver = Resolver::new(HttpProbe::with_defaults()?);
//! let name = ComponentName::parse("Email Input")?;
//!
//! match resolver.resolve(&name, true).await.result {
//!     ResolutionResult::Found { url, .. } => println!("{url}"),
//!     ResolutionResult::NotFound { tried } => {
//!         for candidate in tried {
//!             println!("tried {}", candidate.url);
//!         }
//!     },
//! }
//! # Ok(())
//! # }
//! ```

use futures::stream::{self, StreamExt};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::Result;
use crate::candidate::{BASE_URL, Candidate, SUFFIX_PATTERNS, candidates_with_base};
use crate::normalize::{CanonicalSegment, ComponentName, normalize};
use crate::probe::Probe;

/// Outcome of resolving one component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResolutionResult {
    /// A documentation URL was selected.
    Found {
        /// The selected URL.
        url: String,
        /// `true` if a probe confirmed the URL, `false` if it was only built.
        verified: bool,
        /// Number of probes issued before the URL was selected.
        probes: usize,
    },
    /// Every candidate was probed and none was reachable.
    NotFound {
        /// All candidates, in the order they were probed.
        tried: Vec<Candidate>,
    },
}

impl ResolutionResult {
    /// The selected URL, if any.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Found { url, .. } => Some(url),
            Self::NotFound { .. } => None,
        }
    }

    /// Returns `true` for [`ResolutionResult::Found`].
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }
}

/// A resolution together with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// The component name as supplied.
    pub component: ComponentName,
    /// Normalized documentation segment.
    pub segment: CanonicalSegment,
    /// What was found.
    #[serde(flatten)]
    pub result: ResolutionResult,
}

/// Resolves component names to Storybook documentation URLs.
#[derive(Debug, Clone)]
pub struct Resolver<P> {
    probe: P,
    base_url: String,
}

impl<P: Probe> Resolver<P> {
    /// Create a resolver for the design system's Storybook.
    pub fn new(probe: P) -> Self {
        Self::with_base_url(probe, BASE_URL)
    }

    /// Create a resolver that builds candidates under another base URL.
    pub fn with_base_url(probe: P, base_url: impl Into<String>) -> Self {
        Self {
            probe,
            base_url: base_url.into(),
        }
    }

    /// Base URL candidates are built under.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve one component name.
    ///
    /// With `validate = false` no probe is issued and the highest-priority
    /// candidate is returned as unverified.
    #[instrument(skip_all, fields(component = %name, validate))]
    pub async fn resolve(&self, name: &ComponentName, validate: bool) -> Resolution {
        let segment = normalize(name);
        let result = if validate {
            self.probe_candidates(&segment).await
        } else {
            self.first_candidate(&segment)
        };

        Resolution {
            component: name.clone(),
            segment,
            result,
        }
    }

    /// Validate `raw` and resolve it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] for blank names. No probe is
    /// issued in that case.
    pub async fn resolve_str(&self, raw: &str, validate: bool) -> Result<Resolution> {
        let name = ComponentName::parse(raw)?;
        Ok(self.resolve(&name, validate).await)
    }

    /// Resolve several names, up to `concurrency` at a time.
    ///
    /// Results come back in input order. Each name's own candidates are still
    /// probed one after another.
    pub async fn resolve_many(
        &self,
        names: &[ComponentName],
        validate: bool,
        concurrency: usize,
    ) -> Vec<Resolution> {
        stream::iter(names.iter().map(|name| self.resolve(name, validate)))
            .buffered(concurrency.max(1))
            .collect()
            .await
    }

    fn first_candidate(&self, segment: &CanonicalSegment) -> ResolutionResult {
        match candidates_with_base(&self.base_url, segment).next() {
            Some(candidate) => ResolutionResult::Found {
                url: candidate.url,
                verified: false,
                probes: 0,
            },
            None => ResolutionResult::NotFound { tried: Vec::new() },
        }
    }

    async fn probe_candidates(&self, segment: &CanonicalSegment) -> ResolutionResult {
        let mut tried = Vec::with_capacity(SUFFIX_PATTERNS.len());

        for candidate in candidates_with_base(&self.base_url, segment) {
            if self.probe.probe(&candidate.url).await {
                debug!(url = %candidate.url, suffix = candidate.suffix, "candidate reachable");
                return ResolutionResult::Found {
                    url: candidate.url,
                    verified: true,
                    probes: tried.len() + 1,
                };
            }
            debug!(url = %candidate.url, "candidate unreachable");
            tried.push(candidate);
        }

        ResolutionResult::NotFound { tried }
    }
}
