//! # docprobe-core
//!
//! Resolves design system component names to their Storybook documentation
//! pages.
//!
//! The Storybook for the Sikt design system does not name its docs pages
//! consistently, so a URL cannot simply be built from a component's display
//! name. Resolution happens in two stages:
//!
//! - **Normalization** ([`normalize`]): a fixed rule table maps the display name
//!   to the path segment the site uses (e.g. `Checkbox` →
//!   `components-input-checkbox`)
//! - **Candidate probing** ([`resolver`]): the segment is combined with each
//!   known suffix pattern and the candidates are checked in priority order
//!   until one responds
//!
//! ## Quick Start
//!
//! ```rust
//! use docprobe_core::{ComponentName, normalize::normalize, candidate::candidate_urls};
//!
//! let name = ComponentName::parse("Email Input")?;
//! let segment = normalize(&name);
//! assert_eq!(segment.as_str(), "components-email-input");
//!
//! for url in candidate_urls(&segment) {
//!     println!("{url}");
//! }
//! # Ok::<(), docprobe_core::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Only blank names are rejected ([`Error::InvalidInput`]). Unreachable
//! candidates are not errors: a resolution that finds nothing returns
//! [`ResolutionResult::NotFound`] with every candidate it tried.

/// Candidate URL construction
pub mod candidate;
/// Probe and batch settings
pub mod config;
/// Error types and result aliases
pub mod error;
/// Component name normalization
pub mod normalize;
/// URL reachability checks
pub mod probe;
/// Ordered candidate probing
pub mod resolver;

pub use candidate::{BASE_URL, Candidate, SUFFIX_PATTERNS};
pub use config::{BatchConfig, Config, ProbeConfig};
pub use error::{Error, Result};
pub use normalize::{CanonicalSegment, ComponentName, NormalizeRule};
pub use probe::{HttpProbe, OfflineProbe, Probe};
pub use resolver::{Resolution, ResolutionResult, Resolver};
