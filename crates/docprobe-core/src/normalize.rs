//! Component name normalization.
//!
//! The design system's Storybook files components under paths that do not
//! always match their display names. Most notably, form controls live under an
//! `input-` segment (`Checkbox` is documented at `components-input-checkbox`)
//! even though the word "input" never appears in the name.
//!
//! ## Rule precedence
//!
//! 1. **Kebab-case**: lowercase, collapse whitespace runs into single hyphens
//! 2. **Explicit input**: a kebab name containing `input` is used unchanged
//! 3. **Input keyword**: a kebab name containing any [`INPUT_KEYWORDS`] entry
//!    gets the `input-` prefix, except `text-area` which becomes `textarea`
//! 4. **Default**: everything else is prefixed with `components-` only
//!
//! Keyword matching is substring containment, not whole-word matching, so a
//! name like "Textile" is treated as an input component.
//!
//! ```rust
//! use docprobe_core::normalize::normalize_str;
//!
//! assert_eq!(normalize_str("Text Area")?.as_str(), "components-input-textarea");
//! assert_eq!(normalize_str("Button")?.as_str(), "components-button");
//! # Ok::<(), docprobe_core::Error>(())
//! ```

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::{Error, Result};

/// Prefix shared by every component documentation path.
pub const COMPONENTS_PREFIX: &str = "components-";

/// Prefix used for input-category components.
pub const INPUT_COMPONENTS_PREFIX: &str = "components-input-";

/// Keywords that mark a component as belonging to the input category.
pub const INPUT_KEYWORDS: [&str; 13] = [
    "checkbox",
    "radio",
    "select",
    "combobox",
    "datepicker",
    "file",
    "email",
    "text",
    "password",
    "number",
    "tel",
    "search",
    "textarea",
];

const EXPLICIT_INPUT_MARKER: &str = "input";
const TEXT_AREA_KEBAB: &str = "text-area";
const TEXT_AREA_SEGMENT: &str = "components-input-textarea";

/// A validated, non-blank component name as entered by a human.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ComponentName(String);

impl ComponentName {
    /// Validate a raw component name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] when the name is empty or contains only
    /// whitespace.
    pub fn parse(raw: impl Into<String>) -> Result<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(Error::InvalidInput(
                "component name must not be empty or whitespace-only".to_string(),
            ));
        }
        Ok(Self(raw))
    }

    /// Join command-line style words into a single component name.
    ///
    /// `["Email", "Input"]` becomes `"Email Input"`.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Self> {
        let joined = words
            .iter()
            .map(AsRef::as_ref)
            .collect::<Vec<_>>()
            .join(" ");
        Self::parse(joined)
    }

    /// The name exactly as supplied.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The normalized path fragment identifying a component's documentation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalSegment(String);

impl CanonicalSegment {
    /// The segment as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalSegment {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Which normalization rule produced a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizeRule {
    /// The name already contained `input` and was used unchanged.
    ExplicitInput,
    /// The literal `text-area` override.
    TextAreaOverride,
    /// An input-category keyword matched.
    InputKeyword,
    /// No rule matched; plain `components-` prefix.
    Default,
}

impl NormalizeRule {
    /// Stable identifier used in output and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ExplicitInput => "explicit_input",
            Self::TextAreaOverride => "text_area_override",
            Self::InputKeyword => "input_keyword",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for NormalizeRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lowercase a name and join its whitespace-separated words with hyphens.
///
/// Leading and trailing whitespace is dropped, and any run of interior
/// whitespace becomes a single hyphen. Other characters pass through.
#[must_use]
pub fn kebab_case(text: &str) -> String {
    text.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Normalize a component name into its canonical documentation segment.
pub fn normalize(name: &ComponentName) -> CanonicalSegment {
    normalize_with_rule(name).0
}

/// Normalize a component name and report which rule fired.
pub fn normalize_with_rule(name: &ComponentName) -> (CanonicalSegment, NormalizeRule) {
    let kebab = kebab_case(name.as_str());

    let (segment, rule) = if kebab.contains(EXPLICIT_INPUT_MARKER) {
        (
            format!("{COMPONENTS_PREFIX}{kebab}"),
            NormalizeRule::ExplicitInput,
        )
    } else if INPUT_KEYWORDS.iter().any(|keyword| kebab.contains(keyword)) {
        if kebab == TEXT_AREA_KEBAB {
            (
                TEXT_AREA_SEGMENT.to_string(),
                NormalizeRule::TextAreaOverride,
            )
        } else {
            (
                format!("{INPUT_COMPONENTS_PREFIX}{kebab}"),
                NormalizeRule::InputKeyword,
            )
        }
    } else {
        (format!("{COMPONENTS_PREFIX}{kebab}"), NormalizeRule::Default)
    };

    debug!(name = %name, %segment, rule = %rule, "normalized component name");
    (CanonicalSegment(segment), rule)
}

/// Validate and normalize a raw string in one step.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] for empty or whitespace-only names.
pub fn normalize_str(raw: &str) -> Result<CanonicalSegment> {
    ComponentName::parse(raw).map(|name| normalize(&name))
}
