//! Substring filter for file references that should not be downloaded.

use serde::{Deserialize, Serialize};

/// Excludes static-weight instances; variable fonts cover them.
pub const STATIC_VARIANTS: &str = "static/";

/// A file reference is skipped if its filename contains any of `patterns`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkipRule {
    patterns: Vec<String>,
}

impl SkipRule {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// The rule the CLI runs with: skip everything under `static/`.
    pub fn static_variants() -> Self {
        Self::new([STATIC_VARIANTS])
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn matches(&self, filename: &str) -> bool {
        self.patterns.iter().any(|p| filename.contains(p.as_str()))
    }
}
