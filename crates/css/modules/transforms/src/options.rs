//! Rewrite configuration.

use anyhow::{Context as _, Result};
use css_writing_modes::QualifierStyle;
use serde::Deserialize;

/// When the RTL partition carries the mirror matrix.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MirrorSeed {
    /// RTL always starts with the mirror, so even `rotate(0deg)` yields an RTL rule.
    #[default]
    Always,
    /// The mirror is prepended only when other RTL functions exist.
    WhenContent,
}

/// How the LTR partition is emitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LtrOutput {
    /// A rule scoped with an `ltr` qualifier.
    #[default]
    Qualified,
    /// A rule under the bare original selector, overridden by the RTL rule.
    Fallback,
}

/// Options for the logical transform rewrite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RewriteOptions {
    /// Attribute, pseudo-class, or both forms of direction qualifier.
    pub qualifier_style: QualifierStyle,
    /// Seeding policy for the mirror matrix.
    pub mirror_seed: MirrorSeed,
    /// Emission policy for the LTR partition.
    pub ltr_output: LtrOutput,
}

impl RewriteOptions {
    /// Load options from a JSON object; missing keys take their defaults.
    ///
    /// # Errors
    /// Returns an error if the text is not valid JSON or names an unknown variant.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("invalid logical transform options")
    }
}
