//! CSS Transforms Level 1 — Logical (direction-agnostic) `transform` values.
//! Spec: <https://www.w3.org/TR/css-transforms-1/#transform-property>
//!
//! A declaration such as
//!
//! ```css
//! .indicator { transform: logical rotate(90deg); }
//! ```
//!
//! is resolved into one rule per inline base direction:
//!
//! ```css
//! [dir="ltr"] .indicator { transform: rotate(90deg); }
//! [dir="rtl"] .indicator { transform: matrix(-1, 0, 0, 1, 0, 0) rotate(90deg); }
//! ```
//!
//! The rule-level entry point is [`rewrite_rule`], a pure function over one
//! style rule. [`rewrite_stylesheet`] and [`process_css`] apply it across a
//! whole sheet.

#![forbid(unsafe_code)]

mod classify;
mod diagnostics;
mod error;
mod options;
mod rewrite;
mod synthesize;

pub use classify::{Partition, classify_transform};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::RewriteError;
pub use options::{LtrOutput, MirrorSeed, RewriteOptions};
pub use rewrite::{
    Rewrite, RewriteOutput, RewriteStats, RuleOutcome, SkipReason, process_css, rewrite_rule,
    rewrite_stylesheet,
};
pub use synthesize::{SynthesizedRule, synthesize_rules};

/// Identifier attached to every diagnostic emitted by this crate.
pub const PLUGIN_NAME: &str = "css-transform-logical";

/// Sentinel keyword that opts a `transform` value into logical resolution.
pub const LOGICAL_MARKER: &str = "logical";

/// Horizontal flip applied ahead of the RTL function list.
pub const MIRROR_MATRIX: &str = "matrix(-1, 0, 0, 1, 0, 0)";

/// The only property inspected.
pub const TRANSFORM_PROPERTY: &str = "transform";
