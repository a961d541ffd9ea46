//! CSS Writing Modes Level 4 — Inline base direction.
//! Spec: <https://www.w3.org/TR/css-writing-modes-4/#direction>
//!
//! Selector-level helpers for the `dir` attribute and the `:dir()` pseudo-class:
//! - Detection of a direction qualifier already present in a selector list
//! - Qualification of a selector list for one inline base direction
//! - Top-level splitting of selector lists

#![forbid(unsafe_code)]

mod qualifier;
mod selector_list;

use core::fmt::{Display, Formatter, Result as FmtResult};
use serde::Deserialize;

pub use qualifier::selector_direction;
pub use selector_list::{qualify_selector, split_selector_list};

/// Inline base direction.
/// Spec: Section 2.1 — the `direction` property
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left-to-right.
    Ltr,
    /// Right-to-left.
    Rtl,
}

impl Direction {
    /// Keyword used by both the `dir` attribute and `:dir()`.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }

    /// Parse a direction keyword (ASCII case-insensitive).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        if keyword.eq_ignore_ascii_case("ltr") {
            Some(Self::Ltr)
        } else if keyword.eq_ignore_ascii_case("rtl") {
            Some(Self::Rtl)
        } else {
            None
        }
    }
}

impl Display for Direction {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        formatter.write_str(self.as_str())
    }
}

/// How a selector is scoped to a direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QualifierStyle {
    /// `[dir="rtl"] .sel`
    #[default]
    Attribute,
    /// `.sel:dir(rtl)`
    PseudoClass,
    /// `[dir="rtl"] .sel, .sel:dir(rtl)`
    Both,
}
