//! Construction of the direction-scoped rules for a resolved partition.

use crate::TRANSFORM_PROPERTY;
use crate::classify::Partition;
use crate::options::{LtrOutput, RewriteOptions};
use css_syntax::{Declaration, StyleRule};
use css_writing_modes::{Direction, qualify_selector};

/// A rule to insert after the source rule, carrying a single `transform`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SynthesizedRule {
    /// `None` for an LTR fallback emitted under the bare selector.
    pub direction: Option<Direction>,
    pub selector: String,
    pub value: String,
    pub important: bool,
}

impl SynthesizedRule {
    /// Materialize as a document rule.
    pub fn to_style_rule(&self) -> StyleRule {
        StyleRule::new(
            &self.selector,
            vec![Declaration::new(
                TRANSFORM_PROPERTY,
                &self.value,
                self.important,
            )],
        )
    }
}

/// Build zero, one or two rules for `partition`, LTR first.
///
/// An empty list produces no rule for that direction.
pub fn synthesize_rules(
    selector: &str,
    partition: &Partition,
    important: bool,
    options: &RewriteOptions,
) -> Vec<SynthesizedRule> {
    let mut out = Vec::with_capacity(2);
    if !partition.ltr.is_empty() {
        let (direction, ltr_selector) = match options.ltr_output {
            LtrOutput::Qualified => (
                Some(Direction::Ltr),
                qualify_selector(selector, Direction::Ltr, options.qualifier_style),
            ),
            LtrOutput::Fallback => (None, selector.to_owned()),
        };
        out.push(SynthesizedRule {
            direction,
            selector: ltr_selector,
            value: partition.ltr_value(),
            important,
        });
    }
    if !partition.rtl.is_empty() {
        out.push(SynthesizedRule {
            direction: Some(Direction::Rtl),
            selector: qualify_selector(selector, Direction::Rtl, options.qualifier_style),
            value: partition.rtl_value(),
            important,
        });
    }
    out
}
