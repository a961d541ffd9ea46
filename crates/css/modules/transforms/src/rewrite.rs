//! Per-rule rewrite and the sheet-level adapter that applies it in place.

use crate::TRANSFORM_PROPERTY;
use crate::classify::{Partition, classify_transform};
use crate::diagnostics::{Diagnostic, Diagnostics, Severity};
use crate::options::RewriteOptions;
use crate::synthesize::{SynthesizedRule, synthesize_rules};
use anyhow::{Result, bail};
use css_syntax::{
    CssRule, Declaration, StyleRule, Stylesheet, insert_rules_after, parse_stylesheet, remove_rule,
};
use css_writing_modes::selector_direction;
use log::{debug, trace, warn};

/// Why a rule was left alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The rule has no `transform` declaration.
    NoTransform,
    /// The selector is already scoped to a direction.
    DirectionQualified,
    /// No `transform` value starts with the `logical` marker.
    NotLogical,
}

/// Result of rewriting one rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rewrite {
    /// Declarations left on the source rule; empty means the rule is removed.
    pub remaining: Vec<Declaration>,
    /// Rules to insert immediately after the source rule, in order.
    pub synthesized: Vec<SynthesizedRule>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleOutcome {
    Skipped(SkipReason),
    /// A logical declaration was rejected with an error; nothing was emitted.
    Failed,
    /// Only warnings were recorded (an empty value, say); nothing was emitted.
    Warned,
    Rewritten(Rewrite),
}

/// Rewrite the logical `transform` declarations of one style rule.
///
/// The rule itself is not modified. Failures are recorded in `diagnostics`
/// and never abort processing of the remaining declarations.
pub fn rewrite_rule(
    rule: &StyleRule,
    options: &RewriteOptions,
    diagnostics: &mut Diagnostics,
) -> RuleOutcome {
    if !rule.has_declaration(TRANSFORM_PROPERTY) {
        return RuleOutcome::Skipped(SkipReason::NoTransform);
    }
    if let Some(direction) = selector_direction(&rule.prelude) {
        trace!(target: "css_transforms", "skipping {:?}: already scoped to {direction}", rule.prelude);
        return RuleOutcome::Skipped(SkipReason::DirectionQualified);
    }

    // Later declarations win, as they would in the cascade.
    let mut resolved: Option<(Partition, bool)> = None;
    let mut worst: Option<Severity> = None;
    let mut remaining = Vec::with_capacity(rule.declarations.len());
    for decl in &rule.declarations {
        if decl.name != TRANSFORM_PROPERTY {
            remaining.push(decl.clone());
            continue;
        }
        match classify_transform(&decl.value, options.mirror_seed) {
            Ok(Some(partition)) => resolved = Some((partition, decl.important)),
            Ok(None) => remaining.push(decl.clone()),
            Err(error) => {
                let diagnostic = Diagnostic::from_error(&error, &rule.prelude, decl);
                warn!(target: "css_transforms", "{diagnostic}");
                worst = worst.max(Some(diagnostic.severity));
                diagnostics.push(diagnostic);
                remaining.push(decl.clone());
            }
        }
    }

    match resolved {
        Some((partition, important)) => {
            let synthesized = synthesize_rules(&rule.prelude, &partition, important, options);
            debug!(
                target: "css_transforms",
                "rewrote {:?} into {} directional rule(s)",
                rule.prelude,
                synthesized.len()
            );
            RuleOutcome::Rewritten(Rewrite {
                remaining,
                synthesized,
            })
        }
        None => match worst {
            Some(Severity::Error) => RuleOutcome::Failed,
            Some(Severity::Warning) => RuleOutcome::Warned,
            None => RuleOutcome::Skipped(SkipReason::NotLogical),
        },
    }
}

/// Counters for one sheet pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RewriteStats {
    /// Style rules inspected (synthesized rules are never revisited).
    pub visited: usize,
    pub rewritten: usize,
    /// Rules left alone because of an error diagnostic.
    pub failed: usize,
    /// Rules left alone with only warning diagnostics.
    pub warned: usize,
    /// Source rules removed because no declarations remained.
    pub removed: usize,
}

/// Rewrite every style rule in `sheet`, including rules nested in grouping rules.
pub fn rewrite_stylesheet(
    sheet: &mut Stylesheet,
    options: &RewriteOptions,
    diagnostics: &mut Diagnostics,
) -> RewriteStats {
    let mut stats = RewriteStats::default();
    rewrite_rule_list(&mut sheet.rules, options, diagnostics, &mut stats);
    debug!(target: "css_transforms", "logical transform pass: {stats:?}");
    stats
}

fn rewrite_rule_list(
    rules: &mut Vec<CssRule>,
    options: &RewriteOptions,
    diagnostics: &mut Diagnostics,
    stats: &mut RewriteStats,
) {
    let mut index = 0;
    while index < rules.len() {
        let outcome = match rules.get_mut(index) {
            Some(CssRule::Style(style)) => {
                stats.visited = stats.visited.saturating_add(1);
                Some(rewrite_rule(style, options, diagnostics))
            }
            Some(CssRule::Group(group)) => {
                rewrite_rule_list(&mut group.rules, options, diagnostics, stats);
                None
            }
            Some(CssRule::Raw(_)) | None => None,
        };
        let occupied = outcome.map_or(1, |result| apply_outcome(rules, index, result, stats));
        index = index.saturating_add(occupied);
    }
}

/// Apply `outcome` to the rule at `index`; returns how many slots the result occupies.
fn apply_outcome(
    rules: &mut Vec<CssRule>,
    index: usize,
    outcome: RuleOutcome,
    stats: &mut RewriteStats,
) -> usize {
    let Rewrite {
        remaining,
        synthesized,
    } = match outcome {
        RuleOutcome::Skipped(_) => return 1,
        RuleOutcome::Failed => {
            stats.failed = stats.failed.saturating_add(1);
            return 1;
        }
        RuleOutcome::Warned => {
            stats.warned = stats.warned.saturating_add(1);
            return 1;
        }
        RuleOutcome::Rewritten(rewrite) => rewrite,
    };
    stats.rewritten = stats.rewritten.saturating_add(1);

    let inserted = insert_rules_after(
        rules,
        index,
        synthesized
            .iter()
            .map(|rule| CssRule::Style(rule.to_style_rule())),
    );
    if remaining.is_empty() {
        if remove_rule(rules, index).is_some() {
            stats.removed = stats.removed.saturating_add(1);
        }
        return inserted;
    }
    if let Some(CssRule::Style(style)) = rules.get_mut(index) {
        style.declarations = remaining;
    }
    inserted.saturating_add(1)
}

/// Serialized result of [`process_css`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RewriteOutput {
    pub css: String,
    pub diagnostics: Diagnostics,
    pub stats: RewriteStats,
}

impl RewriteOutput {
    /// Return the CSS, or fail if any error diagnostic was recorded.
    ///
    /// # Errors
    /// Returns an error listing every error diagnostic of the pass.
    pub fn into_result(self) -> Result<String> {
        if self.diagnostics.has_errors() {
            let messages: Vec<String> = self
                .diagnostics
                .errors()
                .map(ToString::to_string)
                .collect();
            bail!(
                "{} logical transform error(s):\n{}",
                messages.len(),
                messages.join("\n")
            );
        }
        Ok(self.css)
    }
}

/// Parse, rewrite and serialize a style sheet.
pub fn process_css(css: &str, options: &RewriteOptions) -> RewriteOutput {
    let mut sheet = parse_stylesheet(css);
    let mut diagnostics = Diagnostics::new();
    let stats = rewrite_stylesheet(&mut sheet, options, &mut diagnostics);
    RewriteOutput {
        css: sheet.to_css(),
        diagnostics,
        stats,
    }
}
