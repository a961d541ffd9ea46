//! Explicit diagnostics sink threaded through the rewrite.

use crate::PLUGIN_NAME;
use crate::error::RewriteError;
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::slice::Iter;
use css_syntax::Declaration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// The declaration was left untouched; the rest of the rule proceeds.
    Warning,
    /// The declaration could not be rewritten.
    Error,
}

/// One diagnostic tied to the declaration that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Always [`PLUGIN_NAME`].
    pub plugin: &'static str,
    /// Selector of the rule holding the declaration.
    pub selector: String,
    pub property: String,
    pub value: String,
    pub message: String,
}

impl Diagnostic {
    /// Build a diagnostic for `decl` in the rule selected by `selector`.
    pub fn from_error(error: &RewriteError, selector: &str, decl: &Declaration) -> Self {
        Self {
            severity: error.severity(),
            plugin: PLUGIN_NAME,
            selector: selector.to_owned(),
            property: decl.name.clone(),
            value: decl.value.clone(),
            message: error.to_string(),
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        let level = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(
            formatter,
            "{level}[{}]: {} ({} {{ {}: {} }})",
            self.plugin, self.message, self.selector, self.property, self.value
        )
    }
}

/// Append-only, ordered collection of diagnostics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.entries.iter()
    }

    pub fn has_errors(&self) -> bool {
        self.entries
            .iter()
            .any(|diagnostic| diagnostic.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Warning)
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.with_severity(Severity::Error)
    }

    fn with_severity(&self, severity: Severity) -> impl Iterator<Item = &Diagnostic> {
        self.entries
            .iter()
            .filter(move |diagnostic| diagnostic.severity == severity)
    }
}

impl<'diag> IntoIterator for &'diag Diagnostics {
    type Item = &'diag Diagnostic;
    type IntoIter = Iter<'diag, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
