//! Serialization of the document model back to CSS text.
//! Spec: <https://www.w3.org/TR/cssom-1/#serializing-css-values>

use crate::{CssRule, Declaration, GroupRule, StyleRule, Stylesheet};
use core::fmt::{Display, Formatter, Result as FmtResult, Write as _};

/// Indentation unit for rule bodies.
const INDENT: &str = "  ";

impl Display for Declaration {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        write!(formatter, "{}: {}", self.name, self.value)?;
        if self.important {
            formatter.write_str(" !important")?;
        }
        formatter.write_char(';')
    }
}

impl Display for StyleRule {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        write_style_rule(formatter, self, "")
    }
}

impl Display for GroupRule {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        write_group_rule(formatter, self, "")
    }
}

impl Display for CssRule {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        write_rule(formatter, self, "")
    }
}

impl Display for Stylesheet {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FmtResult {
        write_rule_list(formatter, &self.rules, "")
    }
}

impl Stylesheet {
    /// Serialize the sheet to CSS text, one rule per block, separated by blank lines.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

fn write_rule_list(formatter: &mut Formatter<'_>, rules: &[CssRule], indent: &str) -> FmtResult {
    for (index, rule) in rules.iter().enumerate() {
        if index > 0 {
            formatter.write_char('\n')?;
        }
        write_rule(formatter, rule, indent)?;
        formatter.write_char('\n')?;
    }
    Ok(())
}

fn write_rule(formatter: &mut Formatter<'_>, rule: &CssRule, indent: &str) -> FmtResult {
    match rule {
        CssRule::Style(style) => write_style_rule(formatter, style, indent),
        CssRule::Group(group) => write_group_rule(formatter, group, indent),
        CssRule::Raw(text) => write!(formatter, "{indent}{text}"),
    }
}

fn write_style_rule(formatter: &mut Formatter<'_>, rule: &StyleRule, indent: &str) -> FmtResult {
    writeln!(formatter, "{indent}{} {{", rule.prelude)?;
    for decl in &rule.declarations {
        writeln!(formatter, "{indent}{INDENT}{decl}")?;
    }
    write!(formatter, "{indent}}}")
}

fn write_group_rule(formatter: &mut Formatter<'_>, rule: &GroupRule, indent: &str) -> FmtResult {
    if rule.prelude.is_empty() {
        writeln!(formatter, "{indent}@{} {{", rule.name)?;
    } else {
        writeln!(formatter, "{indent}@{} {} {{", rule.name, rule.prelude)?;
    }
    let nested = format!("{indent}{INDENT}");
    write_rule_list(formatter, &rule.rules, &nested)?;
    write!(formatter, "{indent}}}")
}
