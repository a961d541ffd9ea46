//! CSS Syntax Module Level 3 — Parsing and serialization of style sheets.
//! Spec: <https://www.w3.org/TR/css-syntax-3/>
//!
//! The document model is intentionally shallow: selectors and declaration
//! values are kept as raw text so that rewriting passes can operate on them
//! and serialize them back without loss.

#![forbid(unsafe_code)]

mod serialize;

use cssparser::AtRuleParser as CssAtRuleParser;
use cssparser::BasicParseErrorKind;
use cssparser::CowRcStr;
use cssparser::DeclarationParser as CssDeclarationParser;
use cssparser::ParseError;
use cssparser::Parser;
use cssparser::ParserInput;
use cssparser::ParserState;
use cssparser::QualifiedRuleParser as CssQualifiedRuleParser;
use cssparser::RuleBodyItemParser as CssRuleBodyItemParser;
use cssparser::RuleBodyParser as CssRuleBodyParser;
use cssparser::SourcePosition;
use cssparser::StyleSheetParser;
use cssparser::Token;

/// At-rules whose block contains a nested rule list.
///
/// Spec: <https://www.w3.org/TR/css-conditional-3/#contents-of>
const GROUPING_AT_RULES: [&str; 7] = [
    "media",
    "supports",
    "container",
    "layer",
    "scope",
    "document",
    "starting-style",
];

/// A single CSS declaration (property: value [!important]).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Lowercased property name.
    pub name: String,
    /// Raw value text (without trailing !important).
    pub value: String,
    /// Whether the declaration was marked as `!important`.
    pub important: bool,
}

impl Declaration {
    /// Build a declaration, lowercasing the property name.
    pub fn new(name: &str, value: &str, important: bool) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            value: value.trim().to_owned(),
            important,
        }
    }
}

/// A single style rule with a raw prelude and parsed declarations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleRule {
    /// Raw prelude text (typically the selector list).
    pub prelude: String,
    /// Declarations within the rule block.
    pub declarations: Vec<Declaration>,
}

impl StyleRule {
    /// Build a style rule from a selector and its declarations.
    pub fn new(prelude: &str, declarations: Vec<Declaration>) -> Self {
        Self {
            prelude: prelude.trim().to_owned(),
            declarations,
        }
    }

    /// True if any declaration in the block has the given (lowercase) property name.
    pub fn has_declaration(&self, name: &str) -> bool {
        self.declarations.iter().any(|decl| decl.name == name)
    }
}

/// A grouping at-rule such as `@media` whose block holds nested rules.
///
/// Spec: <https://www.w3.org/TR/css-conditional-3/#processing>
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupRule {
    /// Lowercased at-keyword without the leading `@`.
    pub name: String,
    /// Raw prelude text (media query list, supports condition, layer name...).
    pub prelude: String,
    /// Nested rules in source order.
    pub rules: Vec<CssRule>,
}

/// Any top-level or nested rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CssRule {
    /// A qualified style rule.
    Style(StyleRule),
    /// A grouping at-rule with nested rules.
    Group(GroupRule),
    /// Any other at-rule, kept verbatim (including its block or trailing `;`).
    Raw(String),
}

/// A parsed stylesheet consisting of rules in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stylesheet {
    /// Top-level rules in source order.
    pub rules: Vec<CssRule>,
}

/// Insert `rules` immediately after position `index` of `list`, preserving their order.
///
/// Works on any rule list, including the body of a [`GroupRule`]. Out-of-range
/// indices append to the end. Returns how many rules were inserted.
pub fn insert_rules_after<I>(list: &mut Vec<CssRule>, index: usize, rules: I) -> usize
where
    I: IntoIterator<Item = CssRule>,
{
    let at = index.saturating_add(1).min(list.len());
    let mut inserted = 0_usize;
    for rule in rules {
        list.insert(at.saturating_add(inserted), rule);
        inserted = inserted.saturating_add(1);
    }
    inserted
}

/// Remove and return the rule at `index` of `list`, if present.
pub fn remove_rule(list: &mut Vec<CssRule>, index: usize) -> Option<CssRule> {
    (index < list.len()).then(|| list.remove(index))
}

/// Consume the remaining tokens of a declaration value, splitting off a
/// trailing `! important` (any case, whitespace and comments allowed between).
///
/// Spec: <https://www.w3.org/TR/css-syntax-3/#consume-declaration>
fn consume_value_with_importance<'input>(input: &mut Parser<'input, '_>) -> (&'input str, bool) {
    let start = input.position();
    let mut bang: Option<SourcePosition> = None;
    let mut important = false;
    loop {
        let before = input.position();
        match input.next() {
            Ok(Token::Delim('!')) => {
                bang = Some(before);
                important = false;
            }
            Ok(Token::Ident(ident))
                if bang.is_some() && !important && ident.eq_ignore_ascii_case("important") =>
            {
                important = true;
            }
            Ok(_) => {
                bang = None;
                important = false;
            }
            Err(_) => break,
        }
    }
    match bang {
        Some(end) if important => (input.slice(start..end).trim(), true),
        _ => (input.slice_from(start).trim(), false),
    }
}

/// Consume every remaining token and return the raw text covered by them.
fn consume_raw<'input>(input: &mut Parser<'input, '_>) -> &'input str {
    let start = input.position();
    while input.next_including_whitespace_and_comments().is_ok() {}
    input.slice_from(start)
}

/// A declaration parser that records property name and its raw value.
struct BodyDeclParser;

impl CssDeclarationParser<'_> for BodyDeclParser {
    type Declaration = Declaration;
    type Error = ();

    fn parse_value<'input>(
        &mut self,
        name: CowRcStr<'input>,
        input: &mut Parser<'input, '_>,
        _decl_start: &ParserState,
    ) -> Result<Self::Declaration, ParseError<'input, Self::Error>> {
        // Consume until end of the declaration item.
        let (value, important) = consume_value_with_importance(input);
        Ok(Declaration {
            name: name.to_ascii_lowercase(),
            value: value.to_owned(),
            important,
        })
    }
}

impl CssAtRuleParser<'_> for BodyDeclParser {
    type Prelude = ();
    type AtRule = Declaration; // Not produced
    type Error = ();

    #[inline]
    fn parse_prelude<'input>(
        &mut self,
        _name: CowRcStr<'input>,
        _input: &mut Parser<'input, '_>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        Ok(())
    }

    #[inline]
    fn parse_block<'input>(
        &mut self,
        _prelude: Self::Prelude,
        _state: &ParserState,
        input: &mut Parser<'input, '_>,
    ) -> Result<Self::AtRule, ParseError<'input, Self::Error>> {
        // Not produced by this parser
        Err(input.new_error(BasicParseErrorKind::AtRuleBodyInvalid))
    }

    #[inline]
    fn rule_without_block(
        &mut self,
        _prelude: Self::Prelude,
        _state: &ParserState,
    ) -> Result<Self::AtRule, ()> {
        Err(())
    }
}

impl CssQualifiedRuleParser<'_> for BodyDeclParser {
    type Prelude = ();
    type QualifiedRule = Declaration; // Not produced
    type Error = ();

    #[inline]
    fn parse_prelude<'input>(
        &mut self,
        input: &mut Parser<'input, '_>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        Err(input.new_error(BasicParseErrorKind::QualifiedRuleInvalid))
    }

    #[inline]
    fn parse_block<'input>(
        &mut self,
        _prelude: Self::Prelude,
        _state: &ParserState,
        input: &mut Parser<'input, '_>,
    ) -> Result<Self::QualifiedRule, ParseError<'input, Self::Error>> {
        Err(input.new_error(BasicParseErrorKind::QualifiedRuleInvalid))
    }
}

impl CssRuleBodyItemParser<'_, Declaration, ()> for BodyDeclParser {
    fn parse_declarations(&self) -> bool {
        true
    }
    fn parse_qualified(&self) -> bool {
        false
    }
}

/// Prelude of an at-rule as seen by the rule-list parser.
struct AtPrelude {
    /// Lowercased at-keyword.
    name: String,
    /// Raw prelude text, trimmed.
    prelude: String,
}

/// Rule-list parser that builds `CssRule` items for qualified rules and at-rules.
struct RuleListParser;

impl CssAtRuleParser<'_> for RuleListParser {
    type Prelude = AtPrelude;
    type AtRule = CssRule;
    type Error = ();

    #[inline]
    fn parse_prelude<'input>(
        &mut self,
        name: CowRcStr<'input>,
        input: &mut Parser<'input, '_>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        let prelude = consume_raw(input).trim().to_owned();
        Ok(AtPrelude {
            name: name.to_ascii_lowercase(),
            prelude,
        })
    }

    #[inline]
    fn parse_block<'input>(
        &mut self,
        prelude: Self::Prelude,
        _state: &ParserState,
        input: &mut Parser<'input, '_>,
    ) -> Result<Self::AtRule, ParseError<'input, Self::Error>> {
        let body = consume_raw(input);
        if GROUPING_AT_RULES.contains(&prelude.name.as_str()) {
            return Ok(CssRule::Group(GroupRule {
                name: prelude.name,
                prelude: prelude.prelude,
                rules: parse_rule_list(body),
            }));
        }
        Ok(CssRule::Raw(format!(
            "{} {{{}}}",
            at_rule_head(&prelude),
            body
        )))
    }

    #[inline]
    fn rule_without_block(
        &mut self,
        prelude: Self::Prelude,
        _state: &ParserState,
    ) -> Result<Self::AtRule, ()> {
        Ok(CssRule::Raw(format!("{};", at_rule_head(&prelude))))
    }
}

impl CssQualifiedRuleParser<'_> for RuleListParser {
    type Prelude = String; // raw selector/prelude
    type QualifiedRule = CssRule;
    type Error = ();

    #[inline]
    fn parse_prelude<'input>(
        &mut self,
        input: &mut Parser<'input, '_>,
    ) -> Result<Self::Prelude, ParseError<'input, Self::Error>> {
        Ok(consume_raw(input).trim().to_owned())
    }

    #[inline]
    fn parse_block<'input>(
        &mut self,
        prelude: Self::Prelude,
        _state: &ParserState,
        input: &mut Parser<'input, '_>,
    ) -> Result<Self::QualifiedRule, ParseError<'input, Self::Error>> {
        let decls = parse_declarations_from_block(input);
        Ok(CssRule::Style(StyleRule {
            prelude,
            declarations: decls,
        }))
    }
}

/// `@name prelude`, or just `@name` when the prelude is empty.
fn at_rule_head(prelude: &AtPrelude) -> String {
    if prelude.prelude.is_empty() {
        format!("@{}", prelude.name)
    } else {
        format!("@{} {}", prelude.name, prelude.prelude)
    }
}

/// Parse declarations from a rule block using `cssparser` body parser.
fn parse_declarations_from_block(block: &mut Parser) -> Vec<Declaration> {
    let mut out: Vec<Declaration> = Vec::new();
    let mut body = BodyDeclParser;
    for decl in CssRuleBodyParser::new(block, &mut body).flatten() {
        out.push(decl);
    }
    out
}

/// Parse a list of rules (top level or the body of a grouping rule).
fn parse_rule_list(css: &str) -> Vec<CssRule> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);
    let mut rule_parser = RuleListParser;
    StyleSheetParser::new(&mut parser, &mut rule_parser)
        .flatten()
        .collect()
}

/// Parse a full stylesheet into a `Stylesheet` using cssparser.
pub fn parse_stylesheet(css: &str) -> Stylesheet {
    Stylesheet {
        rules: parse_rule_list(css),
    }
}
