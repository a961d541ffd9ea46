//! Selector list splitting and direction qualification.
//! Spec: <https://www.w3.org/TR/selectors-4/#grouping>

use crate::{Direction, QualifierStyle};
use cssparser::{Parser, ParserInput, Token};

/// Pseudo-elements that may still be written with a single colon.
/// Spec: <https://www.w3.org/TR/selectors-4/#pseudo-element-syntax>
const LEGACY_PSEUDO_ELEMENTS: [&str; 4] = ["before", "after", "first-line", "first-letter"];

/// Split a selector list at top-level commas.
///
/// Commas nested in functional pseudo-classes (`:is(a, b)`) or attribute
/// values do not split. Empty entries are dropped.
pub fn split_selector_list(selector: &str) -> Vec<String> {
    let mut input = ParserInput::new(selector);
    let mut parser = Parser::new(&mut input);
    let mut out = Vec::new();
    let mut start = parser.position();
    loop {
        let before = parser.position();
        match parser.next_including_whitespace_and_comments() {
            Ok(Token::Comma) => {
                push_trimmed(&mut out, parser.slice(start..before));
                start = parser.position();
            }
            Ok(_) => {}
            Err(_) => {
                push_trimmed(&mut out, parser.slice_from(start));
                break;
            }
        }
    }
    out
}

fn push_trimmed(out: &mut Vec<String>, text: &str) {
    let trimmed = text.trim();
    if !trimmed.is_empty() {
        out.push(trimmed.to_owned());
    }
}

/// Scope every complex selector of `selector` to `direction`.
///
/// `Both` lists all attribute-qualified selectors first, then all
/// pseudo-class-qualified ones.
pub fn qualify_selector(selector: &str, direction: Direction, style: QualifierStyle) -> String {
    let complex = split_selector_list(selector);
    let mut out: Vec<String> = Vec::with_capacity(complex.len().saturating_mul(2));
    if matches!(style, QualifierStyle::Attribute | QualifierStyle::Both) {
        out.extend(
            complex
                .iter()
                .map(|sel| format!("[dir=\"{direction}\"] {sel}")),
        );
    }
    if matches!(style, QualifierStyle::PseudoClass | QualifierStyle::Both) {
        out.extend(
            complex
                .iter()
                .map(|sel| with_dir_pseudo_class(sel, direction)),
        );
    }
    out.join(", ")
}

/// Append `:dir(..)` to the subject compound, ahead of any pseudo-element.
fn with_dir_pseudo_class(selector: &str, direction: Direction) -> String {
    let pseudo = format!(":dir({direction})");
    match pseudo_element_start(selector)
        .and_then(|at| Some((selector.get(..at)?, selector.get(at..)?)))
    {
        Some((head, tail)) => format!("{head}{pseudo}{tail}"),
        None => format!("{selector}{pseudo}"),
    }
}

/// Byte offset of the last top-level pseudo-element (`::x` or legacy `:before`).
fn pseudo_element_start(selector: &str) -> Option<usize> {
    let mut input = ParserInput::new(selector);
    let mut parser = Parser::new(&mut input);
    let mut pending_colon: Option<usize> = None;
    let mut found = None;
    loop {
        let at = parser.position().byte_index();
        let Ok(token) = parser.next_including_whitespace_and_comments() else {
            break;
        };
        match token {
            Token::Colon => {
                if pending_colon.is_some() {
                    found = pending_colon.take();
                } else {
                    pending_colon = Some(at);
                }
                continue;
            }
            Token::Ident(name)
                if pending_colon.is_some()
                    && LEGACY_PSEUDO_ELEMENTS
                        .iter()
                        .any(|legacy| name.eq_ignore_ascii_case(legacy)) =>
            {
                found = pending_colon;
            }
            _ => {}
        }
        pending_colon = None;
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_pseudo_elements() {
        assert_eq!(pseudo_element_start(".a::before"), Some(2));
        assert_eq!(pseudo_element_start(".a:hover::after"), Some(8));
        assert_eq!(pseudo_element_start(".a:after"), Some(2));
        assert_eq!(pseudo_element_start(".a:hover"), None);
        assert_eq!(pseudo_element_start(".a:is(.b::before)"), None);
    }
}
