//! Detection of direction qualifiers in selectors.
//! Spec: <https://www.w3.org/TR/selectors-4/#the-dir-pseudo>

use crate::Direction;
use cssparser::{ParseError, Parser, ParserInput, Token};

/// Return the first direction a selector list is scoped to, if any.
///
/// Recognizes `[dir=ltr]`, `[dir="rtl"]`, `[dir='rtl' i]` and `:dir(rtl)`,
/// including occurrences nested in functional pseudo-classes such as `:is()`.
pub fn selector_direction(selector: &str) -> Option<Direction> {
    let mut input = ParserInput::new(selector);
    let mut parser = Parser::new(&mut input);
    find_direction(&mut parser)
}

/// Walk tokens at the current nesting level, descending into blocks.
fn find_direction(input: &mut Parser<'_, '_>) -> Option<Direction> {
    let mut after_colon = false;
    while let Ok(token) = input.next_including_whitespace() {
        let token = token.clone();
        let found = match &token {
            Token::SquareBracketBlock => in_block(input, attribute_direction),
            Token::Function(name) if after_colon && name.eq_ignore_ascii_case("dir") => {
                in_block(input, pseudo_class_direction)
            }
            Token::Function(_) | Token::ParenthesisBlock => in_block(input, find_direction),
            _ => None,
        };
        if found.is_some() {
            return found;
        }
        after_colon = matches!(token, Token::Colon);
    }
    None
}

/// Run `inspect` over the block just opened and drain whatever it leaves behind.
fn in_block<F>(input: &mut Parser<'_, '_>, inspect: F) -> Option<Direction>
where
    F: FnOnce(&mut Parser<'_, '_>) -> Option<Direction>,
{
    input
        .parse_nested_block(|block| {
            let found = inspect(block);
            while block.next_including_whitespace_and_comments().is_ok() {}
            Ok::<_, ParseError<'_, ()>>(found)
        })
        .ok()
        .flatten()
}

/// `dir = ltr|rtl` inside an attribute selector; quotes and the `i`/`s` flag are optional.
fn attribute_direction(block: &mut Parser<'_, '_>) -> Option<Direction> {
    match block.next() {
        Ok(Token::Ident(name)) if name.eq_ignore_ascii_case("dir") => {}
        _ => return None,
    }
    match block.next() {
        Ok(Token::Delim('=')) => {}
        _ => return None,
    }
    match block.next() {
        Ok(Token::Ident(value) | Token::QuotedString(value)) => Direction::from_keyword(value),
        _ => None,
    }
}

/// The argument of `:dir()`.
fn pseudo_class_direction(block: &mut Parser<'_, '_>) -> Option<Direction> {
    match block.next() {
        Ok(Token::Ident(value)) => Direction::from_keyword(value),
        _ => None,
    }
}
