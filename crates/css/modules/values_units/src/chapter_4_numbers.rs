//! CSS Values & Units Level 3 — §4 Numbers
//! Spec: <https://www.w3.org/TR/css-values-3/#numeric-types>

use crate::ParseError;
use cssparser::Parser;
use cssparser::Token;

/// A CSS <number>
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Number(pub f32);

/// Parse a CSS <number> (§4.2). Accepts integer or real numbers, skipping leading whitespace.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not a `<number>`,
/// or `ParseError::EndOfInput` when no token remains.
pub fn parse_number(input: &mut Parser) -> Result<Number, ParseError> {
    match input.next() {
        Ok(&Token::Number { value, .. }) => Ok(Number(value)),
        Ok(_) => Err(ParseError::UnexpectedToken),
        Err(_) => Err(ParseError::EndOfInput),
    }
}
