//! CSS Values & Units Level 3 — §7.1 Angle Units
//! Spec: <https://www.w3.org/TR/css-values-3/#angles>

use crate::ParseError;
use core::f32::consts::PI;
use cssparser::{Parser, Token};

/// Units of the CSS <angle> type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AngleUnit {
    /// `deg`: 360 per full circle.
    Degrees,
    /// `grad`: 400 per full circle.
    Gradians,
    /// `rad`: 2π per full circle.
    Radians,
    /// `turn`: 1 per full circle.
    Turns,
}

impl AngleUnit {
    /// Map a unit suffix (ASCII case-insensitive) to its unit.
    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix.to_ascii_lowercase().as_str() {
            "deg" => Some(Self::Degrees),
            "grad" => Some(Self::Gradians),
            "rad" => Some(Self::Radians),
            "turn" => Some(Self::Turns),
            _ => None,
        }
    }
}

/// A CSS <angle> value with unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Angle {
    pub value: f32,
    pub unit: AngleUnit,
}

impl Angle {
    /// True for a zero angle in any unit (including `-0`).
    pub fn is_zero(self) -> bool {
        self.value == 0.0
    }

    /// Canonicalize to degrees (§7.1: "All <angle> units are compatible").
    pub fn to_degrees(self) -> f32 {
        match self.unit {
            AngleUnit::Degrees => self.value,
            AngleUnit::Gradians => self.value * 0.9,
            AngleUnit::Radians => self.value * 180.0 / PI,
            AngleUnit::Turns => self.value * 360.0,
        }
    }
}

/// Parse a CSS <angle> (§7.1), skipping leading whitespace.
///
/// A unitless `0` is accepted as a zero angle, matching the legacy allowance
/// that CSS Transforms keeps for `rotate(0)`.
///
/// # Errors
/// Returns `ParseError::UnexpectedToken` when the next token is not an `<angle>`,
/// or `ParseError::EndOfInput` when no token remains.
pub fn parse_angle(input: &mut Parser) -> Result<Angle, ParseError> {
    let Ok(token) = input.next() else {
        return Err(ParseError::EndOfInput);
    };
    match token {
        Token::Dimension { value, unit, .. } => AngleUnit::from_suffix(unit.as_ref())
            .map(|angle_unit| Angle {
                value: *value,
                unit: angle_unit,
            })
            .ok_or(ParseError::UnexpectedToken),
        Token::Number { value, .. } if *value == 0.0 => Ok(Angle {
            value: 0.0,
            unit: AngleUnit::Degrees,
        }),
        Token::Ident(_)
        | Token::AtKeyword(_)
        | Token::Hash(_)
        | Token::IDHash(_)
        | Token::QuotedString(_)
        | Token::UnquotedUrl(_)
        | Token::Delim(_)
        | Token::Number { .. }
        | Token::Percentage { .. }
        | Token::WhiteSpace(_)
        | Token::Comment(_)
        | Token::Colon
        | Token::Semicolon
        | Token::Comma
        | Token::IncludeMatch
        | Token::DashMatch
        | Token::PrefixMatch
        | Token::SuffixMatch
        | Token::SubstringMatch
        | Token::CDO
        | Token::CDC
        | Token::Function(_)
        | Token::ParenthesisBlock
        | Token::SquareBracketBlock
        | Token::CurlyBracketBlock
        | Token::BadUrl(_)
        | Token::BadString(_)
        | Token::CloseParenthesis
        | Token::CloseSquareBracket
        | Token::CloseCurlyBracket => Err(ParseError::UnexpectedToken),
    }
}
