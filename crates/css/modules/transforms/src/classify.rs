//! Value classification: splitting a logical `transform` value into its
//! left-to-right and right-to-left function lists.
//! Spec: <https://www.w3.org/TR/css-transforms-1/#transform-functions>

use crate::error::RewriteError;
use crate::options::MirrorSeed;
use crate::{LOGICAL_MARKER, MIRROR_MATRIX};
use css_values_units::{Angle, ParseError as ValueError, parse_angle, parse_ident, parse_number};
use cssparser::{ParseError, Parser, ParserInput, Token};
use log::trace;

/// Ordered, serialized transform functions for each direction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Partition {
    pub ltr: Vec<String>,
    pub rtl: Vec<String>,
}

impl Partition {
    fn seeded(seed: MirrorSeed) -> Self {
        let rtl = match seed {
            MirrorSeed::Always => vec![MIRROR_MATRIX.to_owned()],
            MirrorSeed::WhenContent => Vec::new(),
        };
        Self {
            ltr: Vec::new(),
            rtl,
        }
    }

    fn push_both(&mut self, text: &str) {
        let text = text.trim();
        self.ltr.push(text.to_owned());
        self.rtl.push(text.to_owned());
    }

    /// Space-joined LTR value.
    pub fn ltr_value(&self) -> String {
        self.ltr.join(" ")
    }

    /// Space-joined RTL value.
    pub fn rtl_value(&self) -> String {
        self.rtl.join(" ")
    }
}

/// How a transform function behaves under mirroring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FunctionClass {
    /// `rotate()` and its axis variants; `axis_components` leading numbers precede the angle.
    Rotation { axis_components: usize },
    /// Arbitrary matrices cannot be resolved logically.
    Disallowed,
    /// Copied unchanged to both directions.
    Opaque,
}

/// Classify a lowercased function name.
fn classify_function(name: &str) -> FunctionClass {
    match name {
        "rotate" | "rotatex" | "rotatey" | "rotatez" => FunctionClass::Rotation { axis_components: 0 },
        "rotate3d" => FunctionClass::Rotation { axis_components: 3 },
        "matrix" | "matrix3d" => FunctionClass::Disallowed,
        _ => FunctionClass::Opaque,
    }
}

/// Split a `transform` value into LTR and RTL function lists.
///
/// Returns `Ok(None)` when the value does not start with the `logical` marker,
/// in which case the declaration must be left untouched.
///
/// # Errors
/// - `RewriteError::Unparsable` if the value has no tokens or holds a bad token.
/// - `RewriteError::DisallowedFunction` for `matrix()`/`matrix3d()`.
/// - `RewriteError::InvalidRotation` if a rotation angle is not an `<angle>`.
pub fn classify_transform(
    value: &str,
    seed: MirrorSeed,
) -> Result<Option<Partition>, RewriteError> {
    let mut input = ParserInput::new(value);
    let mut parser = Parser::new(&mut input);
    if parser.is_exhausted() {
        return Err(unparsable(value));
    }
    match parse_ident(&mut parser) {
        Ok(ident) if ident.is_keyword(LOGICAL_MARKER) => {}
        _ => return Ok(None),
    }

    let mut partition = Partition::seeded(seed);
    loop {
        parser.skip_whitespace();
        let start = parser.position();
        let token = match parser.next() {
            Ok(token) => token.clone(),
            Err(_) => break,
        };
        match token {
            Token::Comma => {}
            Token::Ident(ident) if ident.eq_ignore_ascii_case(LOGICAL_MARKER) => {}
            Token::Function(name) => {
                let name = name.to_ascii_lowercase();
                match classify_function(&name) {
                    FunctionClass::Disallowed => {
                        return Err(RewriteError::DisallowedFunction { function: name });
                    }
                    FunctionClass::Rotation { axis_components } => {
                        let angle = parser
                            .parse_nested_block(|block| rotation_angle(block, axis_components));
                        let text = parser.slice_from(start).trim();
                        let Ok(angle) = angle else {
                            return Err(RewriteError::InvalidRotation {
                                function: text.to_owned(),
                            });
                        };
                        if angle.is_zero() {
                            trace!(target: "css_transforms", "dropping zero rotation {text}");
                        } else {
                            trace!(
                                target: "css_transforms",
                                "keeping rotation {text} ({}deg)",
                                angle.to_degrees()
                            );
                            partition.push_both(text);
                        }
                    }
                    FunctionClass::Opaque => {
                        skip_block(&mut parser).map_err(|_| unparsable(value))?;
                        partition.push_both(parser.slice_from(start));
                    }
                }
            }
            Token::ParenthesisBlock | Token::SquareBracketBlock | Token::CurlyBracketBlock => {
                skip_block(&mut parser).map_err(|_| unparsable(value))?;
                partition.push_both(parser.slice_from(start));
            }
            Token::BadUrl(_)
            | Token::BadString(_)
            | Token::CloseParenthesis
            | Token::CloseSquareBracket
            | Token::CloseCurlyBracket => return Err(unparsable(value)),
            _ => partition.push_both(parser.slice_from(start)),
        }
    }

    if seed == MirrorSeed::WhenContent && !partition.rtl.is_empty() {
        partition.rtl.insert(0, MIRROR_MATRIX.to_owned());
    }
    trace!(
        target: "css_transforms",
        "classified {value:?}: ltr={:?} rtl={:?}",
        partition.ltr,
        partition.rtl
    );
    Ok(Some(partition))
}

fn unparsable(value: &str) -> RewriteError {
    RewriteError::Unparsable {
        value: value.to_owned(),
    }
}

/// Arguments of a rotation: `<number>, <number>, <number>,` (rotate3d only) then one `<angle>`.
fn rotation_angle<'input>(
    block: &mut Parser<'input, '_>,
    axis_components: usize,
) -> Result<Angle, ParseError<'input, ValueError>> {
    for _ in 0..axis_components {
        parse_number(block).map_err(|err| block.new_custom_error::<_, ValueError>(err))?;
        block.expect_comma()?;
    }
    let angle = parse_angle(block).map_err(|err| block.new_custom_error::<_, ValueError>(err))?;
    block.expect_exhausted()?;
    Ok(angle)
}

/// Consume the block that was just opened by a function or bracket token.
fn skip_block<'input>(parser: &mut Parser<'input, '_>) -> Result<(), ParseError<'input, ()>> {
    parser.parse_nested_block(|block| {
        while block.next_including_whitespace_and_comments().is_ok() {}
        Ok(())
    })
}
