//! # Text Primitives
//!
//! Char-level parsers that scan raw input directly: literal strings,
//! character classes, numeric literals, quoted strings and whitespace
//! trimming. Everything here produces parsers over `char` input; the
//! grammar modules compose these with the generic combinators.

use super::core::{ParseError, ParseResult, Parser};
use super::prelude::*;

/// Literal: Matches an exact string at the current position
///
/// Consumes exactly the literal's length on success and nothing on
/// failure.
#[derive(Clone)]
pub struct Literal {
    expected: String,
}

impl Literal {
    pub fn new(expected: &str) -> Self {
        Self {
            expected: expected.to_string(),
        }
    }
}

impl Parser<char, String> for Literal {
    fn parse(&self, input: &[char], pos: usize) -> ParseResult<String> {
        let mut current_pos = pos;
        for expected_char in self.expected.chars() {
            match input.get(current_pos) {
                Some(&found) if found == expected_char => current_pos += 1,
                Some(_) => {
                    return Err(ParseError::Mismatch {
                        expected: self.expected.clone(),
                        position: pos,
                    })
                }
                None => return Err(ParseError::UnexpectedEof { position: current_pos }),
            }
        }
        Ok((current_pos, self.expected.clone()))
    }
}

/// QuotedString: Matches a double-quoted string with escape handling
///
/// A backslash marks the following character as literal; no escape
/// translation is performed (`\n` stays the two characters `n`, not a
/// newline). A missing closing quote is a failure.
#[derive(Clone, Default)]
pub struct QuotedString;

impl Parser<char, String> for QuotedString {
    fn parse(&self, input: &[char], pos: usize) -> ParseResult<String> {
        match input.get(pos) {
            Some('"') => {}
            Some(_) => {
                return Err(ParseError::Mismatch {
                    expected: "\"".to_string(),
                    position: pos,
                })
            }
            None => return Err(ParseError::UnexpectedEof { position: pos }),
        }

        let mut value = String::new();
        let mut current_pos = pos + 1;
        let mut escaped = false;
        while let Some(&c) = input.get(current_pos) {
            if escaped {
                value.push(c);
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                return Ok((current_pos + 1, value));
            } else {
                value.push(c);
            }
            current_pos += 1;
        }

        Err(ParseError::UnexpectedEof {
            position: current_pos,
        })
    }
}

pub fn literal(expected: &str) -> Literal {
    Literal::new(expected)
}

pub fn quoted_string() -> QuotedString {
    QuotedString
}

pub fn digit() -> impl Parser<char, char> {
    satisfy(|c: &char| if c.is_ascii_digit() { Some(*c) } else { None })
}

pub fn letter() -> impl Parser<char, char> {
    satisfy(|c: &char| if c.is_ascii_alphabetic() { Some(*c) } else { None })
}

/// Single whitespace character: space, tab or newline.
pub fn whitespace() -> impl Parser<char, char> {
    satisfy(|c: &char| match c {
        ' ' | '\t' | '\n' => Some(*c),
        _ => None,
    })
}

/// One or more digits, collected to a string.
pub fn digits() -> impl Parser<char, String> {
    map(many1(digit()), |cs| cs.into_iter().collect())
}

/// One or more letters, collected to a string.
pub fn letters() -> impl Parser<char, String> {
    map(many1(letter()), |cs| cs.into_iter().collect())
}

/// Zero or more whitespace characters; never fails.
pub fn spaces() -> impl Parser<char, String> {
    map(many(whitespace()), |cs| cs.into_iter().collect())
}

/// Optional leading `-` or `+`; yields `+` when absent. Never fails.
pub fn sign() -> impl Parser<char, char> {
    map(
        optional(choice(vec![Box::new(equal('-')), Box::new(equal('+'))])),
        |c| c.unwrap_or('+'),
    )
}

/// Signed 64-bit integer literal: `sign` followed by one or more digits.
///
/// Overflow: the digits are converted with `str::parse::<i64>`, which
/// rejects out-of-range values, so a literal whose magnitude exceeds
/// `i64::MAX` is a parse failure rather than a truncated value. (This
/// also means `i64::MIN` itself is not parseable, since the sign is
/// applied after the unsigned conversion.)
pub fn integer() -> impl Parser<char, i64> {
    bind(tuple2(sign(), digits()), |(sign, digits)| -> Box<dyn Parser<char, i64>> {
        match digits.parse::<i64>() {
            Ok(magnitude) => Box::new(pure(if sign == '-' { -magnitude } else { magnitude })),
            Err(_) => Box::new(fail::<char, i64>("integer literal out of range")),
        }
    })
}

/// Signed float literal: `sign`, digits, `.`, digits.
///
/// The fractional part is mandatory; `3` or `3.` is not a float, so the
/// integer alternative of a grammar can match it instead. Ordering float
/// before integer in a choice is what makes `3.14` parse as a float.
pub fn float() -> impl Parser<char, f64> {
    bind(
        tuple2(sign(), tuple3(digits(), equal('.'), digits())),
        |(sign, (whole, _, frac))| -> Box<dyn Parser<char, f64>> {
            match format!("{whole}.{frac}").parse::<f64>() {
                Ok(value) => Box::new(pure(if sign == '-' { -value } else { value })),
                Err(_) => Box::new(fail::<char, f64>("malformed float literal")),
            }
        },
    )
}

/// Strips zero or more whitespace characters before the parser's match.
pub fn trim_left<P, O>(parser: P) -> impl Parser<char, O>
where
    P: Parser<char, O>,
{
    preceded(spaces(), parser)
}

/// Strips zero or more whitespace characters after the parser's match.
pub fn trim_right<P, O>(parser: P) -> impl Parser<char, O>
where
    P: Parser<char, O>,
{
    terminated(parser, spaces())
}

/// Strips whitespace on both sides of the parser's match. The stripped
/// whitespace never appears in the result.
pub fn trim<P, O>(parser: P) -> impl Parser<char, O>
where
    P: Parser<char, O>,
{
    trim_left(trim_right(parser))
}

/// A literal with surrounding whitespace allowed and discarded.
pub fn symbol(expected: &str) -> impl Parser<char, String> {
    trim(literal(expected))
}
