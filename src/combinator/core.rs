//! # Core Parser Definitions
//!
//! This module defines the fundamental parser interface and error type
//! that the rest of the combinator system is built on.

use thiserror::Error;

/// Parser trait defines the core parsing interface.
///
/// All parsers in the system implement this trait, which takes an input slice
/// and a position, and returns either a success result with a new position and
/// output value, or a parse error.
///
/// Parsers are immutable values: `parse` takes `&self`, holds no mutable
/// state between invocations, and may be called repeatedly and concurrently
/// on independent inputs with identical results.
///
/// # Type Parameters
///
/// * `I` - The input element type (`char` for the textual grammars)
/// * `O` - The output value type
pub trait Parser<I, O> {
    /// Attempts to parse the input starting at the given position.
    ///
    /// # Returns
    ///
    /// * `Ok((new_pos, output))` - the new position and the parsed value;
    ///   `input[new_pos..]` is the unconsumed remainder and is always a
    ///   suffix of `input[pos..]`
    /// * `Err(error)` - the parser did not match at `pos`
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O>;
}

/// Result type for parsing operations.
///
/// On success, returns a tuple of the new position and the parsed value.
/// On failure, returns a ParseError.
pub type ParseResult<O> = Result<(usize, O), ParseError>;

/// Error type for parsing operations.
///
/// An error means "the parser did not match here"; combinators never branch
/// on the error contents, only on success vs. failure. The carried positions
/// and messages are diagnostics for the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// Ran off the end of the input
    #[error("unexpected end of input at position {position}")]
    UnexpectedEof { position: usize },
    /// The input at the position did not equal the expected element
    #[error("expected {expected} at position {position}")]
    Mismatch { expected: String, position: usize },
    /// A predicate rejected the input element or parsed value
    #[error("predicate rejected input at position {position}")]
    Predicate { position: usize },
    /// No alternative of a choice matched
    #[error("no alternative matched at position {position}")]
    NoAlternative { position: usize },
    /// Explicit failure
    #[error("{message} at position {position}")]
    Failure { message: String, position: usize },
    /// A failure wrapped with the name of the grammar rule it occurred in
    #[error("{context}: {inner}")]
    Context {
        context: String,
        inner: Box<ParseError>,
    },
}

impl ParseError {
    /// Position the error occurred at, looking through context wrappers.
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedEof { position }
            | ParseError::Mismatch { position, .. }
            | ParseError::Predicate { position }
            | ParseError::NoAlternative { position }
            | ParseError::Failure { position, .. } => *position,
            ParseError::Context { inner, .. } => inner.position(),
        }
    }
}

impl<I, O> Parser<I, O> for Box<dyn Parser<I, O>> {
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        (**self).parse(input, pos)
    }
}
