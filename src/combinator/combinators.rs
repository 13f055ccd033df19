//! # Parser Combinators
//!
//! This module implements the combinators that form the building blocks of
//! the parsing system. Each combinator is a small struct implementing
//! [`Parser`]; the lowercase constructors in [`super::prelude`] are the
//! intended way to build them.
//!
//! ## Combinator Types
//!
//! * **Basic**: `Pure`, `Fail`, `Satisfy`, `Equal`
//! * **Sequential**: `Bind`, `Tuple2`, `Tuple3`, `Sequence`, `Preceded`,
//!   `Terminated`, `Delimited`
//! * **Alternative**: `Choice`
//! * **Repetition**: `Many`, `Many1`, `Optional`, `SeparatedList`
//! * **Transformation**: `Map`, `SatisfyWith`
//! * **Structural**: `Lazy`, `WithContext`
//!
//! ## Backtracking
//!
//! `Choice` retries each alternative from the original position. Nothing
//! else backtracks: once a parser inside a `Bind` chain has consumed input
//! and a later step fails, the whole chain fails. Grammars are written
//! assuming this, so the behavior must not be "improved".

use super::core::ParseError;
use super::core::ParseResult;
use super::core::Parser;
use std::fmt;
use std::marker::PhantomData;

/// Pure: Always succeeds with a fixed value, consuming nothing
#[derive(Clone)]
pub struct Pure<I, O> {
    value: O,
    _phantom: PhantomData<I>,
}

impl<I, O> Pure<I, O> {
    pub fn new(value: O) -> Self {
        Self {
            value,
            _phantom: PhantomData,
        }
    }
}

impl<I, O: Clone> Parser<I, O> for Pure<I, O> {
    fn parse(&self, _input: &[I], pos: usize) -> ParseResult<O> {
        Ok((pos, self.value.clone()))
    }
}

/// Fail: Always fails, consuming nothing
#[derive(Clone)]
pub struct Fail<I, O> {
    message: String,
    _phantom: PhantomData<(I, O)>,
}

impl<I, O> Fail<I, O> {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
            _phantom: PhantomData,
        }
    }
}

impl<I, O> Parser<I, O> for Fail<I, O> {
    fn parse(&self, _input: &[I], pos: usize) -> ParseResult<O> {
        Err(ParseError::Failure {
            message: self.message.clone(),
            position: pos,
        })
    }
}

/// Satisfy: Consumes one input element if the function accepts it
///
/// The function both tests and converts the element: returning `Some(value)`
/// consumes the element and yields `value`, returning `None` fails without
/// consuming anything. Failing on empty input is the EOF case.
#[derive(Clone)]
pub struct Satisfy<I, O, F> {
    f: F,
    _phantom: PhantomData<(I, O)>,
}

impl<I, O, F> Satisfy<I, O, F> {
    pub fn new(f: F) -> Self {
        Self {
            f,
            _phantom: PhantomData,
        }
    }
}

impl<I, O, F> Parser<I, O> for Satisfy<I, O, F>
where
    F: Fn(&I) -> Option<O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        match input.get(pos) {
            Some(element) => match (self.f)(element) {
                Some(value) => Ok((pos + 1, value)),
                None => Err(ParseError::Predicate { position: pos }),
            },
            None => Err(ParseError::UnexpectedEof { position: pos }),
        }
    }
}

/// Equal: Matches a specific element in the input
///
/// Succeeds if the current input element equals the given value, consuming
/// exactly one element.
#[derive(Clone)]
pub struct Equal<I> {
    value: I,
}

impl<I> Equal<I> {
    pub fn new(value: I) -> Self {
        Self { value }
    }
}

impl<I: Clone + PartialEq + fmt::Display> Parser<I, I> for Equal<I> {
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<I> {
        match input.get(pos) {
            Some(found) if *found == self.value => Ok((pos + 1, found.clone())),
            Some(_) => Err(ParseError::Mismatch {
                expected: self.value.to_string(),
                position: pos,
            }),
            None => Err(ParseError::UnexpectedEof { position: pos }),
        }
    }
}

/// Map: Transforms the output of a parser using a function
///
/// On success, applies the transformation and keeps the position; on
/// failure, propagates the error unchanged.
#[derive(Clone)]
pub struct Map<P, F, A, B> {
    parser: P,
    f: F,
    _phantom: PhantomData<(A, B)>,
}

impl<P, F, A, B> Map<P, F, A, B> {
    pub fn new(parser: P, f: F) -> Self {
        Self {
            parser,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<I, A, B, P, F> Parser<I, B> for Map<P, F, A, B>
where
    P: Parser<I, A>,
    F: Fn(A) -> B,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<B> {
        self.parser
            .parse(input, pos)
            .map(|(pos, value)| (pos, (self.f)(value)))
    }
}

/// Bind: Monadic sequencing; the second parser depends on the first's value
///
/// On success of the inner parser, `f` builds the continuation parser from
/// the parsed value and runs it against the remaining input. On failure,
/// the error propagates and `f` is never invoked. Every other sequencing
/// combinator is expressible in terms of this one.
#[derive(Clone)]
pub struct Bind<P, F, I, A, B, Q> {
    parser: P,
    f: F,
    _phantom: PhantomData<(I, A, B, Q)>,
}

impl<P, F, I, A, B, Q> Bind<P, F, I, A, B, Q> {
    pub fn new(parser: P, f: F) -> Self {
        Self {
            parser,
            f,
            _phantom: PhantomData,
        }
    }
}

impl<P, F, I, A, B, Q> Parser<I, B> for Bind<P, F, I, A, B, Q>
where
    P: Parser<I, A>,
    Q: Parser<I, B>,
    F: Fn(A) -> Q,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<B> {
        let (pos, value) = self.parser.parse(input, pos)?;
        (self.f)(value).parse(input, pos)
    }
}

/// Choice: Tries multiple parsers and succeeds with the first successful one
///
/// Every alternative is tried against the *original* position. A partially
/// consuming alternative that fails mid-chain is simply discarded; the next
/// alternative starts over from the same place.
pub struct Choice<I, O> {
    parsers: Vec<Box<dyn Parser<I, O>>>,
}

impl<I, O> Choice<I, O> {
    pub fn new(parsers: Vec<Box<dyn Parser<I, O>>>) -> Self {
        Self { parsers }
    }
}

impl<I, O> Parser<I, O> for Choice<I, O> {
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        for parser in &self.parsers {
            if let Ok(result) = parser.parse(input, pos) {
                return Ok(result);
            }
        }
        Err(ParseError::NoAlternative { position: pos })
    }
}

/// Sequence: Applies homogeneous parsers in order, collecting their values
pub struct Sequence<I, O> {
    parsers: Vec<Box<dyn Parser<I, O>>>,
}

impl<I, O> Sequence<I, O> {
    pub fn new(parsers: Vec<Box<dyn Parser<I, O>>>) -> Self {
        Self { parsers }
    }
}

impl<I, O> Parser<I, Vec<O>> for Sequence<I, O> {
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<Vec<O>> {
        let mut results = Vec::with_capacity(self.parsers.len());
        let mut current_pos = pos;
        for parser in &self.parsers {
            let (new_pos, value) = parser.parse(input, current_pos)?;
            results.push(value);
            current_pos = new_pos;
        }
        Ok((current_pos, results))
    }
}

/// Preceded: Runs two parsers in sequence, keeping only the second value
#[derive(Clone)]
pub struct Preceded<P1, P2, I, O1, O2> {
    parser1: P1,
    parser2: P2,
    _phantom: PhantomData<(I, O1, O2)>,
}

impl<P1, P2, I, O1, O2> Preceded<P1, P2, I, O1, O2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Self {
            parser1,
            parser2,
            _phantom: PhantomData,
        }
    }
}

impl<P1, P2, I, O1, O2> Parser<I, O2> for Preceded<P1, P2, I, O1, O2>
where
    P1: Parser<I, O1>,
    P2: Parser<I, O2>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O2> {
        let (pos, _) = self.parser1.parse(input, pos)?;
        self.parser2.parse(input, pos)
    }
}

/// Terminated: Runs two parsers in sequence, keeping only the first value
#[derive(Clone)]
pub struct Terminated<P1, P2, I, O1, O2> {
    parser1: P1,
    parser2: P2,
    _phantom: PhantomData<(I, O1, O2)>,
}

impl<P1, P2, I, O1, O2> Terminated<P1, P2, I, O1, O2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Self {
            parser1,
            parser2,
            _phantom: PhantomData,
        }
    }
}

impl<P1, P2, I, O1, O2> Parser<I, O1> for Terminated<P1, P2, I, O1, O2>
where
    P1: Parser<I, O1>,
    P2: Parser<I, O2>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O1> {
        let (pos, value) = self.parser1.parse(input, pos)?;
        let (pos, _) = self.parser2.parse(input, pos)?;
        Ok((pos, value))
    }
}

/// Many: Applies a parser zero or more times
///
/// Greedily applies the inner parser until it fails, collecting the values.
/// Always succeeds, returning the position after the last successful
/// application. The loop is iterative so stack depth does not grow with
/// the number of matches.
#[derive(Clone)]
pub struct Many<P, I, O> {
    parser: P,
    _phantom: PhantomData<(I, O)>,
}

impl<P, I, O> Many<P, I, O> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            _phantom: PhantomData,
        }
    }
}

impl<I, O, P> Parser<I, Vec<O>> for Many<P, I, O>
where
    P: Parser<I, O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<Vec<O>> {
        let mut results = Vec::new();
        let mut current_pos = pos;

        loop {
            match self.parser.parse(input, current_pos) {
                Ok((new_pos, value)) => {
                    results.push(value);
                    current_pos = new_pos;
                }
                Err(e) => {
                    tracing::trace!(
                        target: "parsekit::many",
                        error = %e,
                        position = current_pos,
                        items_collected = results.len(),
                        "repetition stopped"
                    );
                    break;
                }
            }
        }

        Ok((current_pos, results))
    }
}

/// Many1: Applies a parser one or more times
///
/// Like [`Many`], but fails if the inner parser fails on the first attempt.
#[derive(Clone)]
pub struct Many1<P, I, O> {
    parser: P,
    _phantom: PhantomData<(I, O)>,
}

impl<P, I, O> Many1<P, I, O> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            _phantom: PhantomData,
        }
    }
}

impl<I, O, P> Parser<I, Vec<O>> for Many1<P, I, O>
where
    P: Parser<I, O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<Vec<O>> {
        let (pos, first) = self.parser.parse(input, pos)?;
        let mut results = vec![first];
        let mut current_pos = pos;

        loop {
            match self.parser.parse(input, current_pos) {
                Ok((new_pos, value)) => {
                    results.push(value);
                    current_pos = new_pos;
                }
                Err(e) => {
                    tracing::trace!(
                        target: "parsekit::many1",
                        error = %e,
                        position = current_pos,
                        items_collected = results.len(),
                        "repetition stopped"
                    );
                    break;
                }
            }
        }

        Ok((current_pos, results))
    }
}

/// Optional: Applies a parser zero or one time, yielding `Option<O>`
///
/// Never fails; a failing inner parser yields `None` at the original
/// position.
#[derive(Clone)]
pub struct Optional<P, I, O> {
    parser: P,
    _phantom: PhantomData<(I, O)>,
}

impl<P, I, O> Optional<P, I, O> {
    pub fn new(parser: P) -> Self {
        Self {
            parser,
            _phantom: PhantomData,
        }
    }
}

impl<I, O, P> Parser<I, Option<O>> for Optional<P, I, O>
where
    P: Parser<I, O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<Option<O>> {
        match self.parser.parse(input, pos) {
            Ok((new_pos, value)) => Ok((new_pos, Some(value))),
            Err(e) => {
                tracing::trace!(
                    target: "parsekit::optional",
                    error = %e,
                    position = pos,
                    "optional parser suppressed an error"
                );
                Ok((pos, None))
            }
        }
    }
}

/// SeparatedList: Parses zero or more items separated by a delimiter
///
/// Succeeds with an empty list when the first item does not match. A
/// separator with no item after it is left unconsumed, so whatever follows
/// the list (typically a closing bracket) sees the dangling separator and
/// fails. Trailing separators are therefore rejected by the enclosing
/// grammar, not silently swallowed.
pub struct SeparatedList<P, S, I, O, OS> {
    item_parser: P,
    separator_parser: S,
    _phantom: PhantomData<(I, O, OS)>,
}

impl<P, S, I, O, OS> SeparatedList<P, S, I, O, OS> {
    pub fn new(item_parser: P, separator_parser: S) -> Self {
        Self {
            item_parser,
            separator_parser,
            _phantom: PhantomData,
        }
    }
}

impl<I, O, OS, P, S> Parser<I, Vec<O>> for SeparatedList<P, S, I, O, OS>
where
    P: Parser<I, O>,
    S: Parser<I, OS>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<Vec<O>> {
        let (mut current_pos, first) = match self.item_parser.parse(input, pos) {
            Ok((new_pos, value)) => (new_pos, value),
            Err(_) => return Ok((pos, Vec::new())),
        };
        let mut results = vec![first];

        loop {
            let sep_pos = match self.separator_parser.parse(input, current_pos) {
                Ok((new_pos, _)) => new_pos,
                Err(_) => break,
            };
            match self.item_parser.parse(input, sep_pos) {
                Ok((new_pos, value)) => {
                    results.push(value);
                    current_pos = new_pos;
                }
                // dangling separator: leave it unconsumed
                Err(_) => break,
            }
        }

        Ok((current_pos, results))
    }
}

/// Tuple2: Applies two heterogeneous parsers in sequence
#[derive(Clone)]
pub struct Tuple2<P1, P2, I, O1, O2> {
    parser1: P1,
    parser2: P2,
    _phantom: PhantomData<(I, O1, O2)>,
}

impl<P1, P2, I, O1, O2> Tuple2<P1, P2, I, O1, O2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Self {
            parser1,
            parser2,
            _phantom: PhantomData,
        }
    }
}

impl<P1, P2, I, O1, O2> Parser<I, (O1, O2)> for Tuple2<P1, P2, I, O1, O2>
where
    P1: Parser<I, O1>,
    P2: Parser<I, O2>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<(O1, O2)> {
        let (pos, result1) = self.parser1.parse(input, pos)?;
        let (pos, result2) = self.parser2.parse(input, pos)?;
        Ok((pos, (result1, result2)))
    }
}

/// Tuple3: Applies three heterogeneous parsers in sequence
#[derive(Clone)]
pub struct Tuple3<P1, P2, P3, I, O1, O2, O3> {
    parser1: P1,
    parser2: P2,
    parser3: P3,
    _phantom: PhantomData<(I, O1, O2, O3)>,
}

impl<P1, P2, P3, I, O1, O2, O3> Tuple3<P1, P2, P3, I, O1, O2, O3> {
    pub fn new(parser1: P1, parser2: P2, parser3: P3) -> Self {
        Self {
            parser1,
            parser2,
            parser3,
            _phantom: PhantomData,
        }
    }
}

impl<P1, P2, P3, I, O1, O2, O3> Parser<I, (O1, O2, O3)> for Tuple3<P1, P2, P3, I, O1, O2, O3>
where
    P1: Parser<I, O1>,
    P2: Parser<I, O2>,
    P3: Parser<I, O3>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<(O1, O2, O3)> {
        let (pos, result1) = self.parser1.parse(input, pos)?;
        let (pos, result2) = self.parser2.parse(input, pos)?;
        let (pos, result3) = self.parser3.parse(input, pos)?;
        Ok((pos, (result1, result2, result3)))
    }
}

/// Delimited: Parses content between left and right delimiters
///
/// The delimiter values are discarded; only the content value is kept.
#[derive(Clone)]
pub struct Delimited<L, P, R, I, OL, O, OR> {
    left: L,
    parser: P,
    right: R,
    _phantom: PhantomData<(I, OL, O, OR)>,
}

impl<L, P, R, I, OL, O, OR> Delimited<L, P, R, I, OL, O, OR> {
    pub fn new(left: L, parser: P, right: R) -> Self {
        Self {
            left,
            parser,
            right,
            _phantom: PhantomData,
        }
    }
}

impl<I, OL, O, OR, L, P, R> Parser<I, O> for Delimited<L, P, R, I, OL, O, OR>
where
    L: Parser<I, OL>,
    P: Parser<I, O>,
    R: Parser<I, OR>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        let (pos, _) = self.left.parse(input, pos)?;
        let (pos, value) = self.parser.parse(input, pos)?;
        let (pos, _) = self.right.parse(input, pos)?;
        Ok((pos, value))
    }
}

/// SatisfyWith: Post-filters a parser's successful value with a predicate
///
/// If the predicate rejects the value, the whole combinator fails even
/// though the inner parser consumed input; consumed input is not given back
/// to sibling alternatives.
#[derive(Clone)]
pub struct SatisfyWith<P, F, I, O> {
    parser: P,
    predicate: F,
    _phantom: PhantomData<(I, O)>,
}

impl<P, F, I, O> SatisfyWith<P, F, I, O> {
    pub fn new(parser: P, predicate: F) -> Self {
        Self {
            parser,
            predicate,
            _phantom: PhantomData,
        }
    }
}

impl<I, O, P, F> Parser<I, O> for SatisfyWith<P, F, I, O>
where
    P: Parser<I, O>,
    F: Fn(&O) -> bool,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        let (new_pos, value) = self.parser.parse(input, pos)?;
        if (self.predicate)(&value) {
            Ok((new_pos, value))
        } else {
            Err(ParseError::Predicate { position: pos })
        }
    }
}

/// WithContext: Labels failures with the name of the enclosing grammar rule
#[derive(Clone)]
pub struct WithContext<P, C> {
    parser: P,
    context: C,
}

impl<P, C> WithContext<P, C> {
    pub fn new(parser: P, context: C) -> Self {
        Self { parser, context }
    }
}

impl<I, O, P, C: ToString> Parser<I, O> for WithContext<P, C>
where
    P: Parser<I, O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        self.parser.parse(input, pos).map_err(|e| ParseError::Context {
            context: self.context.to_string(),
            inner: Box::new(e),
        })
    }
}

/// Lazy: Defers construction of the wrapped parser until parse time
///
/// Grammar rules that are part of a reference cycle (JSON arrays and
/// objects contain values) must be wrapped in `Lazy`; eager construction
/// would recurse at definition time, before any input is read.
#[derive(Clone)]
pub struct Lazy<F> {
    f: F,
}

impl<F> Lazy<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<I, O, F, P> Parser<I, O> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<I, O>,
{
    fn parse(&self, input: &[I], pos: usize) -> ParseResult<O> {
        (self.f)().parse(input, pos)
    }
}

#[cfg(test)]
mod tests {
    use super::super::prelude::*;
    use super::*;
    use proptest::prelude::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_pure() {
        let input = chars("abc");
        let parser = pure::<char, _>(42);
        assert_eq!(parser.parse(&input, 0), Ok((0, 42)));
        assert_eq!(parser.parse(&input, 2), Ok((2, 42)));

        // empty input is fine, nothing is consumed
        let empty: Vec<char> = vec![];
        assert_eq!(parser.parse(&empty, 0), Ok((0, 42)));
    }

    #[test]
    fn test_fail() {
        let input = chars("abc");
        let parser = fail::<char, i32>("boom");
        assert_eq!(
            parser.parse(&input, 1),
            Err(ParseError::Failure {
                message: "boom".to_string(),
                position: 1
            })
        );
    }

    #[test]
    fn test_satisfy() {
        let input = chars("a1");
        let parser = satisfy(|c: &char| if c.is_ascii_digit() { Some(*c) } else { None });
        assert_eq!(parser.parse(&input, 1), Ok((2, '1')));
        assert_eq!(
            parser.parse(&input, 0),
            Err(ParseError::Predicate { position: 0 })
        );
        assert_eq!(
            parser.parse(&input, 2),
            Err(ParseError::UnexpectedEof { position: 2 })
        );
    }

    #[test]
    fn test_equal() {
        let input = chars("ab");
        let parser = equal('a');
        assert_eq!(parser.parse(&input, 0), Ok((1, 'a')));
        assert_eq!(
            parser.parse(&input, 1),
            Err(ParseError::Mismatch {
                expected: "a".to_string(),
                position: 1
            })
        );
        assert_eq!(
            parser.parse(&input, 2),
            Err(ParseError::UnexpectedEof { position: 2 })
        );
    }

    #[test]
    fn test_map() {
        let input = chars("7x");
        let parser = map(
            satisfy(|c: &char| c.to_digit(10)),
            |d| d * 2,
        );
        assert_eq!(parser.parse(&input, 0), Ok((1, 14)));
        // failure propagates unchanged
        assert_eq!(
            parser.parse(&input, 1),
            Err(ParseError::Predicate { position: 1 })
        );
    }

    #[test]
    fn test_bind_sequences() {
        let input = chars("ab");
        let parser = bind(equal('a'), |first| {
            map(equal('b'), move |second| format!("{first}{second}"))
        });
        assert_eq!(parser.parse(&input, 0), Ok((2, "ab".to_string())));
    }

    #[test]
    fn test_bind_failure_skips_continuation() {
        let input = chars("xb");
        let parser = bind(equal('a'), |_| -> Pure<char, char> {
            panic!("continuation must not run when the first parser fails")
        });
        assert_eq!(
            parser.parse(&input, 0),
            Err(ParseError::Mismatch {
                expected: "a".to_string(),
                position: 0
            })
        );
    }

    #[test]
    fn test_bind_no_mid_chain_backtracking() {
        // `a` consumes, then `b` fails; the whole chain fails at position 1
        let input = chars("ac");
        let parser = bind(equal('a'), |_| equal('b'));
        assert_eq!(
            parser.parse(&input, 0),
            Err(ParseError::Mismatch {
                expected: "b".to_string(),
                position: 1
            })
        );
    }

    #[test]
    fn test_choice_first_success_wins() {
        let input = chars("a");
        // both alternatives match; the first one's result is returned
        let parser = choice(vec![
            Box::new(map(equal('a'), |_| 1)),
            Box::new(map(equal('a'), |_| 2)),
        ]);
        assert_eq!(parser.parse(&input, 0), Ok((1, 1)));
    }

    #[test]
    fn test_choice_retries_from_original_position() {
        let input = chars("ac");
        let parser = choice(vec![
            // consumes `a` then fails on `b`
            Box::new(map(tuple2(equal('a'), equal('b')), |_| 1)),
            // still sees the original input
            Box::new(map(tuple2(equal('a'), equal('c')), |_| 2)),
        ]);
        assert_eq!(parser.parse(&input, 0), Ok((2, 2)));
    }

    #[test]
    fn test_choice_all_fail() {
        let input = chars("z");
        let parser = choice(vec![
            Box::new(equal('a')),
            Box::new(equal('b')),
        ]);
        assert_eq!(
            parser.parse(&input, 0),
            Err(ParseError::NoAlternative { position: 0 })
        );
    }

    #[test]
    fn test_sequence() {
        let input = chars("abc");
        let parser = sequence(vec![
            Box::new(equal('a')) as Box<dyn Parser<char, char>>,
            Box::new(equal('b')),
            Box::new(equal('c')),
        ]);
        assert_eq!(parser.parse(&input, 0), Ok((3, vec!['a', 'b', 'c'])));

        let parser = sequence(vec![
            Box::new(equal('a')) as Box<dyn Parser<char, char>>,
            Box::new(equal('x')),
        ]);
        assert!(parser.parse(&input, 0).is_err());
    }

    #[test]
    fn test_preceded_and_terminated() {
        let input = chars("(x)");
        let parser = preceded(equal('('), equal('x'));
        assert_eq!(parser.parse(&input, 0), Ok((2, 'x')));

        let parser = terminated(equal('x'), equal(')'));
        assert_eq!(parser.parse(&input, 1), Ok((3, 'x')));
    }

    #[test]
    fn test_many_is_total() {
        let input = chars("aaab");
        let parser = many(equal('a'));
        assert_eq!(parser.parse(&input, 0), Ok((3, vec!['a', 'a', 'a'])));
        // zero matches: empty list, input position unchanged
        assert_eq!(parser.parse(&input, 3), Ok((3, vec![])));
        // even past the end of input
        assert_eq!(parser.parse(&input, 4), Ok((4, vec![])));
    }

    #[test]
    fn test_many1_fails_iff_first_fails() {
        let input = chars("aaab");
        let parser = many1(equal('a'));
        assert_eq!(parser.parse(&input, 0), Ok((3, vec!['a', 'a', 'a'])));
        assert!(parser.parse(&input, 3).is_err());
        assert!(parser.parse(&input, 4).is_err());
    }

    #[test]
    fn test_optional() {
        let input = chars("ab");
        let parser = optional(equal('a'));
        assert_eq!(parser.parse(&input, 0), Ok((1, Some('a'))));
        assert_eq!(parser.parse(&input, 1), Ok((1, None)));
        assert_eq!(parser.parse(&input, 2), Ok((2, None)));
    }

    #[test]
    fn test_separated_list() {
        let parser = separated_list(equal('a'), equal(','));

        let input: Vec<char> = vec![];
        assert_eq!(parser.parse(&input, 0), Ok((0, vec![])));

        let input = chars("a");
        assert_eq!(parser.parse(&input, 0), Ok((1, vec!['a'])));

        let input = chars("a,a,a");
        assert_eq!(parser.parse(&input, 0), Ok((5, vec!['a', 'a', 'a'])));

        // the dangling separator stays unconsumed
        let input = chars("a,a,");
        assert_eq!(parser.parse(&input, 0), Ok((3, vec!['a', 'a'])));

        // a lone separator is not an element
        let input = chars(",");
        assert_eq!(parser.parse(&input, 0), Ok((0, vec![])));
    }

    #[test]
    fn test_tuple2_tuple3() {
        let input = chars("abc");
        let parser = tuple2(equal('a'), equal('b'));
        assert_eq!(parser.parse(&input, 0), Ok((2, ('a', 'b'))));

        let parser = tuple3(equal('a'), equal('b'), equal('c'));
        assert_eq!(parser.parse(&input, 0), Ok((3, ('a', 'b', 'c'))));

        let parser = tuple3(equal('a'), equal('x'), equal('c'));
        assert!(parser.parse(&input, 0).is_err());
    }

    #[test]
    fn test_delimited() {
        let input = chars("(x)y");
        let parser = delimited(equal('('), equal('x'), equal(')'));
        assert_eq!(parser.parse(&input, 0), Ok((3, 'x')));

        let input = chars("(x!");
        assert!(parser.parse(&input, 0).is_err());
    }

    #[test]
    fn test_satisfy_with() {
        let input = chars("ab");
        let parser = satisfy_with(equal('a'), |c| *c == 'a');
        assert_eq!(parser.parse(&input, 0), Ok((1, 'a')));

        // the inner parser succeeds and consumes, the predicate rejects:
        // the whole combinator fails
        let parser = satisfy_with(equal('a'), |_| false);
        assert_eq!(
            parser.parse(&input, 0),
            Err(ParseError::Predicate { position: 0 })
        );
    }

    #[test]
    fn test_with_context_wraps_errors() {
        let input = chars("z");
        let parser = with_context(equal('a'), "letter a");
        match parser.parse(&input, 0) {
            Err(ParseError::Context { context, .. }) => assert_eq!(context, "letter a"),
            other => panic!("expected context error, got {other:?}"),
        }
        // success is untouched
        let input = chars("a");
        assert_eq!(parser.parse(&input, 0), Ok((1, 'a')));
    }

    #[test]
    fn test_lazy_defers_construction() {
        use std::cell::Cell;
        let constructed = Cell::new(false);
        let parser = lazy(|| {
            constructed.set(true);
            equal('a')
        });
        assert!(!constructed.get());
        let input = chars("a");
        assert_eq!(parser.parse(&input, 0), Ok((1, 'a')));
        assert!(constructed.get());
    }

    proptest! {
        // functor law: map(p, identity) behaves identically to p
        #[test]
        fn prop_map_identity(input in "\\PC*", pos in 0usize..8) {
            let input: Vec<char> = input.chars().collect();
            let plain = equal('a');
            let mapped = map(equal('a'), |c| c);
            prop_assert_eq!(mapped.parse(&input, pos), plain.parse(&input, pos));
        }

        // many never fails, never rewinds, never overruns
        #[test]
        fn prop_many_is_total(input in "[ab]{0,32}") {
            let input: Vec<char> = input.chars().collect();
            let parser = many(equal('a'));
            let (pos, items) = parser.parse(&input, 0).unwrap();
            prop_assert!(pos <= input.len());
            prop_assert_eq!(pos, items.len());
        }
    }
}
