//! Lowercase constructor functions for the combinator structs.
//!
//! Grammar modules import this with `use crate::combinator::prelude::*;`
//! and compose parsers without naming the struct types.

use super::combinators::*;
use super::core::Parser;

pub fn pure<I, O: Clone>(value: O) -> Pure<I, O> {
    Pure::new(value)
}

pub fn fail<I, O>(message: &str) -> Fail<I, O> {
    Fail::new(message)
}

pub fn satisfy<I, O, F>(f: F) -> Satisfy<I, O, F>
where
    F: Fn(&I) -> Option<O>,
{
    Satisfy::new(f)
}

pub fn equal<I: Clone + PartialEq>(value: I) -> Equal<I> {
    Equal::new(value)
}

pub fn map<P, F, A, B, I>(parser: P, f: F) -> Map<P, F, A, B>
where
    P: Parser<I, A>,
    F: Fn(A) -> B,
{
    Map::new(parser, f)
}

pub fn bind<P, F, I, A, B, Q>(parser: P, f: F) -> Bind<P, F, I, A, B, Q>
where
    P: Parser<I, A>,
    Q: Parser<I, B>,
    F: Fn(A) -> Q,
{
    Bind::new(parser, f)
}

pub fn choice<I, O>(parsers: Vec<Box<dyn Parser<I, O>>>) -> Choice<I, O> {
    Choice::new(parsers)
}

pub fn sequence<I, O>(parsers: Vec<Box<dyn Parser<I, O>>>) -> Sequence<I, O> {
    Sequence::new(parsers)
}

pub fn preceded<P1, P2, I, O1, O2>(parser1: P1, parser2: P2) -> Preceded<P1, P2, I, O1, O2>
where
    P1: Parser<I, O1>,
    P2: Parser<I, O2>,
{
    Preceded::new(parser1, parser2)
}

pub fn terminated<P1, P2, I, O1, O2>(parser1: P1, parser2: P2) -> Terminated<P1, P2, I, O1, O2>
where
    P1: Parser<I, O1>,
    P2: Parser<I, O2>,
{
    Terminated::new(parser1, parser2)
}

pub fn many<P, I, O>(parser: P) -> Many<P, I, O>
where
    P: Parser<I, O>,
{
    Many::new(parser)
}

pub fn many1<P, I, O>(parser: P) -> Many1<P, I, O>
where
    P: Parser<I, O>,
{
    Many1::new(parser)
}

pub fn optional<P, I, O>(parser: P) -> Optional<P, I, O>
where
    P: Parser<I, O>,
{
    Optional::new(parser)
}

pub fn separated_list<P, S, I, O, OS>(
    item_parser: P,
    separator_parser: S,
) -> SeparatedList<P, S, I, O, OS>
where
    P: Parser<I, O>,
    S: Parser<I, OS>,
{
    SeparatedList::new(item_parser, separator_parser)
}

pub fn tuple2<P1, P2, I, O1, O2>(parser1: P1, parser2: P2) -> Tuple2<P1, P2, I, O1, O2>
where
    P1: Parser<I, O1>,
    P2: Parser<I, O2>,
{
    Tuple2::new(parser1, parser2)
}

pub fn tuple3<P1, P2, P3, I, O1, O2, O3>(
    parser1: P1,
    parser2: P2,
    parser3: P3,
) -> Tuple3<P1, P2, P3, I, O1, O2, O3>
where
    P1: Parser<I, O1>,
    P2: Parser<I, O2>,
    P3: Parser<I, O3>,
{
    Tuple3::new(parser1, parser2, parser3)
}

pub fn delimited<L, P, R, I, OL, O, OR>(
    left: L,
    parser: P,
    right: R,
) -> Delimited<L, P, R, I, OL, O, OR>
where
    L: Parser<I, OL>,
    P: Parser<I, O>,
    R: Parser<I, OR>,
{
    Delimited::new(left, parser, right)
}

pub fn satisfy_with<P, F, I, O>(parser: P, predicate: F) -> SatisfyWith<P, F, I, O>
where
    P: Parser<I, O>,
    F: Fn(&O) -> bool,
{
    SatisfyWith::new(parser, predicate)
}

pub fn with_context<P, I, O, C>(parser: P, context: C) -> WithContext<P, C>
where
    P: Parser<I, O>,
    C: ToString,
{
    WithContext::new(parser, context)
}

pub fn lazy<I, O, F, P>(f: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<I, O>,
{
    Lazy::new(f)
}
