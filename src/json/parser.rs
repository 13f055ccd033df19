use std::collections::HashMap;

use super::ast::JsonValue;
use crate::combinator::prelude::*;
use crate::combinator::text::*;
use crate::combinator::{ParseError, Parser};

/// Parses a JSON value from the start of `input`.
///
/// Returns the value and the unconsumed remainder of the input. Trailing
/// text after a complete value is not an error; callers that require the
/// whole input to be consumed must check the remainder themselves.
pub fn parse_json(input: &str) -> Result<(JsonValue, String), ParseError> {
    let chars: Vec<char> = input.chars().collect();
    let (pos, value) = parse_value().parse(&chars, 0)?;
    Ok((value, chars[pos..].iter().collect()))
}

/// Top-level value rule.
///
/// Float must be tried before integer: on `3.14` the integer parser would
/// succeed with `3` and leave `.14` unconsumed, and since alternatives are
/// only retried from the original position that wrong partial parse would
/// win. The ordering is load-bearing.
pub fn parse_value() -> impl Parser<char, JsonValue> {
    with_context(
        choice(vec![
            Box::new(parse_string()),
            Box::new(parse_float()),
            Box::new(parse_integer()),
            Box::new(parse_boolean()),
            Box::new(parse_null()),
            Box::new(lazy(parse_array)),
            Box::new(lazy(parse_object)),
        ]),
        "json value",
    )
}

fn parse_string() -> impl Parser<char, JsonValue> {
    map(trim(quoted_string()), JsonValue::String)
}

fn parse_float() -> impl Parser<char, JsonValue> {
    map(trim(float()), JsonValue::Float)
}

fn parse_integer() -> impl Parser<char, JsonValue> {
    map(trim(integer()), JsonValue::Int)
}

fn parse_boolean() -> impl Parser<char, JsonValue> {
    map(
        choice(vec![Box::new(symbol("true")), Box::new(symbol("false"))]),
        |s| JsonValue::Bool(s == "true"),
    )
}

fn parse_null() -> impl Parser<char, JsonValue> {
    map(symbol("null"), |_| JsonValue::Null)
}

pub fn parse_array() -> impl Parser<char, JsonValue> {
    with_context(
        map(
            delimited(
                symbol("["),
                separated_list(lazy(parse_value), symbol(",")),
                symbol("]"),
            ),
            JsonValue::Array,
        ),
        "json array",
    )
}

/// One `"key": value` pair. The key is always a quoted string.
fn parse_pair() -> impl Parser<char, (String, JsonValue)> {
    map(
        tuple3(trim(quoted_string()), symbol(":"), lazy(parse_value)),
        |(key, _, value)| (key, value),
    )
}

pub fn parse_object() -> impl Parser<char, JsonValue> {
    with_context(
        map(
            delimited(
                symbol("{"),
                separated_list(parse_pair(), symbol(",")),
                symbol("}"),
            ),
            |pairs| JsonValue::Object(pairs.into_iter().collect::<HashMap<_, _>>()),
        ),
        "json object",
    )
}
