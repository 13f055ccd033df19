//! # parsekit
//!
//! Char-level parser combinators, plus two grammars built on them.
//!
//! ## Modules
//!
//! * [`combinator`] — the core: the [`Parser`] trait, struct combinators,
//!   text primitives and the `prelude` of constructor functions
//! * [`json`] — a recursive-descent JSON value parser
//! * [`ini`] — a strict line-scanning INI configuration parser
//!
//! ## Usage
//!
//! ```
//! use parsekit::json::{parse_json, JsonValue};
//!
//! let (value, rest) = parse_json("[1, 2, 3]").unwrap();
//! assert_eq!(value, JsonValue::Array(vec![
//!     JsonValue::Int(1),
//!     JsonValue::Int(2),
//!     JsonValue::Int(3),
//! ]));
//! assert!(rest.is_empty());
//! ```
//!
//! Parsers are plain immutable values. Composition happens through the
//! functions in [`combinator::prelude`]; grammars that refer to themselves
//! (JSON arrays contain JSON values) break the cycle with `lazy`.

pub mod combinator;
pub mod ini;
pub mod json;

pub use combinator::{ParseError, ParseResult, Parser};
pub use ini::parse_ini;
pub use json::parse_json;
