//! # JSON Grammar
//!
//! A recursive-descent JSON parser composed from the combinator core.
//! The grammar parses a *prefix* of the input: trailing text after a
//! complete value is returned to the caller, not rejected.

pub mod ast;
pub mod parser;

pub use ast::JsonValue;
pub use parser::parse_json;
