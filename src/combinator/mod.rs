//! # Combinator Core
//!
//! A small algebra of composable parsers over slices of input elements.
//!
//! ## Core Components
//!
//! * **Parser Trait**: [`core::Parser`] defines the parsing contract
//! * **Combinators**: [`combinators`] holds the composable building blocks
//! * **Text Primitives**: [`text`] scans raw characters where nothing
//!   lower-level exists (literals, numbers, quoted strings)
//! * **Prelude**: [`prelude`] exposes lowercase constructors
//!
//! ## Design
//!
//! A parser is a pure function from `(input, position)` to either a new
//! position plus a value, or an error. Alternation retries from the
//! original position only at [`combinators::Choice`] boundaries; a chain
//! that consumed input and then failed is never unwound into a sibling
//! alternative. Repetition combinators are iterative, so stack depth is
//! bounded by grammar nesting, not by input length.

pub mod combinators;
pub mod core;
pub mod prelude;
pub mod text;

pub use self::core::ParseError;
pub use self::core::ParseResult;
pub use self::core::Parser;
