//! # INI Grammar
//!
//! A strict line-scanning INI parser. Lines are processed top to bottom:
//! blank lines and `;`/`#` comments are skipped, `[name]` opens a new
//! section, and every other line must be a single `key=value` entry
//! belonging to the current section. Anything else fails the whole parse.

pub mod ast;
pub mod parser;

pub use ast::{Entry, IniDocument, Section};
pub use parser::parse_ini;
