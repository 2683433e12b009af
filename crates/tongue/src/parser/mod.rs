//! Template parser.
//!
//! Splits a stored template into literal text, simple placeholders
//! (`%{name}`) and plural/gender operators (`%{count, sex -> forms}`).
//! The grammar is total: any input parses, and text that does not form a
//! placeholder is kept as a literal.

pub mod ast;
mod template;

pub use ast::*;
pub use template::parse_template;
