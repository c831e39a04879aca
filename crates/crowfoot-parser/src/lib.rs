//! Parser for crow's-foot ERD relationship lines.
//!
//! This crate extracts directed entity relations from loosely-structured
//! diagram text. The public entry point is [`parse`], which is total:
//! malformed or unrecognized lines contribute nothing instead of failing.

mod parser;


pub use parser::parse;
