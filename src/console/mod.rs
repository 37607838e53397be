//! Console command language
//!
//! The editing surface of floorset is a line-oriented command language:
//! one command per line, lexed with logos and parsed by a small
//! recursive-descent pass. Parse errors carry spans and render through
//! ariadne with the offending line as source.

pub mod lexer;
pub mod parser;

pub use lexer::{lex, Token};
pub use parser::{parse_line, Command};
