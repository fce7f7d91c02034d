//! # Retrace - Backtracking Parser Combinators
//!
//! A parser combinator library over arbitrary token sequences: the same
//! machinery parses character streams, lexer token streams, or any other
//! comparable values.
//!
//! Retrace provides composable, type-safe parsers that combine into complex
//! parsing logic from simple building blocks. The library emphasizes:
//!
//! - **Explicit backtracking**: a single advancing cursor with a checkpoint
//!   stack; `or`, `maybe` and friends mark, commit, and roll back so failed
//!   alternatives never leak consumed input
//! - **Zero panics**: all parsing errors are handled through `Result` types
//! - **Positioned errors**: every failure carries the input index where it
//!   was detected
//! - **Composability**: small parsers combine into larger ones using
//!   combinators; plain functions act as parsers for recursive grammars
//!
//! ```
//! use retrace::one::is;
//! use retrace::or::OrExt;
//! use retrace::Parser;
//!
//! let tokens: Vec<char> = "b".chars().collect();
//! let parser = is('a').or(is('b'));
//! assert_eq!(parser.parse_slice(&tokens), Ok('b'));
//! ```

pub mod and;
pub mod between;
pub mod cursor;
pub mod drop_left;
pub mod drop_right;
pub mod end;
pub mod error;
pub mod filter;
pub mod lazy;
pub mod literal;
pub mod many;
pub mod map;
pub mod map_err;
pub mod maybe;
pub mod one;
pub mod or;
pub mod or_default;
pub mod parser;
pub mod position;
pub mod separated_list;
pub mod set;
pub mod some;
pub mod take_while;
pub mod text;
pub mod token;
pub mod try_map;

pub use cursor::Cursor;
pub use error::{ParseError, ParseResult};
pub use parser::Parser;
pub use position::{Position, PositionExt, Span, position};
pub use token::Token;
