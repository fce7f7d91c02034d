//! Character-token conveniences built entirely from the core combinators.
//!
//! Strings are materialized into `Vec<char>` up front (`parse_str`), so
//! positions reported by errors are char indices, not byte offsets.

use crate::between::between;
use crate::error::ParseResult;
use crate::literal::literal;
use crate::map::MapExt;
use crate::one::satisfy;
use crate::parser::Parser;
use crate::set::{AnyOfParser, NoneOfParser, any_of, none_of};
use crate::take_while::{take_while, take_while1};
use std::borrow::Cow;

/// Run a character parser against a string.
pub fn parse_str<P>(parser: &P, input: &str) -> ParseResult<P::Output>
where
    P: Parser<char>,
{
    let chars: Vec<char> = input.chars().collect();
    parser.parse_slice(&chars)
}

/// Collect accumulated characters into a `String`.
pub fn concat(chars: Vec<char>) -> String {
    chars.into_iter().collect()
}

/// A single ASCII digit.
pub fn digit() -> impl Parser<char, Output = char> {
    satisfy(|c: &char| c.is_ascii_digit())
}

/// A non-empty run of ASCII digits, concatenated.
pub fn digits() -> impl Parser<char, Output = String> {
    take_while1(|c: &char| c.is_ascii_digit()).map(concat)
}

/// A single alphabetic character.
pub fn letter() -> impl Parser<char, Output = char> {
    satisfy(|c: &char| c.is_alphabetic())
}

/// A non-empty run of alphabetic characters, concatenated.
pub fn letters() -> impl Parser<char, Output = String> {
    take_while1(|c: &char| c.is_alphabetic()).map(concat)
}

/// A possibly-empty run of whitespace, concatenated. Never fails.
pub fn whitespace() -> impl Parser<char, Output = String> {
    take_while(|c: &char| c.is_whitespace()).map(concat)
}

/// An exact string match, yielding the matched text.
pub fn match_str(expected: impl Into<Cow<'static, str>>) -> impl Parser<char, Output = String> {
    let expected = expected.into();
    let tokens: Vec<char> = expected.chars().collect();
    literal(tokens).map(move |_| expected.clone().into_owned())
}

/// Any character that appears in `set`.
pub fn any_char(set: &str) -> AnyOfParser<char> {
    any_of(set.chars())
}

/// Any character that does not appear in `set`.
pub fn none_char(set: &str) -> NoneOfParser<char> {
    none_of(set.chars())
}

/// Trim leading and trailing whitespace around `parser`.
pub fn clear<P>(parser: P) -> impl Parser<char, Output = P::Output>
where
    P: Parser<char>,
{
    between(whitespace(), parser, whitespace())
}

/// Map a char index (as carried by `ParseError`) to a 1-based line number
/// and the 0-based char offset within that line.
pub fn line_offset(input: &str, position: usize) -> (usize, usize) {
    let mut line = 1;
    let mut line_start = 0;
    for (i, c) in input.chars().take(position).enumerate() {
        if c == '\n' {
            line += 1;
            line_start = i + 1;
        }
    }
    (line, position - line_start)
}
