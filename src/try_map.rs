use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::Parser;
use std::fmt;

/// Parser combinator that applies a fallible transform to a parser's output
///
/// The boundary where user-supplied computation can fail: an `Err` from the
/// transform is converted into a `ParseError` positioned at the cursor's
/// current index, so a failing transform is indistinguishable from any other
/// parse failure to the surrounding combinators. Sub-parser failures are
/// forwarded unchanged.
pub struct TryMap<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> TryMap<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        TryMap { parser, mapper }
    }
}

impl<S, P, F, T, U, E> Parser<S> for TryMap<P, F>
where
    P: Parser<S, Output = T>,
    F: Fn(T) -> Result<U, E>,
    E: fmt::Display,
{
    type Output = U;

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<U> {
        let value = self.parser.parse(cursor)?;
        (self.mapper)(value)
            .map_err(|e| ParseError::new(cursor.position(), e.to_string()))
    }
}

/// Convenience function to create a TryMap parser
pub fn try_map<S, P, F, T, U, E>(parser: P, mapper: F) -> TryMap<P, F>
where
    P: Parser<S, Output = T>,
    F: Fn(T) -> Result<U, E>,
    E: fmt::Display,
{
    TryMap::new(parser, mapper)
}

/// Extension trait to add .try_map() method support for parsers
pub trait TryMapExt<S>: Parser<S> + Sized {
    fn try_map<F, U, E>(self, mapper: F) -> TryMap<Self, F>
    where
        F: Fn(Self::Output) -> Result<U, E>,
        E: fmt::Display,
    {
        TryMap::new(self, mapper)
    }
}

/// Implement TryMapExt for all parsers
impl<S, P> TryMapExt<S> for P where P: Parser<S> {}
