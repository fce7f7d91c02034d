use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::Parser;

/// Parser combinator that rewrites the error of a failing parse
///
/// Used at grammar boundaries to replace a low-level mismatch message with
/// one phrased in the grammar's vocabulary. Successes pass through
/// untouched.
pub struct MapErr<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> MapErr<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        MapErr { parser, mapper }
    }
}

impl<S, P, F> Parser<S> for MapErr<P, F>
where
    P: Parser<S>,
    F: Fn(ParseError) -> ParseError,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<Self::Output> {
        self.parser.parse(cursor).map_err(&self.mapper)
    }
}

/// Extension trait to add .map_err() method support for parsers
pub trait MapErrExt<S>: Parser<S> + Sized {
    fn map_err<F>(self, mapper: F) -> MapErr<Self, F>
    where
        F: Fn(ParseError) -> ParseError,
    {
        MapErr::new(self, mapper)
    }
}

/// Implement MapErrExt for all parsers
impl<S, P> MapErrExt<S> for P where P: Parser<S> {}

/// Convenience function to create a MapErr parser
pub fn map_err<S, P, F>(parser: P, mapper: F) -> MapErr<P, F>
where
    P: Parser<S>,
    F: Fn(ParseError) -> ParseError,
{
    MapErr::new(parser, mapper)
}
