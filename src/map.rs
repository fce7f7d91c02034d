use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that transforms the output of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<S, P, F, T, U> Parser<S> for Map<P, F>
where
    P: Parser<S, Output = T>,
    F: Fn(T) -> U,
{
    type Output = U;

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<U> {
        let value = self.parser.parse(cursor)?;
        Ok((self.mapper)(value))
    }
}

/// Convenience function to create a Map parser
pub fn map<S, P, F, T, U>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<S, Output = T>,
    F: Fn(T) -> U,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<S>: Parser<S> + Sized {
    fn map<F, U>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Self::Output) -> U,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<S, P> MapExt<S> for P where P: Parser<S> {}
