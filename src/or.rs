use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::Parser;

/// Parser combinator that tries the first parser, and if it fails, tries the second parser
///
/// Ordered choice: the first alternative to succeed wins, with no
/// longest-match comparison. Each attempt runs under a checkpoint, so a
/// failing alternative never leaks consumption; when every alternative
/// fails, the cursor is back where it started and a fresh error is
/// synthesized at that position.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<S, P1, P2, O> Parser<S> for Or<P1, P2>
where
    P1: Parser<S, Output = O>,
    P2: Parser<S, Output = O>,
{
    type Output = O;

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<O> {
        cursor.mark();
        if let Ok(value) = self.parser1.parse(cursor) {
            cursor.commit();
            return Ok(value);
        }
        cursor.rollback();

        cursor.mark();
        match self.parser2.parse(cursor) {
            Ok(value) => {
                cursor.commit();
                Ok(value)
            }
            Err(_) => {
                cursor.rollback();
                Err(ParseError::new(cursor.position(), "no alternative matched"))
            }
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<S>: Parser<S> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<S, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<S, P> OrExt<S> for P where P: Parser<S> {}

/// Convenience function to create an Or parser
pub fn or<S, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<S, Output = O>,
    P2: Parser<S, Output = O>,
{
    Or::new(parser1, parser2)
}
