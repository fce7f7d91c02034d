use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that keeps an inner value while discarding what surrounds it
///
/// Runs open, inner, close in order against the same cursor,
/// short-circuiting on the first failure, and returns only the inner value.
/// Delimited syntax (`[...]`, quoted strings) and trimming both reduce to
/// this shape.
pub struct Between<P1, P2, P3> {
    open: P1,
    inner: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, inner: P2, close: P3) -> Self {
        Between { open, inner, close }
    }
}

impl<S, P1, P2, P3> Parser<S> for Between<P1, P2, P3>
where
    P1: Parser<S>,
    P2: Parser<S>,
    P3: Parser<S>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<Self::Output> {
        self.open.parse(cursor)?;
        let value = self.inner.parse(cursor)?;
        self.close.parse(cursor)?;
        Ok(value)
    }
}

/// Convenience function to create a Between parser
pub fn between<S, P1, P2, P3>(open: P1, inner: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<S>,
    P2: Parser<S>,
    P3: Parser<S>,
{
    Between::new(open, inner, close)
}
