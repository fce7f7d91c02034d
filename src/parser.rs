use crate::cursor::Cursor;
use crate::error::ParseResult;

/// Core trait for parser combinators
///
/// A parser consumes tokens from a cursor and produces an owned value or a
/// positioned error. Parsers hold no mutable state of their own; all
/// mutation happens on the cursor passed at call time, so one parser value
/// may serve any number of sequential or concurrent invocations as long as
/// each invocation gets its own cursor.
///
/// On failure a parser may leave the cursor past where it started;
/// combinators that promise restoration (`or`, `maybe`, `or_default`, ...)
/// wrap the attempt in a checkpoint.
pub trait Parser<S> {
    type Output;

    /// Attempt to parse from the cursor's current position.
    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<Self::Output>;

    /// Run this parser against a fresh cursor over `source`.
    fn parse_slice(&self, source: &[S]) -> ParseResult<Self::Output> {
        let mut cursor = Cursor::new(source);
        self.parse(&mut cursor)
    }
}

/// Any compatible function acts as a parser. This is what makes recursive
/// grammars expressible: a named `fn` can refer to parsers that in turn
/// refer back to it.
impl<S, T, F> Parser<S> for F
where
    F: Fn(&mut Cursor<'_, S>) -> ParseResult<T>,
{
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<T> {
        self(cursor)
    }
}
