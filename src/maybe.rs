use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that makes another parser optional
///
/// Always succeeds: a successful sub-parse commits and yields `Some`, a
/// failed one rolls the cursor back to where the attempt started and yields
/// `None`. Failure can therefore never leak consumption out of a `maybe`.
pub struct Maybe<P> {
    parser: P,
}

impl<P> Maybe<P> {
    pub fn new(parser: P) -> Self {
        Maybe { parser }
    }
}

impl<S, P> Parser<S> for Maybe<P>
where
    P: Parser<S>,
{
    type Output = Option<P::Output>;

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<Self::Output> {
        cursor.mark();
        match self.parser.parse(cursor) {
            Ok(value) => {
                cursor.commit();
                Ok(Some(value))
            }
            Err(_) => {
                cursor.rollback();
                Ok(None)
            }
        }
    }
}

/// Convenience function to create a Maybe parser
pub fn maybe<S, P>(parser: P) -> Maybe<P>
where
    P: Parser<S>,
{
    Maybe::new(parser)
}
