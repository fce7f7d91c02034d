use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// The first occurrence is required and its failure is propagated; after
/// that it accumulates exactly like `many`.
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<S, P> Parser<S> for Some<P>
where
    P: Parser<S>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<Self::Output> {
        let mut results = Vec::new();

        // First parse must succeed
        let first = self.parser.parse(cursor)?;
        results.push(first);

        while cursor.has_next() {
            cursor.mark();
            match self.parser.parse(cursor) {
                Ok(value) => {
                    cursor.commit();
                    results.push(value);
                }
                Err(_) => {
                    cursor.rollback();
                    break;
                }
            }
        }

        Ok(results)
    }
}

/// Convenience function to create a Some parser
pub fn some<S, P>(parser: P) -> Some<P>
where
    P: Parser<S>,
{
    Some::new(parser)
}
