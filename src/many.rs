use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Each attempt runs under a checkpoint: a success commits and accumulates,
/// the first failure rolls back and ends the loop. The loop also ends when
/// the cursor is exhausted, which keeps a non-consuming sub-parser from
/// spinning at the end of input.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<S, P> Parser<S> for Many<P>
where
    P: Parser<S>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<Self::Output> {
        let mut results = Vec::new();

        while cursor.has_next() {
            cursor.mark();
            match self.parser.parse(cursor) {
                Ok(value) => {
                    cursor.commit();
                    results.push(value);
                }
                Err(_) => {
                    // Many matches zero or more, so the error is not propagated
                    cursor.rollback();
                    break;
                }
            }
        }

        Ok(results)
    }
}

/// Convenience function to create a Many parser
pub fn many<S, P>(parser: P) -> Many<P>
where
    P: Parser<S>,
{
    Many::new(parser)
}
