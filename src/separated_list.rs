use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that matches a list of items separated by a parser
///
/// Parses one required item, then zero or more (separator, item) pairs.
/// Each pair is attempted under a single checkpoint and rolled back as a
/// unit when either half fails, so a trailing separator is never consumed
/// and never an error: the cursor is left pointing at it.
///
/// # Examples
/// - `"a,b,c"` with separator `,` → `vec!['a', 'b', 'c']`
/// - `"a,a,a,b"` with item `is('a')` → `vec!['a', 'a', 'a']`, cursor on the
///   final `,`
///
/// Fails only when the very first item fails. The separator is itself a
/// parser; pass `is(token)` for a plain delimiter token.
pub struct SeparatedList<P, PS> {
    parser: P,
    separator: PS,
}

impl<P, PS> SeparatedList<P, PS> {
    pub fn new(parser: P, separator: PS) -> Self {
        SeparatedList { parser, separator }
    }
}

impl<S, P, PS> Parser<S> for SeparatedList<P, PS>
where
    P: Parser<S>,
    PS: Parser<S>,
{
    type Output = Vec<P::Output>;

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<Self::Output> {
        // The first element is required
        let first = self.parser.parse(cursor)?;
        let mut results = vec![first];

        loop {
            cursor.mark();
            let attempt = self
                .separator
                .parse(cursor)
                .and_then(|_| self.parser.parse(cursor));
            match attempt {
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

/// Convenience function to create a SeparatedList parser
pub fn separated_list<S, P, PS>(parser: P, separator: PS) -> SeparatedList<P, PS>
where
    P: Parser<S>,
    PS: Parser<S>,
{
    SeparatedList::new(parser, separator)
}
