use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that runs a kept parser, then an ignored parser
///
/// The kept parser's value is returned once the ignored parser has also
/// succeeded; the first failure among the two short-circuits.
pub struct DropRight<P1, P2> {
    kept: P1,
    ignored: P2,
}

impl<P1, P2> DropRight<P1, P2> {
    pub fn new(kept: P1, ignored: P2) -> Self {
        DropRight { kept, ignored }
    }
}

impl<S, P1, P2> Parser<S> for DropRight<P1, P2>
where
    P1: Parser<S>,
    P2: Parser<S>,
{
    type Output = P1::Output;

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<Self::Output> {
        let value = self.kept.parse(cursor)?;
        self.ignored.parse(cursor)?;
        Ok(value)
    }
}

/// Convenience function: return `kept`'s value, then run and discard `ignored`.
pub fn drop_right<S, P1, P2>(kept: P1, ignored: P2) -> DropRight<P1, P2>
where
    P1: Parser<S>,
    P2: Parser<S>,
{
    DropRight::new(kept, ignored)
}
