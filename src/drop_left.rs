use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that runs an ignored parser, then a kept parser
///
/// The ignored parser's value is discarded; only the kept parser's value is
/// returned. The first failure among the two short-circuits. Chain calls to
/// discard several prefixes.
pub struct DropLeft<P1, P2> {
    ignored: P1,
    kept: P2,
}

impl<P1, P2> DropLeft<P1, P2> {
    pub fn new(ignored: P1, kept: P2) -> Self {
        DropLeft { ignored, kept }
    }
}

impl<S, P1, P2> Parser<S> for DropLeft<P1, P2>
where
    P1: Parser<S>,
    P2: Parser<S>,
{
    type Output = P2::Output;

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<Self::Output> {
        self.ignored.parse(cursor)?;
        self.kept.parse(cursor)
    }
}

/// Convenience function: run `ignored`, discard it, return `kept`'s value.
pub fn drop_left<S, P1, P2>(ignored: P1, kept: P2) -> DropLeft<P1, P2>
where
    P1: Parser<S>,
    P2: Parser<S>,
{
    DropLeft::new(ignored, kept)
}
