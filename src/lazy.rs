use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking recursion cycles between parsers.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Lazy { factory }
    }
}

impl<S, F, P> Parser<S> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<S>,
{
    type Output = P::Output;

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<Self::Output> {
        let parser = (self.factory)();
        parser.parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<S, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<S>,
{
    Lazy::new(factory)
}
