use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that substitutes a default value when the sub-parser fails
///
/// The attempt runs under a checkpoint so a failing sub-parser cannot leak
/// partial consumption: on failure the cursor is restored and the cloned
/// default is returned. Never fails.
pub struct OrDefault<P, T> {
    parser: P,
    default: T,
}

impl<P, T> OrDefault<P, T> {
    pub fn new(parser: P, default: T) -> Self {
        OrDefault { parser, default }
    }
}

impl<S, P, T> Parser<S> for OrDefault<P, T>
where
    P: Parser<S, Output = T>,
    T: Clone,
{
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<T> {
        cursor.mark();
        match self.parser.parse(cursor) {
            Ok(value) => {
                cursor.commit();
                Ok(value)
            }
            Err(_) => {
                cursor.rollback();
                Ok(self.default.clone())
            }
        }
    }
}

/// Convenience function to create an OrDefault parser
pub fn or_default<S, P, T>(parser: P, default: T) -> OrDefault<P, T>
where
    P: Parser<S, Output = T>,
    T: Clone,
{
    OrDefault::new(parser, default)
}
