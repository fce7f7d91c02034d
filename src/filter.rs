use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that applies a predicate function to filter the output of another parser
///
/// A rejected output fails with the supplied message at the position where
/// the attempt started; in both failure cases (sub-parser error or
/// rejection) the cursor is restored to that position.
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
    error_message: Cow<'static, str>,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F, error_message: Cow<'static, str>) -> Self {
        Self {
            parser,
            predicate,
            error_message,
        }
    }
}

impl<S, P, F, T> Parser<S> for FilterParser<P, F>
where
    P: Parser<S, Output = T>,
    F: Fn(&T) -> bool,
{
    type Output = T;

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<T> {
        cursor.mark();
        match self.parser.parse(cursor) {
            Ok(value) if (self.predicate)(&value) => {
                cursor.commit();
                Ok(value)
            }
            Ok(_) => {
                cursor.rollback();
                Err(ParseError::new(
                    cursor.position(),
                    self.error_message.clone(),
                ))
            }
            Err(e) => {
                cursor.rollback();
                Err(e)
            }
        }
    }
}

/// Extension trait to add filter method to all parsers
pub trait FilterExt<S>: Parser<S> {
    fn filter<F>(
        self,
        predicate: F,
        error_message: impl Into<Cow<'static, str>>,
    ) -> FilterParser<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate, error_message.into())
    }
}

impl<S, P: Parser<S>> FilterExt<S> for P {}

/// Convenience function to create a filtered parser
pub fn filter<S, P, F>(
    parser: P,
    predicate: F,
    error_message: impl Into<Cow<'static, str>>,
) -> FilterParser<P, F>
where
    P: Parser<S>,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate, error_message.into())
}
