use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::Parser;
use crate::token::Token;

/// Parser that consumes and returns the next token unconditionally
pub struct OneParser;

impl OneParser {
    pub fn new() -> Self {
        OneParser
    }
}

impl<S: Token> Parser<S> for OneParser {
    type Output = S;

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<S> {
        match cursor.next() {
            Some(token) => Ok(token.clone()),
            None => Err(ParseError::end_of_input(cursor.position())),
        }
    }
}

/// Parser that matches one specific token
pub struct IsParser<S> {
    expected: S,
}

impl<S> IsParser<S> {
    pub fn new(expected: S) -> Self {
        IsParser { expected }
    }
}

impl<S: Token> Parser<S> for IsParser<S> {
    type Output = S;

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<S> {
        match cursor.peek() {
            Some(token) if *token == self.expected => {
                cursor.next();
                Ok(token.clone())
            }
            Some(token) => Err(ParseError::new(
                cursor.position(),
                format!("expected {:?}, found {:?}", self.expected, token),
            )),
            None => Err(ParseError::end_of_input(cursor.position())),
        }
    }
}

/// Parser that matches the next token against a predicate
pub struct SatisfyParser<F> {
    predicate: F,
}

impl<F> SatisfyParser<F> {
    pub fn new(predicate: F) -> Self {
        SatisfyParser { predicate }
    }
}

impl<S, F> Parser<S> for SatisfyParser<F>
where
    S: Token,
    F: Fn(&S) -> bool,
{
    type Output = S;

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<S> {
        match cursor.peek() {
            Some(token) if (self.predicate)(token) => {
                cursor.next();
                Ok(token.clone())
            }
            Some(token) => Err(ParseError::new(
                cursor.position(),
                format!("{:?} did not satisfy predicate", token),
            )),
            None => Err(ParseError::end_of_input(cursor.position())),
        }
    }
}

/// Convenience function: the next token, whatever it is.
pub fn one() -> OneParser {
    OneParser::new()
}

/// Convenience function: the next token if it equals `expected`.
pub fn is<S>(expected: S) -> IsParser<S> {
    IsParser::new(expected)
}

/// Convenience function: the next token if it passes `predicate`.
pub fn satisfy<F>(predicate: F) -> SatisfyParser<F> {
    SatisfyParser::new(predicate)
}
