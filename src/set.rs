use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::Parser;
use crate::token::Token;

/// Parser that matches the next token against a fixed membership set
pub struct AnyOfParser<S> {
    tokens: Vec<S>,
}

impl<S> AnyOfParser<S> {
    pub fn new(tokens: Vec<S>) -> Self {
        AnyOfParser { tokens }
    }
}

impl<S: Token> Parser<S> for AnyOfParser<S> {
    type Output = S;

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<S> {
        match cursor.peek() {
            Some(token) if self.tokens.contains(token) => {
                cursor.next();
                Ok(token.clone())
            }
            Some(token) => Err(ParseError::new(
                cursor.position(),
                format!("expected one of {:?}, found {:?}", self.tokens, token),
            )),
            None => Err(ParseError::end_of_input(cursor.position())),
        }
    }
}

/// Parser that matches the next token when it is outside a fixed set
pub struct NoneOfParser<S> {
    tokens: Vec<S>,
}

impl<S> NoneOfParser<S> {
    pub fn new(tokens: Vec<S>) -> Self {
        NoneOfParser { tokens }
    }
}

impl<S: Token> Parser<S> for NoneOfParser<S> {
    type Output = S;

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<S> {
        match cursor.peek() {
            Some(token) if !self.tokens.contains(token) => {
                cursor.next();
                Ok(token.clone())
            }
            Some(token) => Err(ParseError::new(
                cursor.position(),
                format!("unexpected {:?}", token),
            )),
            None => Err(ParseError::end_of_input(cursor.position())),
        }
    }
}

/// Convenience function: the next token if it is a member of `tokens`.
pub fn any_of<S>(tokens: impl IntoIterator<Item = S>) -> AnyOfParser<S> {
    AnyOfParser::new(tokens.into_iter().collect())
}

/// Convenience function: the next token if it is *not* a member of `tokens`.
pub fn none_of<S>(tokens: impl IntoIterator<Item = S>) -> NoneOfParser<S> {
    NoneOfParser::new(tokens.into_iter().collect())
}
