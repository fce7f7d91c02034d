use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::Parser;
use crate::token::Token;

/// Parser that accumulates tokens while a predicate holds
///
/// Pulls tokens directly off the cursor with no per-token checkpointing:
/// every matched token is consumed unconditionally, and the run ends at the
/// first token that fails the predicate or at the end of input. Always
/// succeeds, possibly with an empty accumulation.
pub struct TakeWhile<F> {
    predicate: F,
}

impl<F> TakeWhile<F> {
    pub fn new(predicate: F) -> Self {
        TakeWhile { predicate }
    }
}

impl<S, F> Parser<S> for TakeWhile<F>
where
    S: Token,
    F: Fn(&S) -> bool,
{
    type Output = Vec<S>;

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<Vec<S>> {
        Ok(accumulate(cursor, &self.predicate))
    }
}

/// Parser like `TakeWhile` that requires at least one matching token
pub struct TakeWhile1<F> {
    predicate: F,
}

impl<F> TakeWhile1<F> {
    pub fn new(predicate: F) -> Self {
        TakeWhile1 { predicate }
    }
}

impl<S, F> Parser<S> for TakeWhile1<F>
where
    S: Token,
    F: Fn(&S) -> bool,
{
    type Output = Vec<S>;

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<Vec<S>> {
        let results = accumulate(cursor, &self.predicate);
        if results.is_empty() {
            return Err(ParseError::new(
                cursor.position(),
                "expected at least one matching token",
            ));
        }
        Ok(results)
    }
}

fn accumulate<S: Token>(cursor: &mut Cursor<'_, S>, predicate: impl Fn(&S) -> bool) -> Vec<S> {
    let mut results = Vec::new();
    while let Some(token) = cursor.peek() {
        if !predicate(token) {
            break;
        }
        results.push(token.clone());
        cursor.next();
    }
    results
}

/// Convenience function: zero or more tokens passing `predicate`.
pub fn take_while<F>(predicate: F) -> TakeWhile<F> {
    TakeWhile::new(predicate)
}

/// Convenience function: one or more tokens passing `predicate`.
pub fn take_while1<F>(predicate: F) -> TakeWhile1<F> {
    TakeWhile1::new(predicate)
}
