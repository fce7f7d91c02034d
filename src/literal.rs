use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::Parser;
use crate::token::Token;

/// Parser that matches an exact token subsequence, element by element
///
/// On a mismatch the error is positioned at the first non-matching token
/// and the tokens already matched stay consumed; callers that need a clean
/// position on failure wrap the literal in `or`/`maybe`.
pub struct LiteralParser<S> {
    expected: Vec<S>,
}

impl<S> LiteralParser<S> {
    pub fn new(expected: Vec<S>) -> Self {
        LiteralParser { expected }
    }
}

impl<S: Token> Parser<S> for LiteralParser<S> {
    type Output = Vec<S>;

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<Vec<S>> {
        for expected in &self.expected {
            match cursor.peek() {
                Some(token) if token == expected => {
                    cursor.next();
                }
                Some(token) => {
                    return Err(ParseError::new(
                        cursor.position(),
                        format!(
                            "expected {:?}, found {:?} while matching {:?}",
                            expected, token, self.expected
                        ),
                    ));
                }
                None => {
                    return Err(ParseError::new(
                        cursor.position(),
                        format!(
                            "reached end of input while matching {:?}",
                            self.expected
                        ),
                    ));
                }
            }
        }
        Ok(self.expected.clone())
    }
}

/// Convenience function: the next N tokens exactly equal `expected`.
pub fn literal<S>(expected: impl IntoIterator<Item = S>) -> LiteralParser<S> {
    LiteralParser::new(expected.into_iter().collect())
}
