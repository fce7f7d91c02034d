use crate::cursor::Cursor;
use crate::error::{ParseError, ParseResult};
use crate::parser::Parser;

/// Parser that succeeds only when the input is exhausted
///
/// Appended to a grammar's top-level parser to reject trailing input.
pub struct End;

impl End {
    pub fn new() -> Self {
        End
    }
}

impl<S> Parser<S> for End {
    type Output = ();

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<()> {
        if cursor.has_next() {
            Err(ParseError::new(
                cursor.position(),
                "expected end of input",
            ))
        } else {
            Ok(())
        }
    }
}

/// Convenience function to create an End parser
pub fn end() -> End {
    End::new()
}
