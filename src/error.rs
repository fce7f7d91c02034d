use std::borrow::Cow;

/// Outcome of every parser invocation.
pub type ParseResult<T> = Result<T, ParseError>;

/// Positioned failure descriptor returned instead of a value.
///
/// `position` is the cursor index at which the failure was detected and is
/// the field combinators and callers rely on; `message` rides along for
/// diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("parse error at position {position}: {message}")]
pub struct ParseError {
    pub position: usize,
    pub message: Cow<'static, str>,
}

impl ParseError {
    pub fn new(position: usize, message: impl Into<Cow<'static, str>>) -> Self {
        ParseError {
            position,
            message: message.into(),
        }
    }

    /// Failure caused by running out of input.
    pub fn end_of_input(position: usize) -> Self {
        ParseError::new(position, "unexpected end of input")
    }

    /// The index into the input where the failure was detected.
    pub fn position(&self) -> usize {
        self.position
    }
}
