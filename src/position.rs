use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// A half-open index range `[start, end)` into the parsed sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start position (inclusive)
    pub start: usize,
    /// End position (exclusive)
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Number of tokens the span covers
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A parser combinator that captures the index span of a successful parse
pub struct Position<P> {
    parser: P,
}

impl<P> Position<P> {
    pub fn new(parser: P) -> Self {
        Position { parser }
    }
}

impl<S, P> Parser<S> for Position<P>
where
    P: Parser<S>,
{
    type Output = (P::Output, Span);

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<Self::Output> {
        let start = cursor.position();
        let value = self.parser.parse(cursor)?;
        Ok((value, Span::new(start, cursor.position())))
    }
}

/// Extension trait to add position tracking to any parser
pub trait PositionExt<S>: Parser<S> + Sized {
    /// Wrap this parser to capture its position span
    fn with_position(self) -> Position<Self> {
        Position::new(self)
    }
}

impl<S, P> PositionExt<S> for P where P: Parser<S> {}

/// Convenience function to create a Position combinator
pub fn position<P>(parser: P) -> Position<P> {
    Position::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::one::is;
    use crate::take_while::take_while1;

    #[test]
    fn test_span_basic() {
        let span = Span::new(2, 5);
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_empty() {
        let span = Span::new(3, 3);
        assert_eq!(span.len(), 0);
        assert!(span.is_empty());
    }

    #[test]
    fn test_with_position_captures_consumed_range() {
        let data: Vec<char> = "42x".chars().collect();
        let mut cursor = Cursor::new(&data);
        let parser = take_while1(|c: &char| c.is_ascii_digit()).with_position();

        let (digits, span) = parser.parse(&mut cursor).unwrap();
        assert_eq!(digits, vec!['4', '2']);
        assert_eq!(span, Span::new(0, 2));
    }

    #[test]
    fn test_with_position_mid_input() {
        let data: Vec<char> = "ab".chars().collect();
        let mut cursor = Cursor::new(&data);
        is('a').parse(&mut cursor).unwrap();

        let (value, span) = position(is('b')).parse(&mut cursor).unwrap();
        assert_eq!(value, 'b');
        assert_eq!(span, Span::new(1, 2));
    }

    #[test]
    fn test_with_position_forwards_failure() {
        let data = ['x'];
        let mut cursor = Cursor::new(&data);
        let parser = is('a').with_position();

        assert!(parser.parse(&mut cursor).is_err());
        assert_eq!(cursor.position(), 0);
    }
}
