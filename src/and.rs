use crate::cursor::Cursor;
use crate::error::ParseResult;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. This is due
/// to Rust's lack of variadic generics; the destructuring pattern is explicit
/// about the parsing order, and a combining function is applied afterwards with
/// `map`/`try_map`.
///
/// The sequence stops at the first failing sub-parser and forwards its error.
/// No checkpoint is taken: a failed sequence may leave partial consumption
/// behind, and `or`/`maybe` own the rollback.
///
/// Example:
/// ```
/// use retrace::and::AndExt;
/// use retrace::map::MapExt;
/// use retrace::one::is;
/// use retrace::Parser;
///
/// let tokens: Vec<char> = "ab".chars().collect();
/// let parser = is('a').and(is('b')).map(|(a, b)| format!("{a}{b}"));
/// assert_eq!(parser.parse_slice(&tokens), Ok("ab".to_string()));
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<S, P1, P2> Parser<S> for And<P1, P2>
where
    P1: Parser<S>,
    P2: Parser<S>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(&self, cursor: &mut Cursor<'_, S>) -> ParseResult<Self::Output> {
        let result1 = self.parser1.parse(cursor)?;
        let result2 = self.parser2.parse(cursor)?;
        Ok((result1, result2))
    }
}

/// Convenience function to create an And parser
pub fn and<S, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<S>,
    P2: Parser<S>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<S>: Parser<S> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<S>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<S, P> AndExt<S> for P where P: Parser<S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::one::is;

    #[test]
    fn test_and_both_succeed() {
        let data = ['A', '5', 'x'];
        let mut cursor = Cursor::new(&data);
        let parser = is('A').and(is('5'));

        assert_eq!(parser.parse(&mut cursor), Ok(('A', '5')));
        assert_eq!(cursor.peek(), Some(&'x'));
    }

    #[test]
    fn test_and_first_fails() {
        let data = ['B', 'x'];
        let mut cursor = Cursor::new(&data);
        let parser = is('A').and(is('x'));

        let error = parser.parse(&mut cursor).unwrap_err();
        assert_eq!(error.position(), 0);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_and_second_fails_after_first_consumed() {
        let data = ['a', 'c'];
        let mut cursor = Cursor::new(&data);
        let parser = is('a').and(is('b'));

        // First sub-parser consumed 'a'; failure is positioned at the
        // second sub-parser's mismatch.
        let error = parser.parse(&mut cursor).unwrap_err();
        assert_eq!(error.position(), 1);
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_and_chain() {
        let data = ['A', '5', 'B'];
        let mut cursor = Cursor::new(&data);
        let parser = is('A').and(is('5')).and(is('B'));

        let ((a, five), b) = parser.parse(&mut cursor).unwrap();
        assert_eq!(a, 'A');
        assert_eq!(five, '5');
        assert_eq!(b, 'B');
        assert!(!cursor.has_next());
    }

    #[test]
    fn test_and_function_syntax() {
        let data = ['X', 'Y'];
        let mut cursor = Cursor::new(&data);
        let parser = and(is('X'), is('Y'));

        assert_eq!(parser.parse(&mut cursor), Ok(('X', 'Y')));
        assert!(!cursor.has_next());
    }
}
